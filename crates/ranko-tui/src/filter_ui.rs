use crate::ui::{chip_span, rgb};
use crate::App;
use ranko_core::Chip;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Breadcrumb row on top, the chips on offer underneath
pub fn render_filter_picker(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_breadcrumbs(frame, app, chunks[0]);
    render_chip_list(frame, app, chunks[1]);
}

fn render_breadcrumbs(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.current_theme.colors;
    let path = app.filter_picker.path();

    let mut spans = Vec::new();
    if path.is_empty() {
        spans.push(Span::styled(
            "Pick a category to start",
            Style::default().fg(rgb(colors.muted)),
        ));
    }

    for (i, node) in path.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(rgb(colors.muted))));
        }
        // Crumb number is the key that jumps back to it
        if i < 10 {
            spans.push(Span::styled(
                format!("{}", i),
                Style::default().fg(rgb(colors.subtitle)),
            ));
        }
        spans.push(chip_span(&node.badge(true), app));
    }

    let confirm_style = if app.filter_picker.can_confirm() {
        Style::default()
            .fg(rgb(colors.success))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(rgb(colors.muted))
    };

    let crumbs = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Add Items ")
            .title_bottom(Line::from(Span::styled(" ✓ confirm ", confirm_style)).right_aligned())
            .border_style(Style::default().fg(rgb(colors.border))),
    );

    frame.render_widget(crumbs, area);
}

fn render_chip_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let colors = &app.current_theme.colors;
    let chips = app.visible_filter_chips();

    if chips.is_empty() {
        // Unavailable leaves have nothing under them either, so say which
        let message = match app.filter_picker.path().last() {
            Some(last) if !last.available => format!("{} is coming soon", last.name),
            Some(_) => "Press c to search these items".to_string(),
            None => "Nothing to pick".to_string(),
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(rgb(colors.muted)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(rgb(colors.border_focused))),
            );
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = chips
        .iter()
        .map(|node| {
            let mut spans = vec![chip_span(&node.badge(false), app)];
            if !node.children.is_empty() {
                spans.push(Span::styled(" ›", Style::default().fg(rgb(colors.muted))));
            } else if !node.available {
                spans.push(Span::styled(
                    " coming soon",
                    Style::default().fg(rgb(colors.muted)),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = match app.filter_picker.path().last() {
        Some(node) => format!(" {} ", node.name),
        None => " Categories ".to_string(),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(rgb(colors.border_focused))),
        )
        .highlight_style(Style::default().bg(rgb(colors.selected_bg)))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}
