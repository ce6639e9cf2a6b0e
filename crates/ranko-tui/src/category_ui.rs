use crate::ui::{chip_span, glyph, render_search_input, rgb};
use crate::App;
use ranko_core::{category_badge, CategoryCatalog, Chip};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render_category_picker(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_search_input(frame, app, chunks[0], " Search categories (/ to type) ");
    render_groups(frame, app, chunks[1]);
}

fn render_groups(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.current_theme.colors;
    let groups = app.category_picker.visible(CategoryCatalog::builtin());

    let done_style = if app.category_picker.can_confirm() {
        Style::default()
            .fg(rgb(colors.success))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(rgb(colors.muted))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Select Category ")
        .title_bottom(Line::from(Span::styled(" c: Done ", done_style)).right_aligned())
        .border_style(Style::default().fg(rgb(colors.border_focused)));

    if groups.is_empty() {
        let empty = Paragraph::new(format!("No categories match '{}'", app.category_picker.search_text))
            .style(Style::default().fg(rgb(colors.muted)))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Headers take up rows too, so the highlighted row isn't just the cursor
    let mut items = Vec::new();
    let mut highlight = None;
    let mut chip_index = 0;

    for group in &groups {
        let header = category_badge(group.category);
        items.push(ListItem::new(Line::from(vec![Span::styled(
            format!("{} {}", glyph(&header.icon), header.label),
            Style::default()
                .fg(rgb(colors.subtitle))
                .add_modifier(Modifier::BOLD),
        )])));

        for chip in &group.chips {
            if chip_index == app.cursor {
                highlight = Some(items.len());
            }
            let selected = app.category_picker.is_selected(chip);
            let mut spans = vec![Span::raw("  "), chip_span(&chip.badge(selected), app)];
            if !chip.synonym.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", chip.synonym),
                    Style::default().fg(rgb(colors.muted)),
                ));
            }
            items.push(ListItem::new(Line::from(spans)));
            chip_index += 1;
        }
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(rgb(colors.selected_bg)))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(highlight);
    frame.render_stateful_widget(list, area, &mut state);
}
