use crate::ui::{glyph, render_search_input, rgb};
use crate::App;
use ranko_core::layouts::LAYOUT_CATEGORIES;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render_layout_picker(frame: &mut Frame, app: &mut App, area: Rect) {
    let popular_height = if app.layout_picker.show_popular_row() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Search
            Constraint::Length(3),              // Category carousel
            Constraint::Length(popular_height), // Popular row, untouched sheet only
            Constraint::Min(3),                 // Layout cards
        ])
        .split(area);

    render_search_input(frame, app, chunks[0], " Search layouts (/ to type) ");
    render_category_carousel(frame, app, chunks[1]);
    if popular_height > 0 {
        render_popular_row(frame, app, chunks[2]);
    }
    render_layout_list(frame, app, chunks[3]);
}

fn render_category_carousel(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.current_theme.colors;
    let selected = app.layout_picker.selected_category();

    let mut spans = Vec::new();
    for (i, (category, icon)) in LAYOUT_CATEGORIES.iter().enumerate() {
        let style = if selected == Some(*category) {
            Style::default()
                .fg(rgb(colors.background))
                .bg(rgb(colors.accent))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(rgb(colors.foreground))
        };
        spans.push(Span::styled(
            format!(" {} {} {} ", i + 1, glyph(icon), category),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    let carousel = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Categories ")
            .border_style(Style::default().fg(rgb(colors.border))),
    );
    frame.render_widget(carousel, area);
}

fn render_popular_row(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.current_theme.colors;

    let mut spans = Vec::new();
    for layout in app.layout_picker.popular() {
        let style = if layout.disabled {
            Style::default().fg(rgb(colors.muted))
        } else {
            Style::default().fg(rgb(colors.foreground))
        };
        spans.push(Span::styled(format!(" {} ", layout.name), style));
        spans.push(Span::styled("·", Style::default().fg(rgb(colors.muted))));
    }
    spans.pop();

    let row = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} Popular Layouts ", glyph("flame.fill")))
            .border_style(Style::default().fg(rgb(colors.border))),
    );
    frame.render_widget(row, area);
}

fn render_layout_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let colors = &app.current_theme.colors;
    let rows = app.layout_rows();

    let done_style = if app.layout_picker.selected().is_some() {
        Style::default()
            .fg(rgb(colors.success))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(rgb(colors.muted))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Select Layout ")
        .title_bottom(Line::from(Span::styled(" c: Done ", done_style)).right_aligned())
        .border_style(Style::default().fg(rgb(colors.border_focused)));

    if rows.is_empty() {
        let empty = Paragraph::new("No layouts match")
            .style(Style::default().fg(rgb(colors.muted)))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .map(|layout| {
            let is_selected = app.layout_picker.is_selected(layout);
            let marker = if is_selected { "● " } else { "○ " };

            let name_style = if layout.disabled {
                Style::default().fg(rgb(colors.muted))
            } else if is_selected {
                Style::default()
                    .fg(rgb(colors.success))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(rgb(colors.title))
                    .add_modifier(Modifier::BOLD)
            };

            let mut first = vec![
                Span::styled(marker, name_style),
                Span::styled(layout.name.clone(), name_style),
            ];
            if layout.disabled {
                first.push(Span::styled(
                    "  Coming Soon",
                    Style::default().fg(rgb(colors.warning)),
                ));
            }

            ListItem::new(vec![
                Line::from(first),
                Line::from(Span::styled(
                    format!("    {}", layout.description),
                    Style::default().fg(rgb(colors.muted)),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(rgb(colors.selected_bg)));

    frame.render_stateful_widget(list, area, &mut app.list_state);
}
