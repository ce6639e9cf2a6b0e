// UI rendering logic
use crate::{App, InputMode, Screen};
use ranko_core::{ChipBadge, ChipState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with screen tabs
            Constraint::Min(5),    // Active picker
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match app.screen {
        Screen::Filters => crate::filter_ui::render_filter_picker(frame, app, chunks[1]),
        Screen::Categories => crate::category_ui::render_category_picker(frame, app, chunks[1]),
        Screen::Layouts => crate::layout_ui::render_layout_picker(frame, app, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);

    if app.show_help {
        crate::help_ui::render_keybindings_help(frame, app, frame.area());
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.current_theme.colors;

    let mut spans = vec![Span::styled(
        " Ranko ",
        Style::default()
            .fg(rgb(colors.title))
            .add_modifier(Modifier::BOLD),
    )];

    for (i, screen) in Screen::all().iter().enumerate() {
        let label = format!(" {} {} ", i + 1, screen.title());
        let style = if *screen == app.screen {
            Style::default()
                .fg(rgb(colors.background))
                .bg(rgb(colors.accent))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(rgb(colors.muted))
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label, style));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(rgb(colors.border))),
        )
        .alignment(Alignment::Left);

    frame.render_widget(header, area);
}

/// Search box shared by the category and layout screens
pub(crate) fn render_search_input(frame: &mut Frame, app: &App, area: Rect, title: &str) {
    let colors = &app.current_theme.colors;
    let input_style = match app.input_mode {
        InputMode::Searching => Style::default().fg(rgb(colors.warning)),
        InputMode::Normal => Style::default().fg(rgb(colors.foreground)),
    };

    let input = Paragraph::new(app.search_text()).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(input_style),
    );

    frame.render_widget(input, area);

    // Show cursor when in search mode
    if app.input_mode == InputMode::Searching {
        frame.set_cursor_position(search_cursor(area, app.search_text()));
    }
}

/// Cursor just after the typed text, never past the right border
fn search_cursor(area: Rect, text: &str) -> (u16, u16) {
    let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let last_column = area.right().saturating_sub(2).max(area.x);
    let x = area.x.saturating_add(1).saturating_add(typed).min(last_column);
    (x, area.y.saturating_add(1))
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.current_theme.colors;

    let status = if let Some(message) = &app.status_message {
        Span::styled(message.clone(), Style::default().fg(rgb(colors.error)))
    } else {
        match (app.input_mode, app.screen) {
            (InputMode::Searching, _) => Span::styled(
                "SEARCH | type to filter | ENTER/ESC: done",
                Style::default().fg(rgb(colors.warning)),
            ),
            (InputMode::Normal, Screen::Filters) => Span::raw(
                "j/k: move | ENTER: open | h: up | 0-9: crumb | c: confirm | TAB: screen | ?: help | ESC: cancel",
            ),
            (InputMode::Normal, Screen::Categories) => Span::raw(
                "j/k: move | /: search | ENTER: pick | c: done | TAB: screen | ?: help | ESC: cancel",
            ),
            (InputMode::Normal, Screen::Layouts) => Span::raw(
                "j/k: move | /: search | 1-4: category | ENTER: pick | c: done | TAB: screen | ESC: cancel",
            ),
        }
    };

    frame.render_widget(Paragraph::new(Line::from(status)), area);
}

/// Convert our Color to ratatui Color
pub(crate) fn rgb(color: ranko_core::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Chip as a styled span: "[ ⚽ Footballers ]"
pub(crate) fn chip_span(badge: &ChipBadge, app: &App) -> Span<'static> {
    let colors = &app.current_theme.colors;
    let text = format!(" {} {} ", glyph(&badge.icon), badge.label);

    let style = match badge.state {
        ChipState::Selected => Style::default()
            .fg(rgb(colors.background))
            .bg(rgb(badge.color))
            .add_modifier(Modifier::BOLD),
        ChipState::Normal => Style::default().fg(rgb(badge.color)),
        ChipState::Disabled => Style::default()
            .fg(rgb(badge.color))
            .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
    };

    Span::styled(text, style)
}

/// Terminals don't have the app's symbol set, so map symbol families to
/// something printable
pub(crate) fn glyph(icon: &str) -> &'static str {
    let family = icon.split('.').next().unwrap_or(icon);
    match family {
        "music" | "hifispeaker" | "guitars" | "record" => "♪",
        "figure" | "sportscourt" | "trophy" | "oar" => "🏅",
        "soccerball" | "basketball" | "football" | "baseball" | "tennisball" => "⚽",
        "star" => "★",
        "globe" | "map" | "flag" => "🌍",
        "building" | "house" => "🏛",
        "person" | "suit" => "👤",
        "camera" | "movieclapper" | "film" | "tv" | "play" | "popcorn" => "🎬",
        "book" | "books" | "quote" => "📖",
        "gamecontroller" | "dice" | "headset" => "🎮",
        "fork" | "frying" | "takeoutbag" | "carrot" | "birthday" => "🍴",
        "cup" | "waterbottle" | "wineglass" | "mug" => "☕",
        "tree" | "leaf" | "beach" | "snowflake" | "drop" | "water" => "🌿",
        "dog" | "cat" | "bird" | "fish" | "hare" | "lizard" | "ladybug" | "pawprint" => "🐾",
        "steeringwheel" | "car" => "🚗",
        "flame" => "🔥",
        "circle" => "●",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_families() {
        assert_eq!(glyph("music.note"), "♪");
        assert_eq!(glyph("figure.archery"), "🏅");
        assert_eq!(glyph("circle.fill"), "●");
        assert_eq!(glyph("no.such.symbol"), "•");
        assert_eq!(glyph(""), "•");
    }

    #[test]
    fn test_search_cursor_follows_text() {
        let area = Rect::new(2, 5, 40, 3);
        assert_eq!(search_cursor(area, ""), (3, 6));
        assert_eq!(search_cursor(area, "dogs"), (7, 6));
    }

    #[test]
    fn test_search_cursor_clamped_for_long_queries() {
        let area = Rect::new(2, 5, 40, 3);
        assert_eq!(search_cursor(area, &"x".repeat(200)), (40, 6));

        let huge = "x".repeat(usize::from(u16::MAX) + 10);
        let wide = Rect::new(u16::MAX - 20, 0, 20, 3);
        assert_eq!(search_cursor(wide, &huge), (wide.right() - 2, 1));
    }

    #[test]
    fn test_rgb_conversion() {
        let blue = ranko_core::Color::rgb(0x007AFF);
        assert_eq!(rgb(blue), Color::Rgb(0x00, 0x7A, 0xFF));
    }
}
