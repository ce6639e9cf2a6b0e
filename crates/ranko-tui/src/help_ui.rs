use crate::ui::rgb;
use crate::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render keybindings help popup
pub fn render_keybindings_help(frame: &mut Frame, app: &App, area: Rect) {
    // Create centered popup (70% width, 80% height)
    let popup_area = centered_rect(70, 80, area);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let colors = &app.current_theme.colors;
    let bg_color = rgb(colors.background);
    let fg_color = rgb(colors.foreground);
    let title_color = rgb(colors.title);
    let accent_color = rgb(colors.accent);
    let muted_color = rgb(colors.muted);

    let keybindings = get_keybindings_content(title_color, accent_color, fg_color, muted_color);

    let help_text = Paragraph::new(keybindings)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keybindings Help ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(title_color))
                .style(Style::default().bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color))
        .alignment(Alignment::Left);

    frame.render_widget(help_text, popup_area);

    // Help text at the very bottom
    let help_area = Rect {
        x: popup_area.x + 1,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width.saturating_sub(2),
        height: 1,
    };

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(muted_color)),
        Span::styled(
            "? ",
            Style::default()
                .fg(accent_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("or ", Style::default().fg(muted_color)),
        Span::styled(
            "ESC ",
            Style::default()
                .fg(accent_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("to close", Style::default().fg(muted_color)),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().bg(bg_color));

    frame.render_widget(footer, help_area);
}

/// Get all keybindings content as styled lines
fn get_keybindings_content(
    primary: Color,
    accent: Color,
    fg: Color,
    muted: Color,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Helper to create a section header
    let section = |title: &str| -> Line<'static> {
        Line::from(vec![Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::Black)
                .bg(primary)
                .add_modifier(Modifier::BOLD),
        )])
    };

    // Helper to create a keybinding line
    let key = |k: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:12}", k),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc.to_string(), Style::default().fg(fg)),
        ])
    };

    lines.push(section("Global"));
    lines.push(Line::from(""));
    lines.push(key("?", "Toggle this help"));
    lines.push(key("TAB", "Next picker (Add Items > Category > Layout)"));
    lines.push(key("F1-F3", "Jump to a picker"));
    lines.push(key("j / Down", "Move down"));
    lines.push(key("k / Up", "Move up"));
    lines.push(key("ESC / q", "Dismiss without picking"));
    lines.push(Line::from(""));

    lines.push(section("Add Items"));
    lines.push(Line::from(""));
    lines.push(key("ENTER / l", "Open the chip under the cursor"));
    lines.push(key("h / Bksp", "Up one level (last crumb)"));
    lines.push(key("0-9", "Jump to that crumb, 0 goes back to the top"));
    lines.push(key("c", "Confirm, once the leaf is available"));
    lines.push(Line::from(""));

    lines.push(section("Category"));
    lines.push(Line::from(""));
    lines.push(key("/", "Search by name, category or synonym"));
    lines.push(key("ENTER", "Pick the chip under the cursor"));
    lines.push(key("c", "Done"));
    lines.push(Line::from(""));

    lines.push(section("Layout"));
    lines.push(Line::from(""));
    lines.push(key("/", "Search by layout name"));
    lines.push(key("1-4", "Toggle a category"));
    lines.push(key("ENTER", "Pick / unpick the layout under the cursor"));
    lines.push(key("c", "Done"));
    lines.push(Line::from(""));

    lines.push(section("Search Box"));
    lines.push(Line::from(""));
    lines.push(key("ENTER / ESC", "Back to the list"));
    lines.push(key("Backspace", "Delete character"));
    lines.push(Line::from(""));

    // Footer note
    lines.push(Line::from(vec![Span::styled(
        "  Tip: gray chips are coming soon and can't be picked",
        Style::default().fg(muted).add_modifier(Modifier::ITALIC),
    )]));
    lines.push(Line::from(""));

    lines
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(70, 80, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 70);
    }
}
