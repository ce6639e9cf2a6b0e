// TUI event loop and terminal management
use crate::app::{Outcome, Screen};
use crate::{App, InputMode};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ranko_core::SelectionHandler;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Run the pickers until something is confirmed or the user bails.
///
/// `on_confirm` gets the filter selection before the picker closes; if it
/// fails the picker stays up with the error in the status bar.
pub fn run_tui<H>(mut app: App, on_confirm: &mut H, mouse_enabled: bool) -> anyhow::Result<Option<Outcome>>
where
    H: SelectionHandler + ?Sized,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, on_confirm);

    // Restore terminal even if the loop blew up
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    result?;
    Ok(app.outcome)
}

fn event_loop<H>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    on_confirm: &mut H,
) -> anyhow::Result<()>
where
    H: SelectionHandler + ?Sized,
{
    while !app.should_quit {
        terminal.draw(|f| crate::ui::render(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key, on_confirm),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => app.next_row(),
                MouseEventKind::ScrollUp => app.previous_row(),
                _ => {}
            },
            _ => {}
        }
    }

    Ok(())
}

fn handle_key<H>(app: &mut App, key: KeyEvent, on_confirm: &mut H)
where
    H: SelectionHandler + ?Sized,
{
    // Help popup swallows everything until it's closed
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.toggle_help();
        }
        return;
    }

    if app.input_mode == InputMode::Searching {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => app.enter_normal_mode(),
            KeyCode::Char(c) => app.push_search_char(c),
            KeyCode::Backspace => app.pop_search_char(),
            _ => {}
        }
        return;
    }

    // Any keypress clears the last nag
    app.clear_status();

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.cancel(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Tab => app.next_screen(),
        KeyCode::F(1) => app.switch_to(Screen::Filters),
        KeyCode::F(2) => app.switch_to(Screen::Categories),
        KeyCode::F(3) => app.switch_to(Screen::Layouts),
        KeyCode::Down | KeyCode::Char('j') => app.next_row(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_row(),
        code => match app.screen {
            Screen::Filters => match code {
                KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.select_filter_under_cursor(),
                KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => app.go_up(),
                KeyCode::Char(c @ '0'..='9') => {
                    if let Some(index) = c.to_digit(10) {
                        app.back_to_crumb(index as usize);
                    }
                }
                KeyCode::Char('c') => app.confirm_filter(on_confirm),
                _ => {}
            },
            Screen::Categories => match code {
                KeyCode::Char('/') => app.enter_search_mode(),
                KeyCode::Enter | KeyCode::Char(' ') => app.select_category_under_cursor(),
                KeyCode::Char('c') => app.confirm_category(),
                _ => {}
            },
            Screen::Layouts => match code {
                KeyCode::Char('/') => app.enter_search_mode(),
                KeyCode::Char(c @ '1'..='4') => {
                    if let Some(index) = c.to_digit(10) {
                        app.toggle_layout_category(index as usize - 1);
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => app.toggle_layout_under_cursor(),
                KeyCode::Char('c') => app.confirm_layout(),
                _ => {}
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ranko_core::Selection;

    fn press(app: &mut App, code: KeyCode) {
        let mut handler = |_: &Selection| -> ranko_core::Result<()> { Ok(()) };
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), &mut handler);
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_keys_drive_brands_to_confirm() {
        let mut app = App::default();
        let brands = app
            .visible_filter_chips()
            .iter()
            .position(|n| n.name == "Brands")
            .unwrap();
        for _ in 0..brands {
            press(&mut app, KeyCode::Char('j'));
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('c'));

        assert!(app.should_quit);
        assert!(matches!(app.outcome, Some(Outcome::Filter(_))));
    }

    #[test]
    fn test_digit_jumps_to_crumb() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.filter_picker.path().len(), 2);

        press(&mut app, KeyCode::Char('0'));
        assert!(app.filter_picker.path().is_empty());
    }

    #[test]
    fn test_search_mode_captures_q() {
        let mut app = App::default();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "quiz");
        assert!(!app.should_quit);
        assert_eq!(app.category_picker.search_text, "quiz");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_layout_category_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::F(3));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.layout_picker.selected_category(), Some("Sports"));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.layout_picker.selected_category(), None);
    }
}
