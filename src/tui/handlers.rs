use crate::tui::app::{App, CurrentScreen};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: u16 = 10;

/// Returns `Some(true)` when the UI should close.
pub fn handle_key_events(event: Event, app: &mut App) -> Option<bool> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match app.current_screen {
            CurrentScreen::Main => handle_main_screen(key, app),
            CurrentScreen::Exiting => Some(true),
        },
        _ => Some(false),
    }
}

fn handle_main_screen(key: KeyEvent, app: &mut App) -> Option<bool> {
    if app.show_help {
        // Any key closes the overlay
        app.show_help = false;
        return None;
    }

    match key.code {
        KeyCode::Esc => return Some(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Some(true),
        KeyCode::F(1) => {
            app.show_help = true;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.delete_word();
        }
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => {
            app.delete_word();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.clear();
        }
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::PageDown => app.scroll_down(PAGE),
        KeyCode::End => {
            app.auto_scroll = true;
        }
        KeyCode::Enter => {
            app.submit();
            if let CurrentScreen::Exiting = app.current_screen {
                return Some(true);
            }
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            app.input.push(c);
        }
        _ => {}
    }
    None
}
