use std::ops::ControlFlow;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use super::app::App;
use super::types::{AppMessage, InputMode};

/// Drains every pending message from the channel.
pub fn handle_app_messages(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppMessage>) {
    while let Ok(msg) = rx.try_recv() {
        app.handle_message(msg);
    }
}

/// Main keyboard event dispatcher
pub fn handle_keyboard_event(app: &mut App, key: KeyEvent) -> ControlFlow<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return ControlFlow::Break(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode_key(app, key),
        InputMode::Insert => handle_insert_mode_key(app, key),
    }
}

/// Handles keyboard events in normal mode
fn handle_normal_mode_key(app: &mut App, key: KeyEvent) -> ControlFlow<()> {
    match key.code {
        KeyCode::Char('q') => return ControlFlow::Break(()),
        KeyCode::Char('i') | KeyCode::Enter => {
            app.input_mode = InputMode::Insert;
            app.status_message = "INSERT MODE - Enter runs the command, Esc leaves".to_string();
        }
        KeyCode::Char(c @ '1'..='6') => {
            let index = usize::from(c as u8 - b'1');
            app.run_quick_command(index);
        }
        KeyCode::Char('y') => app.copy_contract_address(),
        KeyCode::Char('a') => app.toggle_auto_scroll(),
        KeyCode::Char('?') => app.show_help(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(1),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => {
            let rows = app.page_rows();
            app.scroll_up(rows);
        }
        KeyCode::PageDown => {
            let rows = app.page_rows();
            app.scroll_down(rows);
        }
        KeyCode::Char('g') | KeyCode::Home => app.scroll_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.scroll_to_bottom(),
        _ => {}
    }
    ControlFlow::Continue(())
}

/// Handles keyboard events in insert mode
fn handle_insert_mode_key(app: &mut App, key: KeyEvent) -> ControlFlow<()> {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.status_message = "Ready - Press '?' for help".to_string();
        }
        KeyCode::Enter => {
            app.submit_input();
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }
    ControlFlow::Continue(())
}
