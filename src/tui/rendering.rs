use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use crate::config::TerminalConfig;

use super::app::App;
use super::events;
use super::types::AppMessage;
use super::widgets;

pub async fn run_tui(config: &TerminalConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    info!(session = %app.session.id(), "tui started");

    // Extract the receiver from the app
    let res = match app.rx.take() {
        Some(mut rx) => run_app(&mut terminal, &mut app, &mut rx).await,
        None => Err(anyhow::anyhow!("TUI message channel already taken")),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        if app.should_quit {
            return Ok(());
        }

        app.update_time();
        terminal.draw(|f| ui(f, app))?;

        events::handle_app_messages(app, rx);

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if events::handle_keyboard_event(app, key).is_break() {
                    app.should_quit = true;
                }
            }
        }
    }
}

/// Splits the screen into header, transcript, palette, input and status rows.
pub fn layout(area: Rect, show_quick_commands: bool) -> [Rect; 5] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Transcript
            Constraint::Length(u16::from(show_quick_commands)),
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
}

pub(super) fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    if widgets::is_too_small(area.width, area.height) {
        f.render_widget(widgets::create_small_terminal_warning(), area);
        return;
    }

    let [header, transcript, palette, input, status] = layout(area, app.show_quick_commands);
    // Borders take one cell on each side.
    app.set_viewport(
        transcript.width.saturating_sub(2),
        transcript.height.saturating_sub(2),
    );

    let app = &*app;
    f.render_widget(widgets::create_header(app), header);
    f.render_widget(widgets::create_transcript_view(app), transcript);
    if app.show_quick_commands {
        f.render_widget(widgets::create_quick_commands(app), palette);
    }
    f.render_widget(widgets::create_input_area(app), input);
    f.render_widget(widgets::create_status_bar(app), status);
}
