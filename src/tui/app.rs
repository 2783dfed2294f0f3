use std::collections::VecDeque;
use std::time::Duration;

use chrono::Local;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use unicode_width::UnicodeWidthChar;

use crate::clipboard;
use crate::commands::{Outcome, QUICK_COMMANDS};
use crate::config::{TerminalConfig, Theme};
use crate::input::truncate_input;
use crate::session::Session;
use crate::transcript::{Mark, Transcript, TranscriptLine};

use super::types::{AppMessage, InputMode, ScreenRow, Viewport};

pub const HELP_STATUS: &str =
    "i=insert, 1-6=quick commands, y=copy CA, j/k=scroll, g/G=top/bottom, a=auto-scroll, q=quit";

pub struct App {
    // UI state
    pub input: String,
    pub input_mode: InputMode,
    pub status_message: String,
    pub current_time: String,
    pub scroll_offset: usize,
    pub auto_scroll_enabled: bool,
    pub viewport: Viewport,
    pub theme: Theme,
    pub show_quick_commands: bool,

    // Core components
    pub session: Session,
    rows: RowCache,
    max_input_chars: usize,

    // Contract address badge
    pub contract_address: String,
    has_contract_address: bool,
    pub copied: bool,
    copy_generation: u64,
    copy_indicator: Duration,

    // Message channel
    pub tx: mpsc::UnboundedSender<AppMessage>,
    pub rx: Option<mpsc::UnboundedReceiver<AppMessage>>,

    // Application state
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &TerminalConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Session::new(config);
        let viewport = Viewport::default();
        let rows = RowCache::build(session.transcript(), usize::from(viewport.width));

        let mut app = Self {
            input: String::new(),
            input_mode: InputMode::Normal,
            status_message: "Ready - Press '?' for help".to_string(),
            current_time: Local::now().format("%H:%M:%S").to_string(),
            scroll_offset: 0,
            auto_scroll_enabled: config.tui.auto_scroll,
            viewport,
            theme: config.terminal.theme,
            show_quick_commands: config.tui.show_quick_commands,
            session,
            rows,
            max_input_chars: config.terminal.max_input_chars,
            contract_address: config.brand.contract_address.clone(),
            has_contract_address: config.brand.has_contract_address(),
            copied: false,
            copy_generation: 0,
            copy_indicator: Duration::from_millis(config.tui.copy_indicator_ms),
            tx,
            rx: Some(rx),
            should_quit: false,
        };
        app.auto_scroll_to_bottom();
        app
    }

    pub fn update_time(&mut self) {
        self.current_time = Local::now().format("%H:%M:%S").to_string();
    }

    /// Records the transcript pane size from the last layout pass.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        let viewport = Viewport { width, height };
        if viewport != self.viewport {
            self.viewport = viewport;
            self.sync_rows();
            self.clamp_scroll();
            self.auto_scroll_to_bottom();
        }
    }

    /// The transcript laid out for the current pane width.
    pub fn screen_rows(&self) -> &VecDeque<ScreenRow> {
        &self.rows.rows
    }

    fn sync_rows(&mut self) {
        let width = usize::from(self.viewport.width.max(1));
        self.rows.sync(self.session.transcript(), width);
    }

    pub fn max_scroll(&self) -> usize {
        self.rows
            .rows
            .len()
            .saturating_sub(usize::from(self.viewport.height))
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    pub fn auto_scroll_to_bottom(&mut self) {
        if self.auto_scroll_enabled {
            self.scroll_offset = self.max_scroll();
        }
    }

    pub fn toggle_auto_scroll(&mut self) {
        self.auto_scroll_enabled = !self.auto_scroll_enabled;
        self.status_message = format!(
            "Auto-scroll: {}",
            if self.auto_scroll_enabled { "ON" } else { "OFF" }
        );
        self.auto_scroll_to_bottom();
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
        // Manual scrolling pins the view.
        self.auto_scroll_enabled = false;
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(rows).min(self.max_scroll());
        self.auto_scroll_enabled = false;
    }

    pub fn page_rows(&self) -> usize {
        usize::from(self.viewport.height.saturating_sub(1).max(1))
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.auto_scroll_enabled = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    /// Adds a typed character unless the input is already at its limit.
    pub fn push_char(&mut self, c: char) {
        if self.input.chars().count() < self.max_input_chars {
            self.input.push(c);
        } else {
            self.status_message = format!("Input limited to {} characters", self.max_input_chars);
        }
    }

    /// Sends the input line to the session and clears it.
    pub fn submit_input(&mut self) -> Outcome {
        let raw = std::mem::take(&mut self.input);
        self.run_command(&raw)
    }

    /// Runs the quick command at `index` as if it had been typed.
    pub fn run_quick_command(&mut self, index: usize) -> Option<Outcome> {
        let command = QUICK_COMMANDS.get(index)?;
        debug!(command, "quick command");
        Some(self.run_command(command))
    }

    fn run_command(&mut self, raw: &str) -> Outcome {
        let (line, truncated) = truncate_input(raw, self.max_input_chars);
        if truncated {
            warn!(limit = self.max_input_chars, "input truncated");
        }

        let outcome = self.session.submit(line);
        self.sync_rows();
        self.status_message = match &outcome {
            Outcome::Cleared => "Terminal cleared".to_string(),
            Outcome::NotFound { command } => format!("Unknown command: {}", command),
            Outcome::Ignored | Outcome::Responded { .. } => "Ready".to_string(),
        };

        if outcome == Outcome::Cleared {
            self.scroll_offset = 0;
        }
        self.clamp_scroll();
        self.auto_scroll_to_bottom();
        outcome
    }

    /// Copies the contract address and arms the indicator timer.
    pub fn copy_contract_address(&mut self) {
        if !self.has_contract_address {
            self.status_message = format!("Nothing to copy: contract address is {}", self.contract_address);
            return;
        }

        match clipboard::copy_to_clipboard(&self.contract_address) {
            Ok(()) => {
                let generation = self.mark_copied();
                let tx = self.tx.clone();
                let delay = self.copy_indicator;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(AppMessage::CopyIndicatorExpired(generation));
                });
            }
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                self.status_message = format!("Copy failed: {}", e);
            }
        }
    }

    /// Shows the copied badge. Returns the generation the timer must echo.
    pub fn mark_copied(&mut self) -> u64 {
        self.copy_generation += 1;
        self.copied = true;
        self.status_message = "Contract address copied".to_string();
        self.copy_generation
    }

    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            // A later copy re-arms the badge; its own timer clears it.
            AppMessage::CopyIndicatorExpired(generation) => {
                if generation == self.copy_generation {
                    self.copied = false;
                }
            }
        }
    }

    pub fn show_help(&mut self) {
        self.status_message = HELP_STATUS.to_string();
    }
}

/// Screen rows for the retained transcript, kept in step with it.
///
/// Appends and front trims are applied incrementally. A width change or a
/// reset rebuilds everything.
struct RowCache {
    rows: VecDeque<ScreenRow>,
    // Screen rows produced by each retained transcript line.
    per_line: VecDeque<usize>,
    width: usize,
    resets: u64,
    dropped: usize,
    mark: Mark,
}

impl RowCache {
    fn build(transcript: &Transcript, width: usize) -> Self {
        let mut cache = Self {
            rows: VecDeque::new(),
            per_line: VecDeque::new(),
            width,
            resets: transcript.resets(),
            dropped: transcript.dropped(),
            mark: transcript.mark(),
        };
        cache.append(transcript.lines());
        cache
    }

    fn sync(&mut self, transcript: &Transcript, width: usize) {
        let trimmed = transcript.dropped().saturating_sub(self.dropped);
        if width != self.width || transcript.resets() != self.resets || trimmed > self.per_line.len() {
            *self = Self::build(transcript, width);
            return;
        }

        for _ in 0..trimmed {
            if let Some(count) = self.per_line.pop_front() {
                self.rows.drain(..count);
            }
        }
        let mark = self.mark;
        self.append(transcript.since(mark));
        self.dropped = transcript.dropped();
        self.mark = transcript.mark();
    }

    fn append(&mut self, lines: &[TranscriptLine]) {
        for line in lines {
            let before = self.rows.len();
            push_line_rows(&mut self.rows, line, self.width);
            self.per_line.push_back(self.rows.len() - before);
        }
    }
}

fn push_line_rows(rows: &mut VecDeque<ScreenRow>, line: &TranscriptLine, width: usize) {
    for segment in line.text.split('\n') {
        if segment.is_empty() {
            rows.push_back(ScreenRow {
                kind: line.kind,
                text: String::new(),
            });
        } else if is_preformatted(segment) {
            // Art keeps its shape; whatever overflows the pane is cut.
            rows.push_back(ScreenRow {
                kind: line.kind,
                text: clip_to_width(segment, width),
            });
        } else {
            for wrapped in textwrap::wrap(segment, width) {
                rows.push_back(ScreenRow {
                    kind: line.kind,
                    text: wrapped.into_owned(),
                });
            }
        }
    }
}

/// Box drawing and block element glyphs mark banner art.
fn is_preformatted(segment: &str) -> bool {
    segment.chars().any(|c| ('\u{2500}'..='\u{259F}').contains(&c))
}

fn clip_to_width(segment: &str, width: usize) -> String {
    let mut used = 0;
    let mut clipped = String::new();
    for c in segment.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        clipped.push(c);
    }
    clipped
}
