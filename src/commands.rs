use std::borrow::Cow;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::responses::*;
use crate::content::PROMPT;
use crate::error::ConfigError;
use crate::transcript::{LineKind, Transcript, TranscriptLine};

/// Handled before the table lookup; never a table key.
pub const CLEAR_COMMAND: &str = "clear";

/// Command that switches the response styling to privacy mode.
pub const SHIELD_COMMAND: &str = "shield";

/// Palette of one-key shortcuts, injected exactly as if typed.
pub const QUICK_COMMANDS: [&str; 6] = ["help", "about", "zk", "solana", "x402", "shield"];

/// Source of the wall-clock time embedded in the `status` response.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// When the `status` command's "Last sync" time is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTimestamp {
    /// Read the clock every time `status` runs.
    Invocation,
    /// Read the clock once when the table is built.
    Session,
}

impl Default for StatusTimestamp {
    fn default() -> Self {
        StatusTimestamp::Invocation
    }
}

impl FromStr for StatusTimestamp {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "invocation" => Ok(StatusTimestamp::Invocation),
            "session" => Ok(StatusTimestamp::Session),
            _ => Err(ConfigError::InvalidValue {
                key: "status_timestamp".to_string(),
                value: s.to_string(),
                expected: "invocation or session",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Response {
    Static(&'static str),
    Status,
}

/// One entry of the command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    response: Response,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec { name: "help", description: "Display this help", response: Response::Static(HELP_TEXT) },
    CommandSpec { name: "about", description: "What is OrisysLabs?", response: Response::Static(ABOUT_TEXT) },
    CommandSpec { name: "manifesto", description: "Our vision and principles", response: Response::Static(MANIFESTO_TEXT) },
    CommandSpec { name: "zk", description: "Learn about Zero-Knowledge Proofs", response: Response::Static(ZK_TEXT) },
    CommandSpec { name: "solana", description: "Solana integration details", response: Response::Static(SOLANA_TEXT) },
    CommandSpec { name: "x402", description: "x402 Privacy Bridge protocol", response: Response::Static(X402_TEXT) },
    CommandSpec { name: "architecture", description: "System architecture overview", response: Response::Static(ARCHITECTURE_TEXT) },
    CommandSpec { name: "security", description: "Security philosophy", response: Response::Static(SECURITY_TEXT) },
    CommandSpec { name: "roadmap", description: "Development roadmap", response: Response::Static(ROADMAP_TEXT) },
    CommandSpec { name: "social", description: "Official channels", response: Response::Static(SOCIAL_TEXT) },
    CommandSpec { name: "version", description: "Version info", response: Response::Static(VERSION_TEXT) },
    CommandSpec { name: "status", description: "Network status", response: Response::Status },
    CommandSpec { name: "shield", description: "Enter shielded mode", response: Response::Static(SHIELD_TEXT) },
];

/// Renders the `status` block for a given sync time.
pub fn status_text(synced_at: DateTime<Local>) -> String {
    format!(
        "{}\n\nLast sync: {}",
        STATUS_BODY,
        synced_at.format("%-m/%-d/%Y, %-I:%M:%S %p")
    )
}

/// Read-only mapping from normalized command name to its response block.
pub struct CommandTable {
    stamp: StatusTimestamp,
    clock: Box<dyn Clock>,
    frozen_status: String,
}

impl CommandTable {
    pub fn new(stamp: StatusTimestamp) -> Self {
        Self::with_clock(stamp, Box::new(SystemClock))
    }

    pub fn with_clock(stamp: StatusTimestamp, clock: Box<dyn Clock>) -> Self {
        let frozen_status = status_text(clock.now());
        Self {
            stamp,
            clock,
            frozen_status,
        }
    }

    pub fn specs(&self) -> &'static [CommandSpec] {
        COMMANDS
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        COMMANDS.iter().map(|spec| spec.name)
    }

    pub fn contains(&self, key: &str) -> bool {
        COMMANDS.iter().any(|spec| spec.name == key)
    }

    /// Response text for an already-normalized key.
    pub fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        let spec = COMMANDS.iter().find(|spec| spec.name == key)?;
        Some(match spec.response {
            Response::Static(text) => Cow::Borrowed(text),
            Response::Status => match self.stamp {
                StatusTimestamp::Session => Cow::Borrowed(self.frozen_status.as_str()),
                StatusTimestamp::Invocation => Cow::Owned(status_text(self.clock.now())),
            },
        })
    }
}

/// Whitespace stripped from both ends of a submitted line, BOM included.
pub fn is_trim_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trim then lowercase: the lookup key for a submitted line.
pub fn normalize(raw: &str) -> String {
    raw.trim_matches(is_trim_char).to_lowercase()
}

pub fn not_found_message(normalized: &str) -> String {
    format!(
        "Command not found: '{}'\nType 'help' to see available commands.",
        normalized
    )
}

/// What a single submission did to the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Cleared,
    Ignored,
    Responded { command: String },
    NotFound { command: String },
}

/// Runs one submitted line against the table and appends the result.
///
/// The raw input is always echoed first. `clear` and blank input are
/// checked before the table is consulted.
pub fn execute(raw_input: &str, table: &CommandTable, transcript: &mut Transcript) -> Outcome {
    let normalized = normalize(raw_input);
    transcript.push(TranscriptLine::new(
        LineKind::Input,
        format!("{} {}", PROMPT, raw_input),
    ));

    if normalized == CLEAR_COMMAND {
        transcript.reset();
        return Outcome::Cleared;
    }

    if normalized.is_empty() {
        return Outcome::Ignored;
    }

    match table.lookup(&normalized) {
        Some(text) => {
            let kind = if normalized == SHIELD_COMMAND {
                LineKind::Privacy
            } else {
                LineKind::Success
            };
            transcript.push(TranscriptLine::new(kind, text.into_owned()));
            Outcome::Responded { command: normalized }
        }
        None => {
            debug!(command = %normalized, "no such command");
            transcript.push(TranscriptLine::new(
                LineKind::Error,
                not_found_message(&normalized),
            ));
            Outcome::NotFound { command: normalized }
        }
    }
}
