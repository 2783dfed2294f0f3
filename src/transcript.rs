use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::{CLEAR_BANNER, WELCOME_BANNER};

/// Display class of a transcript row. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Input,
    Output,
    Error,
    Success,
    Info,
    Privacy,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Input => "input",
            LineKind::Output => "output",
            LineKind::Error => "error",
            LineKind::Success => "success",
            LineKind::Info => "info",
            LineKind::Privacy => "privacy",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
}

impl TranscriptLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Position in the transcript's append history, see [`Transcript::since`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// Ordered rows shown in the terminal view.
///
/// Rows are only ever appended, except for [`Transcript::reset`] which swaps
/// the whole history for the clear banner. When `max_lines` is exceeded the
/// oldest rows are dropped.
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
    dropped: usize,
    resets: u64,
    max_lines: usize,
}

impl Transcript {
    /// A new session transcript seeded with the welcome banner.
    pub fn new(max_lines: usize) -> Self {
        let mut transcript = Self {
            lines: Vec::new(),
            dropped: 0,
            resets: 0,
            max_lines: max_lines.max(CLEAR_BANNER.len()),
        };
        for (kind, text) in WELCOME_BANNER {
            transcript.push(TranscriptLine::new(*kind, *text));
        }
        transcript
    }

    pub fn push(&mut self, line: TranscriptLine) {
        self.lines.push(line);
        if self.lines.len() > self.max_lines {
            let excess = self.lines.len() - self.max_lines;
            self.lines.drain(..excess);
            self.dropped += excess;
        }
    }

    /// Replaces every row with the clear banner.
    pub fn reset(&mut self) {
        self.lines = CLEAR_BANNER
            .iter()
            .map(|(kind, text)| TranscriptLine::new(*kind, *text))
            .collect();
        self.dropped = 0;
        self.resets += 1;
    }

    /// Rows trimmed off the front since the last reset.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// How many times the transcript has been cleared.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptLine> {
        self.lines.last()
    }

    pub fn mark(&self) -> Mark {
        Mark(self.dropped + self.lines.len())
    }

    /// Rows appended after `mark` that are still retained. Empty after a
    /// reset, since the reset discards the history the mark points into.
    pub fn since(&self, mark: Mark) -> &[TranscriptLine] {
        let start = mark.0.saturating_sub(self.dropped).min(self.lines.len());
        &self.lines[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_starts_with_welcome_banner() {
        let transcript = Transcript::new(1000);
        assert_eq!(transcript.len(), WELCOME_BANNER.len());
        assert_eq!(transcript.len(), 12);
        assert_eq!(transcript.lines()[0].kind, LineKind::Privacy);
        assert!(transcript.last().unwrap().text.contains("Type 'shield' to go private."));
    }

    #[test]
    fn test_reset_leaves_two_line_banner() {
        let mut transcript = Transcript::new(1000);
        transcript.push(TranscriptLine::new(LineKind::Success, "x"));
        transcript.reset();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.lines()[0].text, "OrisysLabs Privacy Terminal v1.0");
        assert!(transcript.lines().iter().all(|l| l.kind == LineKind::Output));
    }

    #[test]
    fn test_max_lines_drops_oldest_rows() {
        let mut transcript = Transcript::new(14);
        for i in 0..5 {
            transcript.push(TranscriptLine::new(LineKind::Info, format!("row {}", i)));
        }
        assert_eq!(transcript.len(), 14);
        assert_eq!(transcript.last().unwrap().text, "row 4");
        assert_eq!(transcript.lines()[0].kind, LineKind::Success);
    }

    #[test]
    fn test_since_tracks_rows_across_trimming() {
        let mut transcript = Transcript::new(13);
        let mark = transcript.mark();
        transcript.push(TranscriptLine::new(LineKind::Input, "a"));
        transcript.push(TranscriptLine::new(LineKind::Success, "b"));
        let appended = transcript.since(mark);
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[0].text, "a");
        assert_eq!(appended[1].text, "b");
    }

    #[test]
    fn test_reset_and_trim_counters() {
        let mut transcript = Transcript::new(13);
        assert_eq!(transcript.dropped(), 0);
        transcript.push(TranscriptLine::new(LineKind::Input, "a"));
        transcript.push(TranscriptLine::new(LineKind::Input, "b"));
        assert_eq!(transcript.dropped(), 1);
        assert_eq!(transcript.resets(), 0);

        transcript.reset();
        assert_eq!(transcript.dropped(), 0);
        assert_eq!(transcript.resets(), 1);
    }

    #[test]
    fn test_since_is_empty_after_reset() {
        let mut transcript = Transcript::new(1000);
        let mark = transcript.mark();
        transcript.reset();
        assert!(transcript.since(mark).is_empty());
    }

    #[test]
    fn test_line_kind_serializes_lowercase() {
        let line = TranscriptLine::new(LineKind::Privacy, "shielded");
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"{"kind":"privacy","text":"shielded"}"#);
        assert_eq!(LineKind::Error.to_string(), "error");
    }
}
