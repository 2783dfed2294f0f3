use tracing::{debug, info};
use uuid::Uuid;

use crate::commands::{self, CommandTable, Outcome};
use crate::config::TerminalConfig;
use crate::transcript::{Mark, Transcript, TranscriptLine};

/// One terminal session: the transcript plus the table it is driven by.
pub struct Session {
    id: Uuid,
    table: CommandTable,
    transcript: Transcript,
    submissions: usize,
}

impl Session {
    pub fn new(config: &TerminalConfig) -> Self {
        let table = CommandTable::new(config.terminal.status_timestamp);
        Self::with_table(table, config.terminal.max_transcript_lines)
    }

    pub fn with_table(table: CommandTable, max_lines: usize) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "terminal session started");
        Self {
            id,
            table,
            transcript: Transcript::new(max_lines),
            submissions: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn submissions(&self) -> usize {
        self.submissions
    }

    pub fn mark(&self) -> Mark {
        self.transcript.mark()
    }

    pub fn since(&self, mark: Mark) -> &[TranscriptLine] {
        self.transcript.since(mark)
    }

    /// Submits one line of input, exactly as typed.
    pub fn submit(&mut self, raw_input: &str) -> Outcome {
        self.submissions += 1;
        let outcome = commands::execute(raw_input, &self.table, &mut self.transcript);
        debug!(
            session = %self.id,
            submission = self.submissions,
            outcome = ?outcome,
            lines = self.transcript.len(),
            "input handled"
        );
        outcome
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!(session = %self.id, submissions = self.submissions, "terminal session ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::StatusTimestamp;
    use crate::transcript::LineKind;

    #[test]
    fn test_session_starts_with_banner() {
        let session = Session::new(&TerminalConfig::default());
        assert_eq!(session.transcript().len(), 12);
        assert_eq!(session.submissions(), 0);
    }

    #[test]
    fn test_since_mark_returns_submission_rows() {
        let mut session = Session::with_table(CommandTable::new(StatusTimestamp::Session), 1000);
        let mark = session.mark();
        session.submit("x402");
        let rows = session.since(mark);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, LineKind::Input);
        assert_eq!(rows[1].kind, LineKind::Success);
        assert_eq!(session.submissions(), 1);
    }

    #[test]
    fn test_clear_keeps_session_usable() {
        let mut session = Session::with_table(CommandTable::new(StatusTimestamp::Session), 1000);
        assert_eq!(session.submit("clear"), Outcome::Cleared);
        assert_eq!(session.transcript().len(), 2);
        assert!(matches!(session.submit("roadmap"), Outcome::Responded { .. }));
        assert_eq!(session.transcript().len(), 4);
    }

    #[test]
    fn test_transcript_cap_from_config() {
        let mut config = TerminalConfig::default();
        config.terminal.max_transcript_lines = 20;
        let mut session = Session::new(&config);
        for _ in 0..30 {
            session.submit("version");
        }
        assert_eq!(session.transcript().len(), 20);
        assert_eq!(session.transcript().last().unwrap().kind, LineKind::Success);
    }
}
