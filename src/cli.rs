use std::io;

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use tracing::warn;

use crate::commands::{Outcome, CLEAR_COMMAND};
use crate::config::{TerminalConfig, Theme};
use crate::input::{self, LineEditor, ReadOutcome};
use crate::session::Session;
use crate::style;
use crate::transcript::TranscriptLine;

/// Runs the line-oriented terminal until Ctrl+C or Ctrl+D.
pub fn run_repl(config: &TerminalConfig) -> Result<()> {
    let theme = config.terminal.theme;
    let mut session = Session::new(config);
    print_lines(session.transcript().lines(), theme);

    let mut completions: Vec<String> = session.table().names().map(String::from).collect();
    completions.push(CLEAR_COMMAND.to_string());
    let mut editor = LineEditor::new(completions, theme);

    loop {
        let raw = match editor.read()? {
            ReadOutcome::Line(line) => line,
            ReadOutcome::Exit => break,
        };

        let (line, truncated) = input::truncate_input(&raw, config.terminal.max_input_chars);
        if truncated {
            warn!(
                limit = config.terminal.max_input_chars,
                received = raw.chars().count(),
                "input truncated"
            );
        }

        let mark = session.mark();
        match session.submit(line) {
            Outcome::Cleared => {
                clear_screen()?;
                print_lines(session.transcript().lines(), theme);
            }
            _ => {
                // The editor already shows what was typed; skip the echo row.
                let appended = session.since(mark);
                print_lines(appended.get(1..).unwrap_or_default(), theme);
            }
        }
    }

    println!("{}", style::muted("Session closed.", theme));
    Ok(())
}

/// Submits every input in order to a fresh session and prints the result.
pub fn run_inputs(config: &TerminalConfig, inputs: &[String], json: bool) -> Result<()> {
    let mut session = Session::new(config);
    for raw in inputs {
        let (line, truncated) = input::truncate_input(raw, config.terminal.max_input_chars);
        if truncated {
            warn!(limit = config.terminal.max_input_chars, "input truncated");
        }
        session.submit(line);
    }

    if json {
        let rendered = serde_json::to_string_pretty(session.transcript().lines())
            .context("Failed to serialize transcript")?;
        println!("{}", rendered);
    } else {
        print_lines(session.transcript().lines(), config.terminal.theme);
    }
    Ok(())
}

fn print_lines(lines: &[TranscriptLine], theme: Theme) {
    for line in lines {
        println!("{}", style::paint(line, theme));
    }
}

fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
        .context("Failed to clear the screen")?;
    Ok(())
}
