use std::borrow::Cow;

use anyhow::Result;
use reedline::{
    default_emacs_keybindings, ColumnarMenu, DefaultCompleter, Emacs, KeyCode, KeyModifiers,
    MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline,
    ReedlineEvent, ReedlineMenu, Signal,
};

use crate::commands::is_trim_char;
use crate::config::Theme;
use crate::content::PROMPT;
use crate::style;

const COMPLETION_MENU: &str = "completion_menu";

/// Renders `orisys@terminal:~$ ` in front of the cursor.
pub struct OrisysPrompt {
    theme: Theme,
}

impl OrisysPrompt {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Prompt for OrisysPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        style::accent(PROMPT, self.theme).to_string().into()
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        " ".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "> ".into()
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}

pub enum ReadOutcome {
    Line(String),
    Exit,
}

/// Line editor for the REPL with Tab completion over command names.
pub struct LineEditor {
    editor: Reedline,
    prompt: OrisysPrompt,
}

impl LineEditor {
    pub fn new(command_names: Vec<String>, theme: Theme) -> Self {
        let completer = Box::new(DefaultCompleter::new_with_wordlen(command_names, 1));
        let menu = Box::new(ColumnarMenu::default().with_name(COMPLETION_MENU));

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );
        keybindings.add_binding(
            KeyModifiers::CONTROL,
            KeyCode::Char('l'),
            ReedlineEvent::ClearScreen,
        );

        let editor = Reedline::create()
            .with_completer(completer)
            .with_menu(ReedlineMenu::EngineCompleter(menu))
            .with_edit_mode(Box::new(Emacs::new(keybindings)));

        Self {
            editor,
            prompt: OrisysPrompt::new(theme),
        }
    }

    /// Blocks until a line is submitted or the user asks to leave.
    pub fn read(&mut self) -> Result<ReadOutcome> {
        match self.editor.read_line(&self.prompt) {
            Ok(Signal::Success(buffer)) => Ok(ReadOutcome::Line(buffer)),
            Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => Ok(ReadOutcome::Exit),
            Err(e) => Err(anyhow::anyhow!("Error reading input: {}", e)),
        }
    }
}

/// Cuts `line` to at most `max_chars` characters. The flag reports a cut.
///
/// Lines within the limit pass through untouched. Longer lines are trimmed
/// before the cut so surrounding whitespace never pushes a command out.
pub fn truncate_input(line: &str, max_chars: usize) -> (&str, bool) {
    if line.char_indices().nth(max_chars).is_none() {
        return (line, false);
    }

    let trimmed = line.trim_matches(is_trim_char);
    match trimmed.char_indices().nth(max_chars) {
        Some((idx, _)) => (&trimmed[..idx], true),
        None => (trimmed, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_input_respects_char_boundaries() {
        assert_eq!(truncate_input("help", 10), ("help", false));
        assert_eq!(truncate_input("help", 4), ("help", false));
        assert_eq!(truncate_input("shield", 3), ("shi", true));
        assert_eq!(truncate_input("▸▸▸▸", 2), ("▸▸", true));
        assert_eq!(truncate_input("", 0), ("", false));
    }

    #[test]
    fn test_truncate_input_trims_before_cutting() {
        let padded = format!("{}help  ", " ".repeat(20));
        assert_eq!(truncate_input(&padded, 8), ("help", true));
        assert_eq!(truncate_input("\u{feff}   shield", 6), ("shield", true));
        // Within the limit the echo keeps its whitespace.
        assert_eq!(truncate_input("  zk  ", 8), ("  zk  ", false));
    }

    #[test]
    fn test_prompt_renders_brand_prompt() {
        let prompt = OrisysPrompt::new(Theme::Plain);
        assert_eq!(prompt.render_prompt_left(), PROMPT);
        assert_eq!(prompt.render_prompt_indicator(PromptEditMode::Default), " ");
    }
}
