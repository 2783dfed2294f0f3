use std::path::Path;

use anyhow::{Context, Result};
use termimad::{rgb, MadSkin};

use crate::commands::{CommandSpec, CLEAR_COMMAND};
use crate::config::{TerminalConfig, Theme};
use crate::content::docs::{self, DocSection};
use crate::content::whitepaper;
use crate::style;

const NAME_COLUMN: usize = 14;
const MAX_TEXT_WIDTH: usize = 80;

/// `name  description` rows for the table followed by `clear`.
pub fn command_list(specs: &[CommandSpec]) -> Vec<(&'static str, &'static str)> {
    let mut rows: Vec<_> = specs.iter().map(|spec| (spec.name, spec.description)).collect();
    rows.push((CLEAR_COMMAND, "Clear terminal"));
    rows
}

pub fn print_command_list(specs: &[CommandSpec], theme: Theme) {
    for (name, description) in command_list(specs) {
        println!(
            "  {}{}",
            style::accent(&format!("{:<width$}", name, width = NAME_COLUMN), theme),
            description
        );
    }
}

pub fn print_docs_index(theme: Theme) {
    println!("{}", style::accent("OrisysLabs Documentation", theme));
    println!();
    for section in docs::SECTIONS {
        println!(
            "  {}{}",
            style::accent(&format!("{:<width$}", section.id, width = NAME_COLUMN), theme),
            section.title
        );
    }
    println!();
    println!("{}", style::muted("Run `orisys docs <section>` to read one.", theme));
}

fn markdown_skin(theme: Theme) -> MadSkin {
    match theme {
        Theme::Plain => MadSkin::no_style(),
        Theme::Neon => {
            let mut skin = MadSkin::default();
            skin.set_headers_fg(rgb(0x00, 0xff, 0xcc));
            skin.bold.set_fg(rgb(0xe0, 0xe0, 0xe0));
            skin.inline_code.set_fg(rgb(0x39, 0xff, 0x14));
            skin.code_block.set_fg(rgb(0x39, 0xff, 0x14));
            skin
        }
    }
}

/// Renders one documentation section as terminal markdown.
pub fn render_docs_section(section: &DocSection, theme: Theme) -> String {
    let skin = markdown_skin(theme);
    skin.term_text(&section.to_markdown()).to_string()
}

pub fn print_docs_section(id: &str, theme: Theme) -> Result<()> {
    let section = docs::find_section(id)?;
    print!("{}", render_docs_section(section, theme));
    Ok(())
}

/// Whitepaper overview laid out for `width` columns.
pub fn render_whitepaper(width: usize) -> Vec<String> {
    let width = width.min(MAX_TEXT_WIDTH);
    let mut lines = vec![whitepaper::TITLE.to_string()];
    lines.extend(textwrap::wrap(whitepaper::SUBTITLE, width.max(20)).into_iter().map(|l| l.into_owned()));
    lines.push(String::new());

    let info: Vec<String> = whitepaper::DOCUMENT_INFO
        .iter()
        .map(|(value, label)| format!("{} {}", value, label))
        .collect();
    lines.push(info.join("  |  "));
    lines.push(String::new());

    lines.push("Table of Contents".to_string());
    lines.extend(
        whitepaper::TABLE_OF_CONTENTS
            .iter()
            .map(|entry| whitepaper::format_toc_row(entry, width)),
    );
    lines.push(String::new());

    lines.push("Abstract".to_string());
    lines.extend(whitepaper::wrapped_abstract(width));
    lines
}

pub fn print_whitepaper(theme: Theme) {
    let width = crossterm::terminal::size()
        .map(|(cols, _)| usize::from(cols))
        .unwrap_or(MAX_TEXT_WIDTH);

    let headings = [whitepaper::TITLE, "Table of Contents", "Abstract"];
    for line in render_whitepaper(width) {
        if headings.contains(&line.as_str()) {
            println!("{}", style::accent(&line, theme));
        } else {
            println!("{}", line);
        }
    }
}

pub fn print_config(config: &TerminalConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to serialize config")?;
    print!("{}", rendered);
    Ok(())
}

pub fn print_config_path(path: &Path) {
    println!("{}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommandTable, StatusTimestamp};

    #[test]
    fn test_command_list_ends_with_clear() {
        let table = CommandTable::new(StatusTimestamp::Invocation);
        let rows = command_list(table.specs());
        assert_eq!(rows.len(), table.specs().len() + 1);
        assert_eq!(rows[0].0, "help");
        assert_eq!(rows.last().unwrap(), &("clear", "Clear terminal"));
    }

    #[test]
    fn test_render_docs_section_plain() {
        let section = docs::find_section("developer-sdk").unwrap();
        let rendered = render_docs_section(section, Theme::Plain);
        assert!(rendered.contains(section.title));
        assert!(!rendered.contains("\u{1b}["));
    }

    #[test]
    fn test_render_whitepaper_layout() {
        let lines = render_whitepaper(60);
        assert_eq!(lines[0], whitepaper::TITLE);
        assert!(lines.iter().any(|l| l == "v1.0 VERSION  |  70+ PAGES  |  ZK PROOF_SYSTEM"));

        let toc: Vec<_> = lines.iter().filter(|l| l.starts_with('[')).collect();
        assert_eq!(toc.len(), whitepaper::TABLE_OF_CONTENTS.len());
        assert!(toc[10].starts_with("[A] Appendix"));
        assert!(toc[10].ends_with("p.70"));
        assert!(lines.iter().all(|l| l.chars().count() <= 60));
    }

    #[test]
    fn test_render_whitepaper_caps_width() {
        let lines = render_whitepaper(200);
        let first_row = lines.iter().find(|l| l.starts_with('[')).unwrap();
        assert_eq!(unicode_width::UnicodeWidthStr::width(first_row.as_str()), MAX_TEXT_WIDTH);
    }
}
