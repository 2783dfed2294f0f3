use colored::*;
use ratatui::style::{Color as TuiColor, Modifier, Style};

use crate::config::Theme;
use crate::transcript::{LineKind, TranscriptLine};

const ACCENT: (u8, u8, u8) = (0x00, 0xff, 0xcc);
const ACCENT_DIM: (u8, u8, u8) = (0x00, 0x80, 0x66);
const ERROR: (u8, u8, u8) = (0xff, 0x5f, 0x56);
const SUCCESS: (u8, u8, u8) = (0x39, 0xff, 0x14);
const TEXT: (u8, u8, u8) = (0xe0, 0xe0, 0xe0);
pub const MUTED: (u8, u8, u8) = (0x4a, 0x4a, 0x4a);

/// RGB triple used for a row of the given kind.
pub fn kind_rgb(kind: LineKind) -> (u8, u8, u8) {
    match kind {
        LineKind::Input => ACCENT,
        LineKind::Error => ERROR,
        LineKind::Success => SUCCESS,
        LineKind::Privacy => ACCENT_DIM,
        LineKind::Output | LineKind::Info => TEXT,
    }
}

/// Colors a transcript row for line-oriented output.
pub fn paint(line: &TranscriptLine, theme: Theme) -> ColoredString {
    match theme {
        Theme::Plain => line.text.normal(),
        Theme::Neon => {
            let (r, g, b) = kind_rgb(line.kind);
            line.text.truecolor(r, g, b)
        }
    }
}

pub fn accent(text: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Plain => text.normal(),
        Theme::Neon => text.truecolor(ACCENT.0, ACCENT.1, ACCENT.2).bold(),
    }
}

pub fn muted(text: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Plain => text.normal(),
        Theme::Neon => text.truecolor(MUTED.0, MUTED.1, MUTED.2),
    }
}

pub fn tui_color(rgb: (u8, u8, u8), theme: Theme) -> TuiColor {
    match theme {
        Theme::Plain => TuiColor::Reset,
        Theme::Neon => TuiColor::Rgb(rgb.0, rgb.1, rgb.2),
    }
}

/// ratatui style for a row of the given kind.
pub fn tui_style(kind: LineKind, theme: Theme) -> Style {
    let style = Style::default().fg(tui_color(kind_rgb(kind), theme));
    match kind {
        LineKind::Error if theme == Theme::Plain => style.add_modifier(Modifier::BOLD),
        LineKind::Privacy if theme == Theme::Plain => style.add_modifier(Modifier::DIM),
        _ => style,
    }
}

pub fn tui_accent(theme: Theme) -> Style {
    Style::default()
        .fg(tui_color(ACCENT, theme))
        .add_modifier(Modifier::BOLD)
}

pub fn tui_muted(theme: Theme) -> Style {
    match theme {
        Theme::Plain => Style::default().add_modifier(Modifier::DIM),
        Theme::Neon => Style::default().fg(tui_color(MUTED, theme)),
    }
}
