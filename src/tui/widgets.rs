use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::commands::QUICK_COMMANDS;
use crate::content::{PROMPT, TAGLINE};
use crate::style;
use crate::transcript::LineKind;

use super::app::App;
use super::types::InputMode;

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

pub fn is_too_small(width: u16, height: u16) -> bool {
    width < MIN_WIDTH || height < MIN_HEIGHT
}

pub fn create_header(app: &App) -> Paragraph<'_> {
    let theme = app.theme;

    let mut badge = vec![
        Span::styled("CA: ", style::tui_muted(theme)),
        Span::styled(app.contract_address.as_str(), style::tui_accent(theme)),
    ];
    if app.copied {
        badge.push(Span::styled(
            " ✓ copied",
            style::tui_style(LineKind::Success, theme),
        ));
    }

    let mut spans = vec![
        Span::styled("Orisys", style::tui_style(LineKind::Output, theme)),
        Span::styled("Terminal", style::tui_accent(theme)),
        Span::raw(" | "),
        Span::styled(TAGLINE, style::tui_muted(theme)),
        Span::raw(" | "),
        Span::styled(app.current_time.as_str(), style::tui_muted(theme)),
        Span::raw(" | "),
    ];
    spans.extend(badge);

    Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style::tui_muted(theme))
                .title(" OrisysLabs Privacy Terminal ")
                .title_alignment(Alignment::Center),
        )
        .alignment(Alignment::Center)
}

pub fn create_transcript_view(app: &App) -> Paragraph<'_> {
    let theme = app.theme;
    let height = usize::from(app.viewport.height);
    // Only the visible window is handed to ratatui; its own scroll is u16.
    let lines: Vec<Line> = app
        .screen_rows()
        .iter()
        .skip(app.scroll_offset)
        .take(height)
        .map(|row| Line::from(Span::styled(row.text.as_str(), style::tui_style(row.kind, theme))))
        .collect();

    let mode = if app.auto_scroll_enabled { "" } else { " [scroll locked]" };
    let title = format!(" orisys@terminal ~ {}{} ", TAGLINE, mode);

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(style::tui_accent(theme).remove_modifier(Modifier::BOLD)),
        )
}

pub fn create_quick_commands(app: &App) -> Paragraph<'_> {
    let theme = app.theme;
    let mut spans = Vec::new();
    for (i, command) in QUICK_COMMANDS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("[{}]", i + 1), style::tui_accent(theme)));
        spans.push(Span::styled(format!(" {}", command), style::tui_muted(theme)));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

pub fn create_input_area(app: &App) -> Paragraph<'_> {
    let theme = app.theme;
    let (mode_indicator, border_style) = match app.input_mode {
        InputMode::Normal => ("[N]", style::tui_muted(theme)),
        InputMode::Insert => ("[I]", style::tui_accent(theme)),
    };

    let mut spans = vec![
        Span::styled(mode_indicator, border_style.add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(PROMPT, style::tui_accent(theme)),
        Span::raw(" "),
        Span::styled(
            visible_tail(&app.input, usize::from(app.viewport.width).saturating_sub(PROMPT.len() + 6)),
            style::tui_style(LineKind::Output, theme),
        ),
    ];
    if app.input_mode == InputMode::Insert {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Input ")
            .border_style(border_style),
    )
}

/// Keeps the end of `input` that fits in `width` columns.
pub fn visible_tail(input: &str, width: usize) -> &str {
    let count = input.chars().count();
    if count <= width {
        return input;
    }
    match input.char_indices().nth(count - width) {
        Some((idx, _)) => &input[idx..],
        None => input,
    }
}

pub fn create_status_bar(app: &App) -> Paragraph<'_> {
    let theme = app.theme;
    let shortcuts = match app.input_mode {
        InputMode::Normal => "q:quit i:insert 1-6:quick y:copy kj:scroll a:auto-scroll ?:help",
        InputMode::Insert => "Esc:normal Enter:run",
    };

    let auto_scroll_indicator = if app.auto_scroll_enabled {
        Span::styled("AUTO", style::tui_accent(theme))
    } else {
        Span::styled("MANUAL", style::tui_style(LineKind::Error, theme))
    };

    let status = Line::from(vec![
        Span::styled(
            format!("{} lines", app.session.transcript().len()),
            style::tui_accent(theme),
        ),
        Span::raw(" | "),
        auto_scroll_indicator,
        Span::raw(" | "),
        Span::raw(app.status_message.as_str()),
        Span::raw(" | "),
        Span::styled(shortcuts, style::tui_muted(theme)),
    ]);

    Paragraph::new(status)
}

pub fn create_small_terminal_warning() -> Paragraph<'static> {
    let warning_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small for the Orisys TUI",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Minimum size required: {}x{}", MIN_WIDTH, MIN_HEIGHT)),
        Line::from("Please resize your terminal or use `orisys repl`"),
        Line::from(""),
    ];

    Paragraph::new(warning_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Orisys - Terminal Size Warning "),
        )
}
