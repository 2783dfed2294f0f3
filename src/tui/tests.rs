#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use unicode_width::UnicodeWidthStr;

    use crate::commands::Outcome;
    use crate::config::TerminalConfig;
    use crate::content::{CLEAR_BANNER, WELCOME_BANNER};
    use crate::transcript::LineKind;
    use crate::tui::app::App;
    use crate::tui::events::handle_keyboard_event;
    use crate::tui::rendering;
    use crate::tui::types::{AppMessage, InputMode};
    use crate::tui::widgets::{is_too_small, visible_tail};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            let _ = handle_keyboard_event(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_app_creation() {
        let app = App::new(&TerminalConfig::default());
        assert_eq!(app.input, "");
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session.transcript().len(), WELCOME_BANNER.len());
        assert!(app.auto_scroll_enabled);
        assert!(!app.copied);
        assert!(app.rx.is_some());
    }

    #[test]
    fn test_quick_command_runs_as_typed() {
        let mut app = App::new(&TerminalConfig::default());
        let outcome = app.run_quick_command(0);
        assert!(matches!(outcome, Some(Outcome::Responded { .. })));

        let lines = app.session.transcript().lines();
        assert_eq!(lines[lines.len() - 2].text, "orisys@terminal:~$ help");
        assert_eq!(lines[lines.len() - 1].kind, LineKind::Success);

        assert!(app.run_quick_command(6).is_none());
    }

    #[test]
    fn test_number_keys_map_to_palette() {
        let mut app = App::new(&TerminalConfig::default());
        let _ = handle_keyboard_event(&mut app, key(KeyCode::Char('6')));
        let last = app.session.transcript().last().unwrap();
        assert_eq!(last.kind, LineKind::Privacy);
    }

    #[test]
    fn test_insert_mode_submit() {
        let mut app = App::new(&TerminalConfig::default());
        let _ = handle_keyboard_event(&mut app, key(KeyCode::Char('i')));
        assert_eq!(app.input_mode, InputMode::Insert);

        // 'q' is text while inserting
        type_line(&mut app, "  ZQ");
        let _ = handle_keyboard_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.input, "  Z");
        type_line(&mut app, "k");
        let _ = handle_keyboard_event(&mut app, key(KeyCode::Enter));

        assert_eq!(app.input, "");
        assert_eq!(app.input_mode, InputMode::Insert);
        let last = app.session.transcript().last().unwrap();
        assert_eq!(last.kind, LineKind::Success);

        let _ = handle_keyboard_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_unknown_command_reports_in_status() {
        let mut app = App::new(&TerminalConfig::default());
        app.input = "sudo".to_string();
        app.submit_input();
        assert_eq!(app.session.transcript().last().unwrap().kind, LineKind::Error);
        assert!(app.status_message.contains("sudo"));
    }

    #[test]
    fn test_input_limit() {
        let mut config = TerminalConfig::default();
        config.terminal.max_input_chars = 3;
        let mut app = App::new(&config);
        app.input_mode = InputMode::Insert;
        type_line(&mut app, "helpme");
        assert_eq!(app.input, "hel");
        assert!(app.status_message.contains("3"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&TerminalConfig::default());
        assert_eq!(
            handle_keyboard_event(&mut app, key(KeyCode::Char('q'))),
            ControlFlow::Break(())
        );

        app.input_mode = InputMode::Insert;
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_keyboard_event(&mut app, ctrl_c), ControlFlow::Break(()));
    }

    #[test]
    fn test_copy_placeholder_copies_nothing() {
        let mut app = App::new(&TerminalConfig::default());
        let _ = handle_keyboard_event(&mut app, key(KeyCode::Char('y')));
        assert!(!app.copied);
        assert!(app.status_message.contains("Coming Soon"));
    }

    #[test]
    fn test_copy_indicator_expiry_ignores_stale_timers() {
        let mut app = App::new(&TerminalConfig::default());
        let first = app.mark_copied();
        let second = app.mark_copied();
        assert!(app.copied);

        app.handle_message(AppMessage::CopyIndicatorExpired(first));
        assert!(app.copied);

        app.handle_message(AppMessage::CopyIndicatorExpired(second));
        assert!(!app.copied);
    }

    #[tokio::test]
    async fn test_copy_indicator_message_round_trip() {
        let mut app = App::new(&TerminalConfig::default());
        let mut rx = app.rx.take().unwrap();
        let generation = app.mark_copied();
        app.tx
            .send(AppMessage::CopyIndicatorExpired(generation))
            .unwrap();

        crate::tui::events::handle_app_messages(&mut app, &mut rx);
        assert!(!app.copied);
    }

    #[test]
    fn test_auto_scroll_functionality() {
        let mut app = App::new(&TerminalConfig::default());
        app.set_viewport(78, 5);
        let bottom = app.max_scroll();
        assert!(bottom > 0);
        assert_eq!(app.scroll_offset, bottom);

        let _ = handle_keyboard_event(&mut app, key(KeyCode::Char('k')));
        assert!(!app.auto_scroll_enabled);
        assert_eq!(app.scroll_offset, bottom - 1);

        // New output does not move a pinned view
        app.run_quick_command(0);
        assert_eq!(app.scroll_offset, bottom - 1);

        let _ = handle_keyboard_event(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.scroll_offset, 0);

        let _ = handle_keyboard_event(&mut app, key(KeyCode::Char('a')));
        assert!(app.auto_scroll_enabled);
        assert_eq!(app.scroll_offset, app.max_scroll());
    }

    #[test]
    fn test_clear_resets_view() {
        let mut app = App::new(&TerminalConfig::default());
        app.set_viewport(78, 5);
        app.run_quick_command(0);
        app.input = "clear".to_string();
        assert_eq!(app.submit_input(), Outcome::Cleared);
        assert_eq!(app.session.transcript().len(), CLEAR_BANNER.len());
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_screen_rows_wrap_and_keep_blank_lines() {
        let mut app = App::new(&TerminalConfig::default());
        app.set_viewport(20, 10);
        app.input = "clear".to_string();
        app.submit_input();

        let rows = app.screen_rows();
        // "OrisysLabs Privacy Terminal v1.0" wraps, the trailing newline adds a blank row
        assert!(rows.iter().all(|r| r.text.chars().count() <= 20));
        assert_eq!(rows.back().unwrap().text, "");
        assert!(rows.len() > CLEAR_BANNER.len());
    }

    #[test]
    fn test_banner_art_is_clipped_not_wrapped() {
        let app = App::new(&TerminalConfig::default());
        assert_eq!(app.viewport.width, 78);

        let rows = app.screen_rows();
        // Eleven single-row entries plus the blank, text, blank closing line.
        assert_eq!(rows.len(), 14);
        for (i, row) in rows.iter().enumerate().take(7).skip(1) {
            assert!(row.text.width() <= 78, "art row {} is {} wide", i, row.text.width());
            assert!(WELCOME_BANNER[i].1.starts_with(&row.text));
            assert!(!row.text.trim().is_empty());
        }
        assert_eq!(rows[7].text, WELCOME_BANNER[7].1);
    }

    #[test]
    fn test_scroll_offset_beyond_u16_range() {
        let mut config = TerminalConfig::default();
        config.terminal.max_transcript_lines = 100_000;
        let mut app = App::new(&config);
        app.set_viewport(78, 20);

        for _ in 0..3000 {
            app.input = "help".to_string();
            app.submit_input();
        }

        let total = app.screen_rows().len();
        assert!(total - 20 > usize::from(u16::MAX));
        assert_eq!(app.scroll_offset, total - 20);
        assert_eq!(app.scroll_offset, app.max_scroll());

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| rendering::ui(f, &mut app)).unwrap();
        assert_eq!(app.scroll_offset, app.max_scroll());

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains(&format!("╚{}", "═".repeat(20))));
        assert!(screen.contains("shield        - Enter shielded mode"));
    }

    #[test]
    fn test_incremental_rows_match_full_layout() {
        let mut config = TerminalConfig::default();
        config.terminal.max_transcript_lines = 30;
        let mut app = App::new(&config);

        let assert_matches_rebuild = |app: &mut App| {
            let incremental = app.screen_rows().clone();
            // A width change forces a full rebuild.
            app.set_viewport(40, 20);
            app.set_viewport(78, 20);
            assert_eq!(app.screen_rows(), &incremental);
        };

        let commands = ["about", "zk", "nonsense", "solana", "x402", "shield", "status"];
        for command in commands.iter().cycle().take(14) {
            app.input = command.to_string();
            app.submit_input();
        }
        assert!(app.session.transcript().dropped() > 0);
        assert_matches_rebuild(&mut app);

        app.input = "clear".to_string();
        app.submit_input();
        assert_eq!(app.screen_rows().len(), 3);

        for _ in 0..20 {
            app.run_quick_command(1);
        }
        assert_matches_rebuild(&mut app);
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("help", 10), "help");
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("▸▸▸", 2), "▸▸");
    }

    #[test]
    fn test_small_terminal_threshold() {
        assert!(is_too_small(79, 40));
        assert!(is_too_small(120, 23));
        assert!(!is_too_small(80, 24));
    }

    #[test]
    fn test_render_shows_header_and_palette() {
        let mut app = App::new(&TerminalConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| rendering::ui(f, &mut app)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("CA: Coming Soon"));
        assert!(screen.contains("[6] shield"));
        assert!(screen.contains("orisys@terminal:~$"));
        assert_eq!(app.viewport.width, 98);
    }

    #[test]
    fn test_render_small_terminal_warning() {
        let mut app = App::new(&TerminalConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| rendering::ui(f, &mut app)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Terminal too small"));
    }
}
