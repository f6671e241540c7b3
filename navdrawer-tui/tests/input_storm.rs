//! Property tests: arbitrary key mashing never breaks presentation
//! invariants, and every frame still renders.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::collection::vec;
use proptest::prelude::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use navdrawer_core::screen::Screen;
use navdrawer_tui::app::{AppState, Overlay, EVENT_HISTORY_CAP};
use navdrawer_tui::config::Config;
use navdrawer_tui::{input, ui};

#[derive(Debug, Clone, Copy)]
enum StormOp {
    Key(KeyCode),
    Tick(u64),
}

fn arb_key() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Char('m')),
        Just(KeyCode::Char(' ')),
        Just(KeyCode::Char('j')),
        Just(KeyCode::Char('k')),
        Just(KeyCode::Char('e')),
        Just(KeyCode::Char('1')),
        Just(KeyCode::Char('2')),
        Just(KeyCode::Char('3')),
        Just(KeyCode::Char('x')),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::Enter),
        Just(KeyCode::Esc),
        Just(KeyCode::Backspace),
    ]
}

fn arb_storm_op() -> impl Strategy<Value = StormOp> {
    prop_oneof![
        arb_key().prop_map(StormOp::Key),
        (0u64..120).prop_map(StormOp::Tick),
    ]
}

proptest! {
    /// Whatever the user mashes, presentation state stays inside its
    /// bounds and the resulting frame still draws.
    #[test]
    fn key_storms_leave_the_app_consistent(ops in vec(arb_storm_op(), 0..128)) {
        let mut app = AppState::new(&Config::default());

        for op in ops {
            match op {
                StormOp::Key(code) => {
                    input::handle_key(&mut app, KeyEvent::new(code, KeyModifiers::NONE));
                }
                StormOp::Tick(dt) => {
                    app.scaffold.tick(Duration::from_millis(dt));
                }
            }
            app.drain_shell_events();

            prop_assert!(app.drawer_cursor < Screen::ALL.len());
            let openness = app.scaffold.drawer_openness();
            prop_assert!((0.0..=1.0).contains(&openness));
            prop_assert!(app.event_history.len() <= EVENT_HISTORY_CAP);
            if !app.event_history.is_empty() {
                prop_assert!(app.event_scroll < app.event_history.len());
            }
        }

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui::draw(f, &app)).unwrap();
    }

    /// The welcome overlay never survives a key press.
    #[test]
    fn the_first_key_always_dismisses_welcome(code in arb_key()) {
        let mut app = AppState::new(&Config::default());
        prop_assert_eq!(app.overlay, Overlay::Welcome);

        input::handle_key(&mut app, KeyEvent::new(code, KeyModifiers::NONE));
        prop_assert_ne!(app.overlay, Overlay::Welcome);

        // And the dismissing key has no second meaning.
        prop_assert_eq!(app.scaffold.current_screen(), Screen::Start);
        prop_assert!(app.running);
    }
}
