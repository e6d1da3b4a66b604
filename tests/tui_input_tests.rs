//! Integration tests for key handling on the page.
//!
//! Feeds key events through the same handler the event loop uses and checks
//! the resulting view state.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use termfolio::behavior::{SectionId, ThemeMode};
use termfolio::config::Config;
use termfolio::models::Portfolio;
use termfolio::tui::{handlers, AppState};

fn state() -> AppState {
    AppState::new(
        Portfolio::embedded().unwrap(),
        Config::new(),
        Rect::new(0, 0, 80, 24),
    )
    .unwrap()
}

fn press(state: &mut AppState, code: KeyCode) -> bool {
    handlers::handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
}

/// Ticks at frame rate until the smooth scroll settles.
fn settle(state: &mut AppState, now: &mut Duration) {
    for _ in 0..500 {
        *now += Duration::from_millis(33);
        state.tick(*now);
        if !state.view.is_scrolling() {
            return;
        }
    }
    panic!("scroll never settled");
}

#[test]
fn test_theme_key_toggles() {
    let mut state = state();
    assert!(!press(&mut state, KeyCode::Char('t')));
    assert_eq!(state.view.mode(), ThemeMode::Light);
    press(&mut state, KeyCode::Char('t'));
    assert_eq!(state.view.mode(), ThemeMode::Dark);
}

#[test]
fn test_digit_keys_jump_to_sections() {
    let mut state = state();
    let mut now = Duration::ZERO;
    state.tick(now);

    for (digit, section) in ('1'..='7').zip(SectionId::ALL) {
        press(&mut state, KeyCode::Char(digit));
        assert_eq!(state.view.highlight(), Some(section));
        settle(&mut state, &mut now);
        assert_eq!(state.current_section(), section);
    }
}

#[test]
fn test_tab_walks_sections() {
    let mut state = state();
    let mut now = Duration::ZERO;
    state.tick(now);

    press(&mut state, KeyCode::Tab);
    assert_eq!(state.view.highlight(), Some(SectionId::About));
    settle(&mut state, &mut now);
    press(&mut state, KeyCode::Tab);
    assert_eq!(state.view.highlight(), Some(SectionId::Experience));
    settle(&mut state, &mut now);
    press(&mut state, KeyCode::BackTab);
    assert_eq!(state.view.highlight(), Some(SectionId::About));
}

#[test]
fn test_manual_scroll_moves_highlight() {
    let mut state = state();
    let mut now = Duration::ZERO;
    state.tick(now);
    assert_eq!(state.view.highlight(), Some(SectionId::Hero));

    press(&mut state, KeyCode::End);
    now += Duration::from_millis(33);
    state.tick(now);
    assert_eq!(state.view.highlight(), Some(SectionId::Contact));

    press(&mut state, KeyCode::Home);
    now += Duration::from_millis(33);
    state.tick(now);
    assert_eq!(state.view.highlight(), Some(SectionId::Hero));
}

#[test]
fn test_resume_key_shows_toast_and_reaches_contact() {
    let mut state = state();
    let mut now = Duration::ZERO;
    state.tick(now);

    press(&mut state, KeyCode::Char('r'));
    assert!(state.toast_message().is_some());
    settle(&mut state, &mut now);
    assert_eq!(state.view.highlight(), Some(SectionId::Contact));

    state.tick(Duration::from_secs(4));
    assert_eq!(state.toast_message(), None);
}

#[test]
fn test_help_overlay_captures_keys() {
    let mut state = state();
    press(&mut state, KeyCode::Char('?'));
    assert!(state.active_component.is_some());

    // 't' is not bound in the help context
    press(&mut state, KeyCode::Char('t'));
    assert_eq!(state.view.mode(), ThemeMode::Dark);

    press(&mut state, KeyCode::Esc);
    assert!(state.active_component.is_none());
}

#[test]
fn test_mouse_wheel_scrolls_page() {
    let mut state = state();
    let wheel = |kind| MouseEvent {
        kind,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::NONE,
    };

    handlers::handle_mouse_event(&mut state, wheel(MouseEventKind::ScrollDown));
    assert_eq!(state.view.offset(), 3);
    handlers::handle_mouse_event(&mut state, wheel(MouseEventKind::ScrollUp));
    assert_eq!(state.view.offset(), 0);
}

#[test]
fn test_quit_keys() {
    let mut state = state();
    assert!(press(&mut state, KeyCode::Char('q')));
    assert!(state.should_quit);

    let mut state = self::state();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(handlers::handle_key_event(&mut state, ctrl_c).unwrap());
}

#[test]
fn test_unbound_key_is_ignored() {
    let mut state = state();
    assert!(!press(&mut state, KeyCode::Char('z')));
    assert_eq!(state.view.offset(), 0);
}
