//! Input handlers for the page and its popups.

pub mod actions;
pub mod main;
pub mod popups;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};

use super::{AppState, WHEEL_ROWS};

pub use actions::dispatch_action;
pub use main::handle_main_input;
pub use popups::handle_popup_input;

/// Routes a key press to the popup if one is open, else to the page.
///
/// Returns `true` when the app should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if state.active_component.is_some() {
        handle_popup_input(state, key)
    } else {
        handle_main_input(state, key)
    }
}

/// Scrolls the page with the mouse wheel.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    if state.active_component.is_some() {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => state.view.scroll_by(-WHEEL_ROWS),
        MouseEventKind::ScrollDown => state.view.scroll_by(WHEEL_ROWS),
        _ => {}
    }
}
