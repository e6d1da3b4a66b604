//! Popup input handlers.

use anyhow::Result;
use crossterm::event;

use crate::tui::{ActiveComponent, AppState, Component, ComponentEvent};

/// Handle input while a popup is open
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(ActiveComponent::Help(help)) = &mut state.active_component else {
        return Ok(false);
    };

    match help.handle_input(key) {
        Some(ComponentEvent::Closed) => state.close_component(),
        Some(ComponentEvent::QuitRequested) => {
            state.should_quit = true;
            return Ok(true);
        }
        None => {}
    }

    Ok(false)
}
