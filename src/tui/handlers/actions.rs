//! Action dispatch for the page.

use anyhow::Result;

use crate::behavior::UserAction;
use crate::shortcuts::Action;
use crate::tui::AppState;

/// Performs `action`. Returns `true` when the app should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    let page_rows = i64::from(state.view.viewport().height.saturating_sub(1).max(1));

    match action {
        Action::ScrollUp => state.view.scroll_by(-1),
        Action::ScrollDown => state.view.scroll_by(1),
        Action::PageUp => state.view.scroll_by(-page_rows),
        Action::PageDown => state.view.scroll_by(page_rows),
        Action::JumpToTop => state.view.scroll_to_top(),
        Action::JumpToBottom => state.view.scroll_to_bottom(),

        Action::NextSection => {
            let next = state.current_section().next();
            state.dispatch(UserAction::Navigate(next));
        }
        Action::PreviousSection => {
            let previous = state.current_section().previous();
            state.dispatch(UserAction::Navigate(previous));
        }
        Action::GoToSection(section) => state.dispatch(UserAction::Navigate(section)),

        Action::ToggleTheme => state.dispatch(UserAction::ToggleTheme),
        Action::RequestResume => state.dispatch(UserAction::RequestResume),

        Action::ToggleHelp => state.open_help(),

        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
        Action::Cancel => {}
    }

    Ok(false)
}
