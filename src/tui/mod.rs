//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, and the widgets. The
//! page view is the host the interactive layer is mounted on; the loop feeds
//! it frames, timer deadlines and key presses.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod help_registry;
pub mod nav_bar;
pub mod page;
pub mod status_bar;
pub mod theme;
pub mod toast;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame, Terminal,
};
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::behavior::{
    InteractiveLayer, LayerSettings, Scheduler, SectionId, Task, UserAction, VisibilityOptions,
};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::Portfolio;
use crate::shortcuts::ShortcutRegistry;

pub use component::{Component, ComponentEvent};
pub use help_overlay::HelpOverlay;
pub use help_registry::HelpRegistry;
pub use nav_bar::NavBar;
pub use page::PageView;
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use toast::ToastWidget;

/// Height of the nav bar including borders.
const NAV_HEIGHT: u16 = 3;

/// Height of the status bar including borders.
const STATUS_HEIGHT: u16 = 3;

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: i64 = 3;

/// Popup that currently owns keyboard input.
#[derive(Debug, Clone)]
pub enum ActiveComponent {
    /// Help overlay
    Help(HelpOverlay),
}

/// Application state
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Page view the interactive layer is mounted on
    pub view: PageView,
    /// Interactive layer, `None` once unmounted
    pub layer: Option<InteractiveLayer>,
    /// Timer queue driven by the event loop clock
    pub scheduler: Scheduler<Task>,
    /// Key to action mapping
    pub shortcuts: ShortcutRegistry,
    /// Keybinding descriptions
    pub help: HelpRegistry,
    /// Open popup, if any
    pub active_component: Option<ActiveComponent>,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// Lays out `portfolio` for a terminal of size `area` and mounts the
    /// interactive layer on it.
    pub fn new(portfolio: Portfolio, config: Config, area: Rect) -> Result<Self> {
        let help = HelpRegistry::load().context("Failed to load embedded help.toml")?;

        let settings = LayerSettings {
            start_theme: config.ui.theme.resolve(),
            titles: portfolio.titles.clone(),
            visibility: VisibilityOptions::default(),
        };
        let mut view = PageView::new(portfolio, page_area(area));
        let mut scheduler = Scheduler::new();
        let layer = InteractiveLayer::mount(&mut view, &mut scheduler, settings);

        let active_component = config
            .ui
            .show_help_on_startup
            .then(|| ActiveComponent::Help(HelpOverlay::new(&help)));

        Ok(Self {
            config,
            view,
            layer: Some(layer),
            scheduler,
            shortcuts: ShortcutRegistry::new(),
            help,
            active_component,
            should_quit: false,
        })
    }

    /// Help context for the current input owner.
    #[must_use]
    pub fn context_name(&self) -> &'static str {
        match self.active_component {
            Some(ActiveComponent::Help(_)) => help_registry::contexts::HELP,
            None => help_registry::contexts::MAIN,
        }
    }

    /// Section the nav currently treats as active.
    #[must_use]
    pub fn current_section(&self) -> SectionId {
        self.layer
            .as_ref()
            .and_then(InteractiveLayer::active_section)
            .unwrap_or(SectionId::Hero)
    }

    /// Toast text currently on screen.
    #[must_use]
    pub fn toast_message(&self) -> Option<&str> {
        self.layer.as_ref().and_then(InteractiveLayer::toast_message)
    }

    /// Forwards a user action to the interactive layer.
    pub fn dispatch(&mut self, action: UserAction) {
        if let Some(layer) = &mut self.layer {
            layer.dispatch(action, &mut self.view, &mut self.scheduler);
        }
    }

    /// Advances the clock to `now` (time since start).
    ///
    /// Fires due timers in deadline order, moves a smooth scroll one frame
    /// and runs the scroll spy against the new viewport.
    pub fn tick(&mut self, now: Duration) {
        while let Some(fired) = self.scheduler.pop_due(now) {
            if let Some(layer) = &mut self.layer {
                layer.on_timer(&fired, &mut self.view, &mut self.scheduler);
            }
        }
        self.scheduler.advance_to(now);

        self.view.tick_scroll();
        if let Some(layer) = &mut self.layer {
            if let Some(section) = layer.on_viewport(self.view.viewport(), &mut self.view) {
                tracing::debug!(section = section.key(), "section in view");
            }
        }
    }

    /// Re-lays out the page for a terminal of size `area`.
    pub fn layout(&mut self, area: Rect) {
        let page = page_area(area);
        if self.view.resize(page.width, page.height) {
            tracing::debug!(width = page.width, height = page.height, "page re-laid out");
            if let Some(layer) = &mut self.layer {
                layer.relayout(&self.view);
            }
        }
    }

    /// Opens the help overlay.
    pub fn open_help(&mut self) {
        self.active_component = Some(ActiveComponent::Help(HelpOverlay::new(&self.help)));
    }

    /// Closes the open popup.
    pub fn close_component(&mut self) {
        self.active_component = None;
    }

    /// Unmounts the interactive layer, cancelling its timers.
    pub fn shutdown(&mut self) {
        if let Some(layer) = self.layer.take() {
            layer.unmount(&mut self.scheduler);
        }
    }
}

/// Splits the screen into nav bar, page and status bar.
fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area)
}

/// Inner area of the page block for a screen of size `area`.
#[must_use]
pub fn page_area(area: Rect) -> Rect {
    Block::default()
        .borders(Borders::ALL)
        .inner(screen_chunks(area)[1])
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    run_with_events(state, terminal, |timeout| {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    })
}

/// Runs the frame loop, then unmounts the interactive layer whether the loop
/// quit normally or failed.
fn run_with_events<B, E>(
    state: &mut AppState,
    terminal: &mut Terminal<B>,
    next_event: E,
) -> Result<()>
where
    B: Backend,
    E: FnMut(Duration) -> Result<Option<Event>>,
{
    let result = run_frames(state, terminal, next_event);
    state.shutdown();
    result
}

/// Draws frames until quit. `next_event` waits up to one frame for input.
fn run_frames<B, E>(
    state: &mut AppState,
    terminal: &mut Terminal<B>,
    mut next_event: E,
) -> Result<()>
where
    B: Backend,
    E: FnMut(Duration) -> Result<Option<Event>>,
{
    let frame = Duration::from_millis(state.config.ui.frame_ms);
    let started = Instant::now();

    loop {
        let size = terminal.size().context("Failed to read terminal size")?;
        state.layout(Rect::new(0, 0, size.width, size.height));
        state.tick(started.elapsed());

        terminal.draw(|f| render(f, state))?;

        match next_event(frame)? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if handlers::handle_key_event(state, key)? {
                    break;
                }
            }
            Some(Event::Mouse(mouse)) => handlers::handle_mouse_event(state, mouse),
            // Resizes are picked up by the next layout call
            _ => {}
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let theme = state.view.theme();

    // Fill the screen so the palette wins over the terminal's own colors
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let chunks = screen_chunks(area);
    NavBar::render(
        f,
        chunks[0],
        APP_NAME,
        state.view.highlight(),
        state.view.mode(),
        theme,
    );
    state
        .view
        .render(f, chunks[1], &state.view.portfolio().profile.name);
    if let Some(message) = state.toast_message() {
        ToastWidget::render(f, chunks[1], message, theme);
    }
    StatusBar::render(f, chunks[2], state, theme);

    if let Some(ActiveComponent::Help(help)) = &state.active_component {
        help.render(f, area, theme);
    }
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
