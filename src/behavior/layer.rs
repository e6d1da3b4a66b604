//! Mount/unmount lifecycle of the interactive layer.
//!
//! [`InteractiveLayer::mount`] attaches the four behaviors to a
//! [`ViewHost`]; each one is skipped quietly when its target is missing.
//! Every timer the layer schedules is tracked by handle, and
//! [`InteractiveLayer::unmount`] releases exactly those handles plus the
//! visibility subscription.

use super::nav::{NavSynchronizer, Scroller};
use super::scheduler::{Fired, Scheduler, TimerHandle};
use super::section::SectionId;
use super::theme::{PresentationTarget, ThemeController, ThemeMode};
use super::toast::{Toast, RESUME_REQUEST_MESSAGE};
use super::typewriter::Typewriter;
use super::visibility::{
    BandObserver, SectionBounds, Viewport, VisibilityNotifier, VisibilityOptions,
};

/// Deferred work owned by the layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Advance the typewriter by one step
    TypewriterStep,
    /// Hide the current toast
    DismissToast,
}

/// User actions the layer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Theme switch pressed
    ToggleTheme,
    /// Nav entry clicked
    Navigate(SectionId),
    /// "Request resume" pressed
    RequestResume,
}

/// The rendered view the layer attaches to.
pub trait ViewHost: PresentationTarget + Scroller {
    /// Whether the view has a theme switch control.
    fn has_theme_switch(&self) -> bool;

    /// Section containers in page order.
    fn section_bounds(&self) -> Vec<SectionBounds>;

    /// Whether the view has the element the typewriter writes into.
    fn has_typing_target(&self) -> bool;

    /// Replaces the typewriter element's text.
    fn set_typing_text(&mut self, text: &str);

    /// Marks `section` as the highlighted nav entry.
    fn set_nav_highlight(&mut self, section: Option<SectionId>);
}

/// Settings applied at mount time.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSettings {
    /// Theme the view starts in
    pub start_theme: ThemeMode,
    /// Titles cycled by the typewriter
    pub titles: Vec<String>,
    /// Scroll-spy band
    pub visibility: VisibilityOptions,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            start_theme: ThemeMode::Dark,
            titles: vec![
                "Full-Stack Developer".to_string(),
                "AI/ML Enthusiast".to_string(),
                "Software Engineer".to_string(),
            ],
            visibility: VisibilityOptions::default(),
        }
    }
}

/// The four behaviors, attached to one mounted view.
pub struct InteractiveLayer {
    theme: Option<ThemeController>,
    nav: Option<NavSynchronizer>,
    notifier: Box<dyn VisibilityNotifier>,
    typewriter: Option<Typewriter>,
    typewriter_timer: Option<TimerHandle>,
    toast: Toast,
}

impl InteractiveLayer {
    /// Mounts the layer with the default band observer.
    pub fn mount<H: ViewHost>(
        host: &mut H,
        scheduler: &mut Scheduler<Task>,
        settings: LayerSettings,
    ) -> Self {
        let notifier = Box::new(BandObserver::new(settings.visibility));
        Self::mount_with_notifier(host, scheduler, settings, notifier)
    }

    /// Mounts the layer with an injected visibility notifier.
    pub fn mount_with_notifier<H: ViewHost>(
        host: &mut H,
        scheduler: &mut Scheduler<Task>,
        settings: LayerSettings,
        mut notifier: Box<dyn VisibilityNotifier>,
    ) -> Self {
        let theme = if host.has_theme_switch() {
            let controller = ThemeController::new(settings.start_theme);
            controller.apply(&mut *host);
            Some(controller)
        } else {
            tracing::debug!("no theme switch, theme controller not attached");
            None
        };

        let bounds = host.section_bounds();
        let nav = if bounds.is_empty() {
            tracing::debug!("no sections, navigation not attached");
            None
        } else {
            notifier.observe(bounds);
            Some(NavSynchronizer::new())
        };

        let mut layer = Self {
            theme,
            nav,
            notifier,
            typewriter: None,
            typewriter_timer: None,
            toast: Toast::new(),
        };

        if host.has_typing_target() {
            match Typewriter::new(settings.titles) {
                Some(typewriter) => {
                    layer.typewriter = Some(typewriter);
                    layer.step_typewriter(host, scheduler);
                }
                None => tracing::debug!("no titles, typewriter not attached"),
            }
        } else {
            tracing::debug!("no typing element, typewriter not attached");
        }

        tracing::info!(
            theme = layer.theme.is_some(),
            nav = layer.nav.is_some(),
            typewriter = layer.typewriter.is_some(),
            "interactive layer mounted"
        );
        layer
    }

    /// Handles a user action.
    pub fn dispatch<H: ViewHost>(
        &mut self,
        action: UserAction,
        host: &mut H,
        scheduler: &mut Scheduler<Task>,
    ) {
        match action {
            UserAction::ToggleTheme => {
                if let Some(theme) = &mut self.theme {
                    let mode = theme.toggle(&mut *host);
                    tracing::debug!(%mode, "theme toggled");
                }
            }
            UserAction::Navigate(section) => {
                if let Some(nav) = &mut self.nav {
                    nav.click(section, &mut *host);
                    host.set_nav_highlight(nav.highlighted());
                }
            }
            UserAction::RequestResume => {
                if !host.scroll_into_view(SectionId::Contact) {
                    tracing::debug!("contact section missing, not scrolling");
                }
                self.toast.show(RESUME_REQUEST_MESSAGE, scheduler);
            }
        }
    }

    /// Routes a fired timer. Returns true if the view changed.
    pub fn on_timer<H: ViewHost>(
        &mut self,
        fired: &Fired<Task>,
        host: &mut H,
        scheduler: &mut Scheduler<Task>,
    ) -> bool {
        match fired.payload {
            Task::TypewriterStep => {
                if self.typewriter_timer != Some(fired.handle) {
                    return false;
                }
                self.typewriter_timer = None;
                self.step_typewriter(host, scheduler);
                true
            }
            Task::DismissToast => self.toast.on_timer(fired.handle),
        }
    }

    /// Runs the scroll spy against `viewport`.
    ///
    /// Returns the section activated by this check, if any.
    pub fn on_viewport<H: ViewHost>(&mut self, viewport: Viewport, host: &mut H) -> Option<SectionId> {
        let nav = self.nav.as_mut()?;
        let entries = self.notifier.check(viewport);
        let winner = nav.apply_entries(&entries);
        if winner.is_some() {
            host.set_nav_highlight(nav.highlighted());
        }
        winner
    }

    /// Re-reads section bounds after the view was laid out again.
    pub fn relayout<H: ViewHost>(&mut self, host: &H) {
        if self.nav.is_some() {
            self.notifier.observe(host.section_bounds());
        }
    }

    /// Detaches everything and cancels the layer's pending timers.
    pub fn unmount(mut self, scheduler: &mut Scheduler<Task>) {
        if let Some(handle) = self.typewriter_timer.take() {
            scheduler.cancel(handle);
        }
        self.toast.cancel(scheduler);
        self.notifier.disconnect();
        self.nav = None;
        self.theme = None;
        tracing::info!("interactive layer unmounted");
    }

    /// Current theme, if the controller is attached.
    pub fn theme_mode(&self) -> Option<ThemeMode> {
        self.theme.map(|t| t.mode())
    }

    /// Active section, if navigation is attached.
    pub fn active_section(&self) -> Option<SectionId> {
        self.nav.map(|n| n.active())
    }

    /// Highlighted nav entry.
    pub fn highlighted(&self) -> Option<SectionId> {
        self.nav.and_then(|n| n.highlighted())
    }

    /// Toast message currently shown.
    pub fn toast_message(&self) -> Option<&str> {
        self.toast.message()
    }

    /// Typewriter state, if attached.
    pub const fn typewriter(&self) -> Option<&Typewriter> {
        self.typewriter.as_ref()
    }

    /// Whether the scroll spy is observing sections.
    pub fn is_observing(&self) -> bool {
        self.notifier.is_connected()
    }

    fn step_typewriter<H: ViewHost>(&mut self, host: &mut H, scheduler: &mut Scheduler<Task>) {
        let Some(typewriter) = &mut self.typewriter else {
            return;
        };
        let delay = typewriter.step();
        host.set_typing_text(typewriter.text());
        self.typewriter_timer = Some(scheduler.schedule(delay, Task::TypewriterStep));
    }
}
