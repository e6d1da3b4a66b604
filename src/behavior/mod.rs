//! Interactive behaviors of the portfolio page.
//!
//! Everything here is independent of the terminal: the behaviors talk to
//! the rendered view through [`ViewHost`] and to time through
//! [`Scheduler`], so they run the same against the real TUI and against
//! test doubles with a virtual clock.

pub mod layer;
pub mod nav;
pub mod scheduler;
pub mod section;
pub mod theme;
pub mod toast;
pub mod typewriter;
pub mod visibility;

pub use layer::{InteractiveLayer, LayerSettings, Task, UserAction, ViewHost};
pub use nav::{NavSynchronizer, Scroller};
pub use scheduler::{Fired, Scheduler, TimerHandle};
pub use section::{ParseSectionError, SectionId};
pub use theme::{PresentationTarget, ThemeController, ThemeMode};
pub use toast::Toast;
pub use typewriter::{Typewriter, TypewriterPhase};
pub use visibility::{
    BandObserver, IntersectionEntry, SectionBounds, Viewport, VisibilityNotifier,
    VisibilityOptions,
};
