//! termfolio library
//!
//! A single-page personal portfolio rendered in the terminal. The
//! [`behavior`] module holds the host-independent interactive layer (theme
//! toggle, scroll-spy navigation, typewriter titles, toast notifications);
//! [`tui`] hosts it on a ratatui page.

// Module declarations
pub mod behavior;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod shortcuts;
pub mod tui;
