//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "termfolio";

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "termfolio";
