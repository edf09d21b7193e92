//! Pure functions for the patcher
//!
//! These functions have no side effects and are deterministic.

mod messages;
mod render;

pub use messages::{AUTH_ERROR_MESSAGES, DEFAULT_MESSAGE, DEFAULT_TITLE};
pub use render::{LEGACY_ERROR_HANDLING, apply_patch, render_error_handling};
