//! Pure functions for the splash generator
//!
//! These functions have no side effects and are deterministic.

mod layout;
mod variants;

pub use layout::{center_offset, thumbnail_size};
pub use variants::SPLASH_VARIANTS;
