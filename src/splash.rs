//! iOS launch screen generator
//!
//! Renders a solid square canvas with the app logo centered on it and writes
//! the result into the `Splash.imageset` of the Xcode project.
//!
//! ## Module Structure
//! - `types.rs`: SplashConfig, SplashVariant, LogoPlacement
//! - `pure/`: Pure functions (logo sizing, variant list)
//! - `operations/`: Atomic I/O operations (canvas, logo, save)
//! - `pipelines/`: High-level orchestration (generate_splash)

mod operations;
mod pipelines;
mod pure;
mod types;

pub use types::{LogoPlacement, SplashConfig, SplashVariant};

pub use operations::{composite_logo, encode_png, load_logo, new_canvas, save_variants};
pub use pipelines::generate_splash;
pub use pure::{SPLASH_VARIANTS, center_offset, thumbnail_size};
