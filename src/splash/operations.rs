//! Atomic I/O operations for the splash generator

mod canvas;
mod save;

pub use canvas::{composite_logo, load_logo, new_canvas};
pub use save::{encode_png, save_variants};
