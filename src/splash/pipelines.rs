//! High-level orchestration for the splash generator

mod generate;

pub use generate::generate_splash;
