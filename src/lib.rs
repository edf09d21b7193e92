//! One-shot maintenance scripts for the BlockMint app.
//!
//! - `patcher`: rewrites the auth error handling block in the sign-in page
//! - `splash`: renders the iOS launch screen imageset

pub mod paths;
pub mod patcher;
pub mod splash;
