//! Rewrites the sign-in page's auth error handling with per-code titles.
//!
//! Run once from the web client checkout root.

use std::error::Error;

use blockmint_scripts::paths::PATH_AUTH_PAGE;
use blockmint_scripts::patcher::patch_file;

fn main() -> Result<(), Box<dyn Error>> {
    patch_file(&PATH_AUTH_PAGE)?;

    println!("Error messages updated successfully");
    Ok(())
}
