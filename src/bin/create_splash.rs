//! Generates the iOS launch screen imageset from the app logo.

use std::error::Error;

use blockmint_scripts::paths::{PATH_SPLASH_IMAGESET, PATH_SPLASH_LOGO};
use blockmint_scripts::splash::{SplashConfig, generate_splash};

fn main() -> Result<(), Box<dyn Error>> {
    generate_splash(
        &SplashConfig::default(),
        &PATH_SPLASH_LOGO,
        &PATH_SPLASH_IMAGESET,
    )?;

    println!("Done!");
    Ok(())
}
