//! Imageset file output

use std::error::Error;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use super::super::types::SplashVariant;

/// Encode the canvas as PNG once so every variant gets identical bytes
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Write `png` once per variant into `dir`, overwriting existing files
///
/// `dir` must already exist. Files written before a failure are left behind.
pub fn save_variants(
    dir: &Path,
    png: &[u8],
    variants: &[SplashVariant],
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut written = Vec::with_capacity(variants.len());
    for variant in variants {
        let output_path = dir.join(variant.file_name());
        fs::write(&output_path, png)?;
        println!("Saved: {}", output_path.display());
        written.push(output_path);
    }
    Ok(written)
}
