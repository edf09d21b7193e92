//! Splash generation pipeline

use std::error::Error;
use std::path::{Path, PathBuf};

use super::super::operations::{composite_logo, encode_png, load_logo, new_canvas, save_variants};
use super::super::pure::SPLASH_VARIANTS;
use super::super::types::SplashConfig;

/// Render the splash and write every imageset variant into `out_dir`
///
/// A missing logo yields a plain background. Only the variant files are
/// written; everything else in `out_dir` is left alone. Returns the image
/// paths in variant order.
pub fn generate_splash(
    config: &SplashConfig,
    logo_path: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut canvas = new_canvas(config);

    if let Some(logo) = load_logo(logo_path)? {
        let placement = composite_logo(&mut canvas, &logo, config.logo_bound());
        println!(
            "Added logo at {}, {} with size {}x{}",
            placement.x, placement.y, placement.width, placement.height
        );
    }

    let png = encode_png(&canvas)?;
    save_variants(out_dir, &png, &SPLASH_VARIANTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;

    fn small_config() -> SplashConfig {
        SplashConfig {
            size: 120,
            ..SplashConfig::default()
        }
    }

    fn read_rgba(path: &Path) -> RgbaImage {
        image::open(path).unwrap().to_rgba8()
    }

    #[test]
    fn test_generate_with_logo_writes_identical_variants() {
        let dir = tempfile::tempdir().unwrap();
        let logo_path = dir.path().join("App-Logo.png");
        RgbaImage::from_pixel(60, 40, Rgba([240, 180, 20, 255]))
            .save(&logo_path)
            .unwrap();
        let out_dir = dir.path().join("Splash.imageset");
        fs::create_dir(&out_dir).unwrap();

        let config = small_config();
        let written = generate_splash(&config, &logo_path, &out_dir).unwrap();

        assert_eq!(written.len(), 6);
        let first = fs::read(&written[0]).unwrap();
        for path in &written[1..] {
            assert_eq!(fs::read(path).unwrap(), first);
        }

        let image = read_rgba(&written[0]);
        assert_eq!(image.dimensions(), (120, 120));
        assert_eq!(*image.get_pixel(0, 0), config.background);
        assert_ne!(*image.get_pixel(60, 60), config.background);
    }

    #[test]
    fn test_generate_leaves_other_imageset_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("Splash.imageset");
        fs::create_dir(&out_dir).unwrap();
        let contents = out_dir.join("Contents.json");
        fs::write(&contents, "{\"existing\":true}").unwrap();

        generate_splash(&small_config(), &dir.path().join("missing.png"), &out_dir).unwrap();

        assert_eq!(fs::read_to_string(&contents).unwrap(), "{\"existing\":true}");
        assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 7);
    }

    #[test]
    fn test_generate_without_logo_is_plain_background() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("Splash.imageset");
        fs::create_dir(&out_dir).unwrap();

        let config = small_config();
        let written =
            generate_splash(&config, &dir.path().join("missing.png"), &out_dir).unwrap();

        for path in &written {
            let image = read_rgba(path);
            assert_eq!(image.dimensions(), (120, 120));
            assert!(image.pixels().all(|p| *p == config.background));
        }
    }

    #[test]
    fn test_generate_missing_output_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("Splash.imageset");

        let result = generate_splash(&small_config(), &dir.path().join("missing.png"), &out_dir);

        assert!(result.is_err());
        assert!(!out_dir.exists());
    }
}
