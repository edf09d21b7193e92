//! Imageset variants
//!
//! The launch screen files Xcode picks between by scale and appearance.

use super::super::types::SplashVariant;

/// Every file written into the imageset, light variants first
pub const SPLASH_VARIANTS: [SplashVariant; 6] = [
    SplashVariant::new(1, false),
    SplashVariant::new(2, false),
    SplashVariant::new(3, false),
    SplashVariant::new(1, true),
    SplashVariant::new(2, true),
    SplashVariant::new(3, true),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_cover_scales_and_appearances() {
        let names: Vec<String> = SPLASH_VARIANTS.iter().map(|v| v.file_name()).collect();
        assert_eq!(
            names,
            vec![
                "Default@1x~universal~anyany.png",
                "Default@2x~universal~anyany.png",
                "Default@3x~universal~anyany.png",
                "Default@1x~universal~anyany-dark.png",
                "Default@2x~universal~anyany-dark.png",
                "Default@3x~universal~anyany-dark.png",
            ]
        );
    }
}
