//! Splash generator type definitions

use image::Rgba;

/// Canvas settings for the generated splash
#[derive(Debug, Clone, PartialEq)]
pub struct SplashConfig {
    /// Width and height of the square canvas in pixels
    pub size: u32,
    /// Opaque fill color, matches the app's `#0a0a0f` background
    pub background: Rgba<u8>,
    /// Logo bounding box as a fraction of `size`
    pub logo_fraction: f64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            size: 2732,
            background: Rgba([10, 10, 15, 255]),
            logo_fraction: 0.10,
        }
    }
}

impl SplashConfig {
    /// Side of the square box the logo is fitted into
    pub fn logo_bound(&self) -> u32 {
        (self.size as f64 * self.logo_fraction) as u32
    }
}

/// One file of the imageset: a scale factor plus light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplashVariant {
    pub scale: u8,
    pub dark: bool,
}

impl SplashVariant {
    pub const fn new(scale: u8, dark: bool) -> Self {
        Self { scale, dark }
    }

    /// Xcode's `Default@<n>x~universal~anyany[-dark].png` naming
    pub fn file_name(&self) -> String {
        let suffix = if self.dark { "-dark" } else { "" };
        format!("Default@{}x~universal~anyany{}.png", self.scale, suffix)
    }
}

/// Where the logo ended up on the canvas, after resizing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoPlacement {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logo_bound() {
        assert_eq!(SplashConfig::default().logo_bound(), 273);
    }

    #[test]
    fn test_variant_file_names() {
        assert_eq!(
            SplashVariant::new(1, false).file_name(),
            "Default@1x~universal~anyany.png"
        );
        assert_eq!(
            SplashVariant::new(3, true).file_name(),
            "Default@3x~universal~anyany-dark.png"
        );
    }
}
