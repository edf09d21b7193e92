//! Canvas creation and logo compositing

use std::error::Error;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use super::super::pure::{center_offset, thumbnail_size};
use super::super::types::{LogoPlacement, SplashConfig};

/// Opaque square canvas filled with the background color
pub fn new_canvas(config: &SplashConfig) -> RgbaImage {
    RgbaImage::from_pixel(config.size, config.size, config.background)
}

/// Load the logo as RGBA, or `None` when there is no file at `path`
///
/// A file that exists but cannot be decoded is an error.
pub fn load_logo(path: &Path) -> Result<Option<RgbaImage>, Box<dyn Error>> {
    if !path.exists() {
        return Ok(None);
    }
    let logo = image::open(path)?.to_rgba8();
    Ok(Some(logo))
}

/// Shrink the logo into a `bound x bound` box and paste it onto the canvas center
///
/// The logo's alpha is the paste mask for all four channels, so partially
/// transparent logo pixels also lower the canvas alpha there.
pub fn composite_logo(canvas: &mut RgbaImage, logo: &RgbaImage, bound: u32) -> LogoPlacement {
    let (width, height) = thumbnail_size(logo.dimensions(), bound);
    let resized = if (width, height) == logo.dimensions() {
        logo.clone()
    } else {
        imageops::resize(logo, width, height, FilterType::Lanczos3)
    };

    let (x, y) = center_offset(canvas.width(), (width, height));
    paste_masked(canvas, &resized, x, y);

    LogoPlacement {
        x,
        y,
        width,
        height,
    }
}

/// Paste `top` at `(x, y)` using its own alpha channel as the mask
///
/// Each channel becomes `top * a + bottom * (1 - a)`, rounded. Pixels that
/// fall outside `bottom` are clipped.
fn paste_masked(bottom: &mut RgbaImage, top: &RgbaImage, x: i64, y: i64) {
    for (tx, ty, src) in top.enumerate_pixels() {
        let bx = x + tx as i64;
        let by = y + ty as i64;
        if bx < 0 || by < 0 || bx >= bottom.width() as i64 || by >= bottom.height() as i64 {
            continue;
        }

        let mask = src[3] as u32;
        let dst = bottom.get_pixel_mut(bx as u32, by as u32);
        let blended: [u8; 4] =
            std::array::from_fn(|c| blend_channel(dst[c] as u32, src[c] as u32, mask));
        *dst = Rgba(blended);
    }
}

fn blend_channel(bottom: u32, top: u32, mask: u32) -> u8 {
    ((top * mask + bottom * (255 - mask) + 127) / 255) as u8
}
