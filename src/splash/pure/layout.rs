//! Logo sizing and placement
//!
//! Pure functions for fitting the logo into its box and centering it.

/// Fit `(width, height)` into a `bound x bound` box, keeping the aspect ratio
///
/// Images that already fit are left at their size. The side derived from the
/// aspect ratio is rounded down or up, whichever lands closer to the original
/// ratio, and never drops below 1.
pub fn thumbnail_size((width, height): (u32, u32), bound: u32) -> (u32, u32) {
    if width == 0 || height == 0 || (bound >= width && bound >= height) {
        return (width, height);
    }

    let aspect = width as f64 / height as f64;
    let bound_f = bound as f64;

    if aspect <= 1.0 {
        // Portrait or square: height hits the bound
        let w = round_aspect(bound_f * aspect, |n| (aspect - n as f64 / bound_f).abs());
        (w, bound)
    } else {
        let h = round_aspect(bound_f / aspect, |n| {
            if n == 0 {
                0.0
            } else {
                (aspect - bound_f / n as f64).abs()
            }
        });
        (bound, h)
    }
}

fn round_aspect(value: f64, error: impl Fn(u32) -> f64) -> u32 {
    let floor = value.floor() as u32;
    let ceil = value.ceil() as u32;
    // Ties go to the floor
    let picked = if error(ceil) < error(floor) { ceil } else { floor };
    picked.max(1)
}

/// Top-left position that centers an item of `(width, height)` on a square canvas
pub fn center_offset(canvas: u32, (width, height): (u32, u32)) -> (i64, i64) {
    let canvas = canvas as i64;
    (
        (canvas - width as i64).div_euclid(2),
        (canvas - height as i64).div_euclid(2),
    )
}
