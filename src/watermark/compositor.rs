//! Watermark compositor for blending an overlay onto an image.
//!
//! The overlay is a full-size RGBA layer, transparent except where text was
//! drawn. It is combined with the base image using the Porter-Duff "over"
//! operator, `result = overlay over base`.

use super::WatermarkError;
use image::{Rgba, RgbaImage};

/// Composite `overlay` over `base`, returning a new image.
///
/// Both images must have the same dimensions.
pub fn alpha_composite(base: &RgbaImage, overlay: &RgbaImage) -> Result<RgbaImage, WatermarkError> {
    if base.dimensions() != overlay.dimensions() {
        return Err(WatermarkError::CompositeError(format!(
            "overlay is {}x{} but image is {}x{}",
            overlay.width(),
            overlay.height(),
            base.width(),
            base.height()
        )));
    }

    let mut out = base.clone();
    for (dst, src) in out.pixels_mut().zip(overlay.pixels()) {
        *dst = blend_over(*dst, *src);
    }

    Ok(out)
}

/// Blend two pixels with the "over" operator.
///
/// A fully transparent foreground leaves the background untouched.
pub(crate) fn blend_over(background: Rgba<u8>, foreground: Rgba<u8>) -> Rgba<u8> {
    if foreground[3] == 0 {
        return background;
    }
    if foreground[3] == 255 {
        return foreground;
    }

    let fg_alpha = foreground[3] as f32 / 255.0;
    let bg_alpha = background[3] as f32 / 255.0;

    // Porter-Duff "over" operator
    let out_alpha = fg_alpha + bg_alpha * (1.0 - fg_alpha);

    if out_alpha < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend_channel = |fg: u8, bg: u8| -> u8 {
        let fg_f = fg as f32 / 255.0;
        let bg_f = bg as f32 / 255.0;
        let result = (fg_f * fg_alpha + bg_f * bg_alpha * (1.0 - fg_alpha)) / out_alpha;
        (result * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend_channel(foreground[0], background[0]),
        blend_channel(foreground[1], background[1]),
        blend_channel(foreground[2], background[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}
