//! Compression stage
//!
//! Shrinks an image whose long side exceeds the limit, preserving aspect
//! ratio, and carries the JPEG quality through to the encoder. Images that
//! already fit are returned untouched.

use fast_image_resize::{FilterType, Image, MulDiv, PixelType, ResizeAlg, Resizer};
use image::DynamicImage;
use std::num::NonZeroU32;

use super::error::ImageError;

/// Longest allowed side, in pixels.
pub const DEFAULT_MAX_LONG_SIDE: u32 = 3000;

/// JPEG quality used for output.
pub const DEFAULT_QUALITY: u8 = 85;

/// Result of the compression stage
#[derive(Debug)]
pub struct CompressedImage {
    /// The image, resized or as given
    pub image: DynamicImage,
    /// Quality to encode with
    pub quality: u8,
}

/// Downscale `image` so its long side is at most `max_long_side`.
pub fn compress_image(
    image: DynamicImage,
    max_long_side: u32,
    quality: u8,
) -> Result<CompressedImage, ImageError> {
    let src_width = image.width();
    let src_height = image.height();

    if max_long_side == 0 {
        return Err(ImageError::invalid_dimensions(
            src_width,
            src_height,
            "maximum long side must be at least 1",
        ));
    }

    let (target_width, target_height) = calculate_dimensions(src_width, src_height, max_long_side);

    if (target_width, target_height) == (src_width, src_height) {
        return Ok(CompressedImage { image, quality });
    }

    tracing::debug!(
        src_width,
        src_height,
        target_width,
        target_height,
        "Downscaling image"
    );

    let resized = resize_image(&image, target_width, target_height)?;

    Ok(CompressedImage {
        image: resized,
        quality,
    })
}

/// Calculate target dimensions for a long-side limit.
///
/// Both sides are scaled by `max_long_side / long_side` and rounded to the
/// nearest pixel, never below 1. Within the limit, the size is unchanged.
pub fn calculate_dimensions(src_width: u32, src_height: u32, max_long_side: u32) -> (u32, u32) {
    let long_side = src_width.max(src_height);
    if long_side <= max_long_side {
        return (src_width, src_height);
    }

    let scale = max_long_side as f64 / long_side as f64;
    let scaled = |side: u32| (((side as f64) * scale).round() as u32).clamp(1, max_long_side);

    (scaled(src_width), scaled(src_height))
}

/// Resize image using fast-image-resize with Lanczos3 filter
fn resize_image(img: &DynamicImage, target_w: u32, target_h: u32) -> Result<DynamicImage, ImageError> {
    let src_w = img.width();
    let src_h = img.height();

    let src_width =
        NonZeroU32::new(src_w).ok_or_else(|| ImageError::resize_failed("Source width is 0"))?;
    let src_height =
        NonZeroU32::new(src_h).ok_or_else(|| ImageError::resize_failed("Source height is 0"))?;
    let dst_width =
        NonZeroU32::new(target_w).ok_or_else(|| ImageError::resize_failed("Target width is 0"))?;
    let dst_height =
        NonZeroU32::new(target_h).ok_or_else(|| ImageError::resize_failed("Target height is 0"))?;

    let has_alpha = img.color().has_alpha();

    let mut src_image = Image::from_vec_u8(
        src_width,
        src_height,
        img.to_rgba8().into_raw(),
        PixelType::U8x4,
    )
    .map_err(|e| ImageError::resize_failed(format!("Failed to create source image: {:?}", e)))?;

    let mut dst_image = Image::new(dst_width, dst_height, PixelType::U8x4);

    // Premultiplied alpha keeps transparent pixels from bleeding into edges
    let alpha_mul_div = MulDiv::default();
    if has_alpha {
        alpha_mul_div
            .multiply_alpha_inplace(&mut src_image.view_mut())
            .map_err(|e| ImageError::resize_failed(format!("Alpha multiply failed: {:?}", e)))?;
    }

    {
        let mut dst_view = dst_image.view_mut();
        let mut resizer = Resizer::new(ResizeAlg::Convolution(FilterType::Lanczos3));

        resizer
            .resize(&src_image.view(), &mut dst_view)
            .map_err(|e| ImageError::resize_failed(format!("Resize operation failed: {:?}", e)))?;

        if has_alpha {
            alpha_mul_div
                .divide_alpha_inplace(&mut dst_view)
                .map_err(|e| ImageError::resize_failed(format!("Alpha divide failed: {:?}", e)))?;
        }
    }

    let result_buf = dst_image.into_vec();
    let rgba_image = image::RgbaImage::from_raw(target_w, target_h, result_buf)
        .ok_or_else(|| ImageError::resize_failed("Failed to create output image buffer"))?;

    Ok(DynamicImage::ImageRgba8(rgba_image))
}
