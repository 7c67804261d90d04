//! Watermark processor: the watermarking stage of the finishing pass.
//!
//! Runs after resizing and before flattening/encoding. For each image it
//! resolves the font size from the image's own dimensions, measures the
//! text, places it and composites a full-size overlay onto the image.

use super::{
    alpha_composite, calculate_position, draw_text, is_within_bounds, measure_text,
    resolve_font_size, ImageDimensions, WatermarkDimensions, WatermarkError, WatermarkFont,
    WatermarkSpec, RENDER_ALPHA,
};
use image::{DynamicImage, RgbaImage};

/// Applies one watermark spec with one resolved font.
#[derive(Debug, Clone, Copy)]
pub struct Watermarker<'a> {
    spec: &'a WatermarkSpec,
    font: &'a WatermarkFont,
}

impl<'a> Watermarker<'a> {
    pub fn new(spec: &'a WatermarkSpec, font: &'a WatermarkFont) -> Self {
        Self { spec, font }
    }

    /// Watermark `image`, returning an RGBA image of the same size.
    pub fn apply(&self, image: DynamicImage) -> Result<DynamicImage, WatermarkError> {
        let base = image.into_rgba8();
        let watermarked = self.apply_rgba(&base)?;
        Ok(DynamicImage::ImageRgba8(watermarked))
    }

    /// Watermark an RGBA buffer.
    pub fn apply_rgba(&self, base: &RgbaImage) -> Result<RgbaImage, WatermarkError> {
        let (width, height) = base.dimensions();
        let font_size = resolve_font_size(width, height);
        let metrics = measure_text(self.font, &self.spec.text, font_size);

        let image_dims = ImageDimensions { width, height };
        let text_dims = WatermarkDimensions {
            width: metrics.width,
            height: metrics.height,
        };
        let origin = calculate_position(self.spec.placement, &image_dims, &text_dims);

        tracing::debug!(
            width,
            height,
            font_size,
            font = %self.font.describe(),
            text_width = metrics.width,
            text_height = metrics.height,
            x = origin.x,
            y = origin.y,
            "Placing watermark"
        );
        if !is_within_bounds(origin, &text_dims, &image_dims) {
            tracing::debug!(width, height, "Watermark text extends past the image edge");
        }

        let mut overlay = RgbaImage::new(width, height);
        draw_text(
            &mut overlay,
            self.font,
            &self.spec.text,
            font_size,
            origin,
            self.spec.color,
            RENDER_ALPHA,
        );

        alpha_composite(base, &overlay)
    }
}
