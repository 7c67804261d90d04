//! JPEG output encoding
//!
//! JPEG has no alpha channel, so images are first flattened onto an opaque
//! white background using their alpha as the mask. Encoding goes through
//! mozjpeg, reset to its baseline profile, with optimized Huffman coding.

use image::{DynamicImage, Rgb, RgbImage};
use std::panic::{self, AssertUnwindSafe};

use super::error::ImageError;

/// Quality settings for image encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderQuality {
    /// Quality value (1-100, where 100 is best quality)
    pub quality: u8,
}

impl Default for EncoderQuality {
    fn default() -> Self {
        Self { quality: 85 }
    }
}

impl EncoderQuality {
    /// Create quality settings with specified quality level
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }
}

/// Result of encoding an image
#[derive(Debug)]
pub struct EncodedImage {
    /// The encoded image data
    pub data: Vec<u8>,
}

impl EncodedImage {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Flatten an image onto opaque white.
///
/// Images without an alpha channel are only converted to RGB.
pub fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());

    for (dst, src) in out.pixels_mut().zip(rgba.pixels()) {
        let alpha = src[3] as u32;
        // src * a + white * (1 - a), rounded
        let mix = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        *dst = Rgb([mix(src[0]), mix(src[1]), mix(src[2])]);
    }

    out
}

/// JPEG encoder backed by mozjpeg
#[derive(Debug, Clone, Copy)]
pub struct JpegEncoder {
    /// Compute optimal Huffman tables (smaller files, same pixels)
    pub optimize_coding: bool,
}

impl Default for JpegEncoder {
    fn default() -> Self {
        Self {
            optimize_coding: true,
        }
    }
}

impl JpegEncoder {
    /// Encode an RGB image as baseline (sequential) JPEG.
    ///
    /// mozjpeg's default profile writes progressive scans. The fastest
    /// profile resets to libjpeg-turbo's baseline encoder and must be set
    /// before quality and Huffman optimization.
    pub fn encode(&self, image: &RgbImage, quality: EncoderQuality) -> Result<EncodedImage, ImageError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageError::invalid_dimensions(
                width,
                height,
                "cannot encode an empty image",
            ));
        }

        let pixels = image.as_raw();
        let optimize_coding = self.optimize_coding;

        // libjpeg reports fatal errors by unwinding
        let result = panic::catch_unwind(AssertUnwindSafe(|| -> std::io::Result<Vec<u8>> {
            let mut comp = mozjpeg::Compress::new(mozjpeg::ColorSpace::JCS_RGB);
            comp.set_fastest_defaults();
            comp.set_size(width as usize, height as usize);
            comp.set_quality(quality.quality as f32);
            comp.set_optimize_coding(optimize_coding);

            let mut started = comp.start_compress(Vec::new())?;
            started.write_scanlines(pixels)?;
            started.finish()
        }));

        match result {
            Ok(Ok(data)) => Ok(EncodedImage { data }),
            Ok(Err(e)) => Err(ImageError::encode_failed("jpeg", e.to_string())),
            Err(_) => Err(ImageError::encode_failed("jpeg", "encoder aborted")),
        }
    }
}
