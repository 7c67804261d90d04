//! Image loading
//!
//! Reads a photo from disk and decodes it into a `DynamicImage`. Only JPEG
//! and PNG are accepted, by file extension when scanning and by content
//! when decoding.

use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

use super::error::ImageError;
use crate::error::Error;

/// File extensions picked up from the input folder (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Whether `path` has one of the [`SUPPORTED_EXTENSIONS`].
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Read and decode the image at `path`.
pub fn load_image(path: &Path) -> Result<DynamicImage, Error> {
    let data = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_image(&data)?)
}

/// Decode image data into a DynamicImage
pub fn decode_image(data: &[u8]) -> Result<DynamicImage, ImageError> {
    let format = image::guess_format(data).map_err(|e| ImageError::decode_failed(e.to_string()))?;
    if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png) {
        return Err(ImageError::unsupported_format(format!("{:?}", format)));
    }

    ImageReader::with_format(Cursor::new(data), format)
        .decode()
        .map_err(|e| ImageError::decode_failed(e.to_string()))
}
