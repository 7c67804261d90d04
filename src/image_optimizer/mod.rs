//! Image stages of the finishing pass
//!
//! - `loader`: read and decode JPEG/PNG input
//! - `processor`: downscale anything whose long side exceeds the limit (Lanczos3)
//! - `encoder`: flatten transparency onto white and encode JPEG via mozjpeg

pub mod encoder;
pub mod error;
pub mod loader;
pub mod processor;

// Re-export commonly used types
pub use encoder::{flatten_onto_white, EncodedImage, EncoderQuality, JpegEncoder};
pub use error::ImageError;
pub use loader::{decode_image, has_supported_extension, load_image, SUPPORTED_EXTENSIONS};
pub use processor::{
    calculate_dimensions, compress_image, CompressedImage, DEFAULT_MAX_LONG_SIDE, DEFAULT_QUALITY,
};
