//! Watermark error types.
//!
//! Defines errors that can occur while preparing or applying a watermark.

use std::fmt;

/// Errors that can occur during watermark processing.
#[derive(Debug)]
pub enum WatermarkError {
    /// Font file could not be read or parsed
    FontError(String),

    /// Invalid configuration
    ConfigError(String),

    /// Failed to composite watermark onto image
    CompositeError(String),
}

impl fmt::Display for WatermarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontError(msg) => write!(f, "Failed to load font: {}", msg),
            Self::ConfigError(msg) => write!(f, "Watermark configuration error: {}", msg),
            Self::CompositeError(msg) => write!(f, "Failed to composite watermark: {}", msg),
        }
    }
}

impl std::error::Error for WatermarkError {}
