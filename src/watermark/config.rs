//! Watermark configuration types.
//!
//! A [`WatermarkSpec`] is built once per run and shared by reference with
//! every image in the batch. It carries the text, its color, the stored
//! opacity fraction and the placement rule.

use super::WatermarkError;

/// Default watermark text.
pub const DEFAULT_TEXT: &str = "ELMO.H Photography";

/// Alpha every watermark glyph is rendered with.
///
/// The configured `opacity` is stored but does not reach the renderer;
/// watermarks are always drawn fully opaque.
pub const RENDER_ALPHA: u8 = 255;

/// RGB text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White color.
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Gold used by the default watermark.
    pub fn gold() -> Self {
        Self::new(212, 175, 55)
    }
}

/// Where the watermark text is placed on the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WatermarkPlacement {
    /// Horizontally centered, with the bottom of the text box sitting at
    /// `floor(bottom_ratio * height)`.
    BottomCenter { bottom_ratio: f64 },
}

impl Default for WatermarkPlacement {
    fn default() -> Self {
        Self::BottomCenter { bottom_ratio: 0.95 }
    }
}

/// Immutable watermark configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkSpec {
    /// Text to draw.
    pub text: String,
    /// Text color.
    pub color: Color,
    /// Opacity from 0.0 (transparent) to 1.0 (opaque). See [`RENDER_ALPHA`].
    pub opacity: f32,
    /// Placement rule.
    pub placement: WatermarkPlacement,
}

impl Default for WatermarkSpec {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            color: Color::gold(),
            opacity: 1.0,
            placement: WatermarkPlacement::default(),
        }
    }
}

impl WatermarkSpec {
    /// Create a spec with the given text and the default styling.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Validate the watermark configuration.
    pub fn validate(&self) -> Result<(), WatermarkError> {
        if self.text.is_empty() {
            return Err(WatermarkError::ConfigError(
                "Watermark text cannot be empty".to_string(),
            ));
        }

        // Check for NaN/Infinity and valid range
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(WatermarkError::ConfigError(format!(
                "Watermark opacity must be a finite value between 0.0 and 1.0, got {}",
                self.opacity
            )));
        }

        let WatermarkPlacement::BottomCenter { bottom_ratio } = self.placement;
        if !bottom_ratio.is_finite() || !(0.0..=1.0).contains(&bottom_ratio) {
            return Err(WatermarkError::ConfigError(format!(
                "Watermark bottom ratio must be between 0.0 and 1.0, got {}",
                bottom_ratio
            )));
        }

        Ok(())
    }
}
