//! Font selection for text watermarks.
//!
//! Fonts come from a ranked list of [`FontProvider`]s. The first provider
//! that reports itself available is loaded; if that load fails, or nothing
//! is available, the built-in 8x8 bitmap font is used instead. Resolution
//! never fails, it only degrades.
//!
//! The bitmap fallback is fixed-size and ignores the font size computed by
//! [`resolve_font_size`].

use super::WatermarkError;
use ab_glyph::FontVec;
use std::fmt;
use std::path::{Path, PathBuf};

/// Smallest font size ever used, in pixels per em.
pub const MIN_FONT_SIZE: u32 = 20;

/// Font size as a fraction of the image's short side.
pub const FONT_SIZE_RATIO: f64 = 0.03;

/// Cell size of the built-in bitmap font, in pixels.
pub const BITMAP_CELL_SIZE: u32 = 8;

/// Bold serif fonts searched when no font path is given, in priority order.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Times New Roman Bold.ttf",
    "/System/Library/Fonts/Times New Roman.ttf",
    "/Windows/Fonts/timesbd.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Bold.ttf",
];

/// Font size for an image: 3% of the short side, never below 20.
///
/// ```
/// use photomark::watermark::resolve_font_size;
///
/// assert_eq!(resolve_font_size(1000, 2000), 30);
/// assert_eq!(resolve_font_size(400, 300), 20);
/// ```
pub fn resolve_font_size(width: u32, height: u32) -> u32 {
    let short_side = width.min(height);
    let scaled = (short_side as f64 * FONT_SIZE_RATIO) as u32;
    scaled.max(MIN_FONT_SIZE)
}

/// A font ready for measuring and drawing watermark text.
pub enum WatermarkFont {
    /// Outline font loaded from disk, scaled per image.
    TrueType { font: FontVec, path: PathBuf },
    /// Built-in fixed-size bitmap font.
    Bitmap,
}

impl WatermarkFont {
    /// True when this is the built-in fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Bitmap)
    }

    /// Short human-readable description for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::TrueType { path, .. } => path.display().to_string(),
            Self::Bitmap => "built-in bitmap font".to_string(),
        }
    }
}

impl fmt::Debug for WatermarkFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrueType { path, .. } => f
                .debug_struct("TrueType")
                .field("path", path)
                .finish_non_exhaustive(),
            Self::Bitmap => f.write_str("Bitmap"),
        }
    }
}

/// A source a font can be loaded from.
pub trait FontProvider {
    /// Name used in log messages.
    fn name(&self) -> String;

    /// Whether this provider should be tried at all.
    fn is_available(&self) -> bool;

    /// Load the font.
    fn load(&self) -> Result<WatermarkFont, WatermarkError>;
}

/// A TrueType/OpenType font file on disk.
#[derive(Debug, Clone)]
pub struct TrueTypeFile {
    path: PathBuf,
    explicit: bool,
}

impl TrueTypeFile {
    /// A search-list candidate, tried only if the file exists.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: false,
        }
    }

    /// A user-supplied path, always tried so a bad path is reported.
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FontProvider for TrueTypeFile {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn is_available(&self) -> bool {
        self.explicit || self.path.is_file()
    }

    fn load(&self) -> Result<WatermarkFont, WatermarkError> {
        let data = std::fs::read(&self.path).map_err(|e| {
            WatermarkError::FontError(format!("{}: {}", self.path.display(), e))
        })?;
        let font = FontVec::try_from_vec(data).map_err(|e| {
            WatermarkError::FontError(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(WatermarkFont::TrueType {
            font,
            path: self.path.clone(),
        })
    }
}

/// The built-in bitmap font. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinBitmapFont;

impl FontProvider for BuiltinBitmapFont {
    fn name(&self) -> String {
        "built-in bitmap font".to_string()
    }

    fn is_available(&self) -> bool {
        true
    }

    fn load(&self) -> Result<WatermarkFont, WatermarkError> {
        Ok(WatermarkFont::Bitmap)
    }
}

/// Ranked list of font providers with a guaranteed fallback.
pub struct FontResolver {
    providers: Vec<Box<dyn FontProvider>>,
}

impl FontResolver {
    /// Create a resolver over the given providers, highest priority first.
    pub fn new(providers: Vec<Box<dyn FontProvider>>) -> Self {
        Self { providers }
    }

    /// Resolver over [`DEFAULT_FONT_PATHS`].
    pub fn system_defaults() -> Self {
        Self::new(
            DEFAULT_FONT_PATHS
                .iter()
                .map(|p| Box::new(TrueTypeFile::new(p)) as Box<dyn FontProvider>)
                .collect(),
        )
    }

    /// Resolver for an optional user font path.
    ///
    /// A given path replaces the search list entirely.
    pub fn for_override(font_path: Option<&Path>) -> Self {
        match font_path {
            Some(path) => Self::new(vec![Box::new(TrueTypeFile::explicit(path))]),
            None => Self::system_defaults(),
        }
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Resolve a font. Only the first available provider is loaded.
    pub fn resolve(&self) -> WatermarkFont {
        let Some(provider) = self.providers.iter().find(|p| p.is_available()) else {
            tracing::warn!("⚠ No font found, using the built-in bitmap font");
            return WatermarkFont::Bitmap;
        };

        match provider.load() {
            Ok(font) => {
                tracing::info!(font = %provider.name(), "✓ Font loaded");
                font
            }
            Err(e) => {
                tracing::warn!(
                    font = %provider.name(),
                    error = %e,
                    "✗ Could not load font, using the built-in bitmap font"
                );
                WatermarkFont::Bitmap
            }
        }
    }
}

impl fmt::Debug for FontResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("FontResolver")
            .field("providers", &names)
            .finish()
    }
}
