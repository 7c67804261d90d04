//! Watermark module for stamping a text watermark onto photos.
//!
//! # Features
//!
//! - **Resolution-aware sizing**: font size is 3% of the short side, at least 20px
//! - **Ranked font providers** with a built-in bitmap fallback that never fails
//! - **Bottom-center placement** at 95% of the image height
//! - **Alpha compositing** of a full-size transparent overlay
//!
//! # Example
//!
//! ```no_run
//! use photomark::watermark::{FontResolver, Watermarker, WatermarkSpec};
//!
//! let spec = WatermarkSpec::default();
//! let font = FontResolver::system_defaults().resolve();
//! let image = image::open("photo.jpg").unwrap();
//!
//! let watermarked = Watermarker::new(&spec, &font).apply(image).unwrap();
//! ```

pub mod compositor;
pub mod config;
pub mod error;
pub mod font;
pub mod position;
pub mod processor;
pub mod text_renderer;

// Re-export main types for convenience
pub use compositor::alpha_composite;
pub use config::{
    Color, WatermarkPlacement, WatermarkSpec, DEFAULT_TEXT, RENDER_ALPHA,
};
pub use error::WatermarkError;
pub use font::{
    resolve_font_size, BuiltinBitmapFont, FontProvider, FontResolver, TrueTypeFile,
    WatermarkFont, DEFAULT_FONT_PATHS, MIN_FONT_SIZE,
};
pub use position::{
    calculate_position, is_within_bounds, ImageDimensions, PlacementPosition,
    WatermarkDimensions,
};
pub use processor::Watermarker;
pub use text_renderer::{draw_text, measure_text, TextMetrics};
