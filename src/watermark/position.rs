//! Position calculation for watermark placement.
//!
//! # Example
//!
//! ```
//! use photomark::watermark::{calculate_position, ImageDimensions, WatermarkDimensions, WatermarkPlacement};
//!
//! let image = ImageDimensions { width: 800, height: 600 };
//! let text = WatermarkDimensions { width: 101, height: 30 };
//!
//! let pos = calculate_position(WatermarkPlacement::default(), &image, &text);
//! assert_eq!((pos.x, pos.y), (349, 540)); // (800 - 101) / 2, floor(0.95 * 600) - 30
//! ```

use super::WatermarkPlacement;

/// Dimensions of the target image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Dimensions of the watermark to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatermarkDimensions {
    pub width: u32,
    pub height: u32,
}

/// Draw origin of the watermark. May be negative when the text does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPosition {
    pub x: i32,
    pub y: i32,
}

impl PlacementPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Calculate where the watermark's text box starts.
///
/// For [`WatermarkPlacement::BottomCenter`]:
/// - `x = floor((width - text_width) / 2)`
/// - `y = floor(bottom_ratio * height) - text_height`
pub fn calculate_position(
    placement: WatermarkPlacement,
    image: &ImageDimensions,
    watermark: &WatermarkDimensions,
) -> PlacementPosition {
    let img_w = image.width as i64;
    let img_h = image.height as f64;
    let wm_w = watermark.width as i64;
    let wm_h = watermark.height as i64;

    match placement {
        WatermarkPlacement::BottomCenter { bottom_ratio } => {
            // Floor division, also for text wider than the image
            let x = (img_w - wm_w).div_euclid(2);
            let y = (img_h * bottom_ratio).floor() as i64 - wm_h;
            PlacementPosition::new(saturate(x), saturate(y))
        }
    }
}

/// Whether a watermark at `pos` lies entirely inside the image.
pub fn is_within_bounds(
    pos: PlacementPosition,
    watermark: &WatermarkDimensions,
    image: &ImageDimensions,
) -> bool {
    pos.x >= 0
        && pos.y >= 0
        && pos.x as i64 + watermark.width as i64 <= image.width as i64
        && pos.y as i64 + watermark.height as i64 <= image.height as i64
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
