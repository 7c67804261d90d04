//! Text watermark measuring and rasterizing.
//!
//! Text is laid out on a single line with its ascender line at the draw
//! origin. [`measure_text`] returns the ink bounding box of that layout
//! relative to the origin, and [`draw_text`] rasterizes the same layout
//! onto a canvas, so a box measured at `(0, 0)` and drawn at `(x, y)` ends
//! up at `(x + left, y + top)`.
//!
//! Outline fonts are sized in pixels per em. The bitmap fallback always
//! uses its native 8x8 cells.

use super::compositor::blend_over;
use super::font::{WatermarkFont, BITMAP_CELL_SIZE};
use super::position::PlacementPosition;
use super::Color;
use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};

/// Ink bounding box of a line of text, relative to the draw origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMetrics {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// Measure `text` at `font_size` pixels per em.
pub fn measure_text(font: &WatermarkFont, text: &str, font_size: u32) -> TextMetrics {
    match font {
        WatermarkFont::TrueType { font, .. } => measure_outline(font, text, font_size),
        WatermarkFont::Bitmap => measure_bitmap(text),
    }
}

/// Draw `text` onto `canvas` with its layout origin at `origin`.
///
/// Pixels falling outside the canvas are clipped. Glyph coverage scales
/// `alpha` for anti-aliased edges.
pub fn draw_text(
    canvas: &mut RgbaImage,
    font: &WatermarkFont,
    text: &str,
    font_size: u32,
    origin: PlacementPosition,
    color: Color,
    alpha: u8,
) {
    let mut plot = |x: i32, y: i32, coverage: f32| {
        if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
            return;
        }
        let pixel_alpha = (coverage.clamp(0.0, 1.0) * alpha as f32).round() as u8;
        if pixel_alpha == 0 {
            return;
        }

        // Blend with existing pixel (for anti-aliasing)
        let existing = *canvas.get_pixel(x as u32, y as u32);
        let pixel = Rgba([color.r, color.g, color.b, pixel_alpha]);
        canvas.put_pixel(x as u32, y as u32, blend_over(existing, pixel));
    };

    match font {
        WatermarkFont::TrueType { font, .. } => {
            for glyph in layout_outline(font, text, font_size, origin) {
                if let Some(outlined) = font.outline_glyph(glyph) {
                    let bounds = outlined.px_bounds();
                    outlined.draw(|px, py, coverage| {
                        plot(
                            bounds.min.x as i32 + px as i32,
                            bounds.min.y as i32 + py as i32,
                            coverage,
                        );
                    });
                }
            }
        }
        WatermarkFont::Bitmap => {
            let cell = BITMAP_CELL_SIZE as i32;
            for (i, c) in text.chars().enumerate() {
                let Some(rows) = BASIC_FONTS.get(c) else {
                    continue;
                };
                let cell_x = origin.x + i as i32 * cell;
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..8i32 {
                        // Bit 0 is the leftmost pixel
                        if *bits & (1u8 << col) != 0 {
                            plot(cell_x + col, origin.y + row as i32, 1.0);
                        }
                    }
                }
            }
        }
    }
}

/// Scale such that one em spans `font_size` pixels.
fn em_scale(font: &FontVec, font_size: u32) -> PxScale {
    let height = font.height_unscaled();
    let units_per_em = font.units_per_em().unwrap_or(height);
    PxScale::from(font_size as f32 * height / units_per_em)
}

/// Position glyphs along one line, ascender line at `origin.y`.
fn layout_outline(
    font: &FontVec,
    text: &str,
    font_size: u32,
    origin: PlacementPosition,
) -> Vec<Glyph> {
    let scale = em_scale(font, font_size);
    let scaled_font = font.as_scaled(scale);
    let baseline_y = origin.y as f32 + scaled_font.ascent();

    let mut glyphs = Vec::with_capacity(text.len());
    let mut cursor_x = origin.x as f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);

        // Add kerning if there's a previous glyph
        if let Some(prev) = prev_glyph {
            cursor_x += scaled_font.kern(prev, glyph_id);
        }

        glyphs.push(glyph_id.with_scale_and_position(scale, point(cursor_x, baseline_y)));

        cursor_x += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    glyphs
}

fn measure_outline(font: &FontVec, text: &str, font_size: u32) -> TextMetrics {
    let mut bounds: Option<(f32, f32, f32, f32)> = None;

    for glyph in layout_outline(font, text, font_size, PlacementPosition::new(0, 0)) {
        if let Some(outlined) = font.outline_glyph(glyph) {
            let b = outlined.px_bounds();
            bounds = Some(match bounds {
                None => (b.min.x, b.min.y, b.max.x, b.max.y),
                Some((x0, y0, x1, y1)) => {
                    (x0.min(b.min.x), y0.min(b.min.y), x1.max(b.max.x), y1.max(b.max.y))
                }
            });
        }
    }

    match bounds {
        Some((x0, y0, x1, y1)) => {
            let left = x0.floor() as i32;
            let top = y0.floor() as i32;
            TextMetrics {
                left,
                top,
                width: (x1.ceil() as i32 - left).max(0) as u32,
                height: (y1.ceil() as i32 - top).max(0) as u32,
            }
        }
        // Whitespace only: no ink
        None => TextMetrics::default(),
    }
}

fn measure_bitmap(text: &str) -> TextMetrics {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return TextMetrics::default();
    }

    TextMetrics {
        left: 0,
        top: 0,
        width: chars * BITMAP_CELL_SIZE,
        height: BITMAP_CELL_SIZE,
    }
}
