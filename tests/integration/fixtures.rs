// Synthetic photos for batch tests

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// Gradient JPEG, so the encoder has real content to work with
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 251) as u8, (y % 241) as u8, ((x + y) % 239) as u8])
    });
    img.save_with_format(path, ImageFormat::Jpeg)
        .expect("Failed to write JPEG fixture");
}

/// Fully transparent PNG
pub fn write_transparent_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
        .save_with_format(path, ImageFormat::Png)
        .expect("Failed to write PNG fixture");
}
