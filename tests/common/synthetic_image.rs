use image::{Luma, Rgb, RgbImage};
use std::path::Path;

/// Write a solid-color 3-channel PNG for use as converter input.
pub fn write_solid_rgb_png(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    let img = RgbImage::from_pixel(width, height, Rgb(rgb));
    img.save(path).expect("failed to write synthetic source image");
}

/// Write a grayscale PNG sweeping the full intensity range left to right.
pub fn write_horizontal_gradient_png(path: &Path, width: u32, height: u32) {
    let img = image::GrayImage::from_fn(width, height, |x, _| {
        Luma([(x * 255 / width.max(1)) as u8])
    });
    img.save(path).expect("failed to write synthetic source image");
}
