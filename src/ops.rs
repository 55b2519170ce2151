//! Intensity operations on source images and canvases.
//!
//! - `threshold`: binarize a canvas in place against a cutoff.
//! - `resize_to`: resample an 8-bit grayscale image to a fixed size.
//! - `load_binarized`: the full decode → luma → resize → threshold chain.

use crate::canvas::Canvas;
use image::imageops::FilterType;
use image::GrayImage;
use log::debug;
use std::path::Path;

/// Map every pixel to one of two levels: values strictly greater than
/// `cutoff` become 255, all others 0.
pub fn threshold(canvas: &mut Canvas, cutoff: u8) {
    for px in canvas.data.iter_mut() {
        *px = if *px > cutoff { 255 } else { 0 };
    }
}

/// Resample a grayscale image to exactly `w × h` with bilinear filtering.
pub fn resize_to(gray: &GrayImage, w: usize, h: usize) -> GrayImage {
    image::imageops::resize(gray, w as u32, h as u32, FilterType::Triangle)
}

/// Load the image at `path` and reduce it to a binarized `w × h` canvas.
///
/// Decoding failures (missing file, unsupported data) surface as an error
/// naming the path; nothing is written anywhere on failure.
pub fn load_binarized(path: &Path, w: usize, h: usize, cutoff: u8) -> Result<Canvas, String> {
    let gray = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    debug!(
        "decoded {} at {}x{}",
        path.display(),
        gray.width(),
        gray.height()
    );

    let resized = resize_to(&gray, w, h);
    let mut canvas = Canvas::from_raw(w, h, resized.into_raw())?;
    threshold(&mut canvas, cutoff);
    Ok(canvas)
}
