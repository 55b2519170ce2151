//! Bitmap file I/O for `Canvas` buffers.
//!
//! - `save_bitmap`: encode an 8-bit grayscale canvas to disk, creating
//!   parent directories first.
//! - `load_bitmap`: read an image file back into an owned canvas.
//!
//! File handles live inside the codec calls and are closed on every exit
//! path, success or error.

use crate::canvas::Canvas;
use image::{DynamicImage, ImageBuffer, Luma};
use std::fs;
use std::path::Path;

/// Write `canvas` to `path` as a single-channel 8-bit image. The format
/// follows the file extension (`.bmp` for the display assets).
pub fn save_bitmap(canvas: &Canvas, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = canvas.data.clone();
    let img: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(canvas.w as u32, canvas.h as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(img)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Read the image at `path` into an 8-bit grayscale canvas.
pub fn load_bitmap(path: &Path) -> Result<Canvas, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    Canvas::from_raw(img.width() as usize, img.height() as usize, img.into_raw())
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
