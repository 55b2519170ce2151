#![doc = include_str!("../README.md")]

pub mod canvas;
pub mod config;
pub mod draw;
pub mod io;
pub mod ops;
pub mod testcard;
pub mod text;

/// Target display width in pixels.
pub const DISPLAY_WIDTH: usize = 576;
/// Target display height in pixels.
pub const DISPLAY_HEIGHT: usize = 136;
/// Binarization cutoff used by the converter: values strictly above it
/// map to white.
pub const BINARY_THRESHOLD: u8 = 127;

// --- High-level re-exports -------------------------------------------------

pub use crate::canvas::Canvas;
pub use crate::io::{load_bitmap, save_bitmap};
pub use crate::ops::{load_binarized, threshold};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use bitmap_assets::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let card = bitmap_assets::testcard::render();
/// save_bitmap(&card, std::path::Path::new("assets/test.bmp"))?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::io::{load_bitmap, save_bitmap};
    pub use crate::ops::{load_binarized, threshold};
    pub use crate::{BINARY_THRESHOLD, DISPLAY_HEIGHT, DISPLAY_WIDTH};
}
