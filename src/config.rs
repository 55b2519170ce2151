//! Fixed parameters for the asset tools.
//!
//! The binaries take no arguments: they run on the `Default` values
//! below, which mirror the constants the assets were originally built
//! with. `load_config` exists for library consumers that want to drive
//! the same pipelines from a JSON file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{BINARY_THRESHOLD, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Parameters of the image-to-bitmap converter.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    pub threshold: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("image.png"),
            output: PathBuf::from("assets/test.bmp"),
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            threshold: BINARY_THRESHOLD,
        }
    }
}

/// Parameters of the test-card generator.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TestcardOptions {
    pub output: PathBuf,
}

impl Default for TestcardOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("assets/test.bmp"),
        }
    }
}

/// Parameters of the blank-canvas generator.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BlankOptions {
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
}

impl Default for BlankOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("assets/empty.bmp"),
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        }
    }
}

/// Load any of the option structs from a JSON file.
pub fn load_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
