//! Screenshot comparison oracle
//!
//! The pipeline only ever needs a same/different verdict; how two images
//! differ is somebody else's problem. The trait is the seam tests and
//! alternative comparators plug into, `PixelComparator` is the default.

use std::path::Path;

use image::GenericImageView;

use crate::error::{LocshotError, LocshotResult};

/// Decides whether two screenshots render visibly differently.
pub trait ScreenshotComparator {
    /// `Ok(true)` when the two files are visually different, `Ok(false)`
    /// when they are identical. Any failure to produce a verdict is an
    /// error; it must never be folded into either answer.
    fn differs(&self, left: &Path, right: &Path) -> LocshotResult<bool>;
}

/// Exact pixel-equality comparator.
///
/// Byte-identical files short-circuit before any decoding. Otherwise both
/// images are decoded and compared pixel by pixel, so encoder differences
/// (compression level, chunk ordering) do not count as visual differences.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelComparator;

impl PixelComparator {
    pub fn new() -> Self {
        Self
    }
}

fn failure(left: &Path, right: &Path, message: impl std::fmt::Display) -> LocshotError {
    LocshotError::ComparisonFailure {
        left: left.to_path_buf(),
        right: right.to_path_buf(),
        message: message.to_string(),
    }
}

fn read_bytes(path: &Path, left: &Path, right: &Path) -> LocshotResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| failure(left, right, format!("read {}: {e}", path.display())))
}

impl ScreenshotComparator for PixelComparator {
    fn differs(&self, left: &Path, right: &Path) -> LocshotResult<bool> {
        let left_bytes = read_bytes(left, left, right)?;
        let right_bytes = read_bytes(right, left, right)?;
        if left_bytes == right_bytes {
            return Ok(false);
        }

        let left_img = image::load_from_memory(&left_bytes)
            .map_err(|e| failure(left, right, format!("decode {}: {e}", left.display())))?;
        let right_img = image::load_from_memory(&right_bytes)
            .map_err(|e| failure(left, right, format!("decode {}: {e}", right.display())))?;

        if left_img.dimensions() != right_img.dimensions() {
            return Ok(true);
        }
        Ok(left_img.to_rgba8().as_raw() != right_img.to_rgba8().as_raw())
    }
}

/// Comparator with canned verdicts, keyed by the left-hand filename.
///
/// Lets filter and pipeline tests script "identical"/"different" outcomes
/// without fabricating pixel data.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedComparator {
    verdicts: std::collections::HashMap<String, bool>,
    default: bool,
}

#[cfg(test)]
impl ScriptedComparator {
    /// Every comparison reports `differs`.
    pub fn always(differs: bool) -> Self {
        Self {
            verdicts: std::collections::HashMap::new(),
            default: differs,
        }
    }

    /// Override the verdict for one locale filename.
    pub fn with_verdict(mut self, name: &str, differs: bool) -> Self {
        self.verdicts.insert(name.to_string(), differs);
        self
    }
}

#[cfg(test)]
impl ScreenshotComparator for ScriptedComparator {
    fn differs(&self, left: &Path, _right: &Path) -> LocshotResult<bool> {
        let name = left
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        Ok(*self.verdicts.get(name).unwrap_or(&self.default))
    }
}
