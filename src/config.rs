//! Configuration
//!
//! Directory roots default to the capture tool's layout and can be
//! overridden by an optional `locshot.toml` in the working directory.
//! CLI flags override both.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LocshotError, LocshotResult};

/// Default config filename looked up in the working directory.
pub const CONFIG_FILE: &str = "locshot.toml";

/// Capture directory the UI test runner records into.
pub const DEFAULT_CAPTURES_DIR: &str = "tests/uitests/src/test/snapshots/images";

/// Root of the per-locale archive tree.
pub const DEFAULT_ARCHIVE_ROOT: &str = "screenshots";

/// Manifest path the review viewer loads.
pub const DEFAULT_MANIFEST_PATH: &str = "screenshots/html/data.js";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
}

/// Directory roots the pipeline operates on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Where the capture tool leaves raw screenshots.
    pub captures: PathBuf,
    /// Where surviving screenshots are archived per locale.
    pub archive: PathBuf,
    /// Where the generated data module is written.
    pub manifest: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            captures: PathBuf::from(DEFAULT_CAPTURES_DIR),
            archive: PathBuf::from(DEFAULT_ARCHIVE_ROOT),
            manifest: PathBuf::from(DEFAULT_MANIFEST_PATH),
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// A missing file is not an error (defaults apply); an unparsable file
    /// is, so a typo never silently reverts the run to default roots.
    pub fn load(path: &Path) -> LocshotResult<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| LocshotError::io("read", path, e))?;
        toml::from_str(&content).map_err(|e| LocshotError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
