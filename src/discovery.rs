//! Locale discovery
//!
//! Locales are discovered from captured filenames, never configured: the
//! set of distinct locale codes seen in the capture directory, minus the
//! baseline. The result is a set on purpose; callers must not rely on any
//! iteration order from this step.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{LocshotError, LocshotResult};
use crate::models::{ScreenshotName, BASELINE_LOCALE};

/// Outcome of a capture-directory scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiscoveredLocales {
    /// Distinct locale codes present, baseline excluded. Unordered.
    pub locales: HashSet<String>,
    /// Files whose names do not conform to the protocol.
    pub skipped: usize,
}

/// Scan `captures` and collect every non-baseline locale present.
///
/// Read-only; non-conforming filenames are skipped and counted.
pub fn discover_locales(captures: &Path) -> LocshotResult<DiscoveredLocales> {
    let mut found = DiscoveredLocales::default();
    for name in list_filenames(captures)? {
        match ScreenshotName::parse(&name) {
            Ok(shot) if !shot.is_baseline() => {
                found.locales.insert(shot.locale);
            }
            Ok(_) => {}
            Err(_) => found.skipped += 1,
        }
    }
    Ok(found)
}

/// Flat, non-recursive listing of the filenames in `dir`, sorted so every
/// scan over the capture directory walks files in a stable order.
pub(crate) fn list_filenames(dir: &Path) -> LocshotResult<Vec<String>> {
    if !dir.is_dir() {
        return Err(LocshotError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| LocshotError::io("list", dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| LocshotError::io("list", dir, e))?;
        if entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}
