//! Per-locale archive
//!
//! Survivors of the duplicate filter move out of the capture directory
//! into `archive_root/<locale>/`. The move replaces any previous archive
//! for that locale wholesale, so a re-run can never leave stale entries
//! behind and the filter + archive pair stays idempotent.

use std::path::Path;

use crate::discovery::list_filenames;
use crate::error::{LocshotError, LocshotResult};
use crate::models::ScreenshotName;

/// Counters accumulated while archiving one locale.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveStats {
    /// Files moved into the per-locale directory.
    pub moved: usize,
    /// Files skipped because their names do not conform to the protocol.
    pub skipped: usize,
}

/// Move every remaining capture of `locale` into `archive_root/<locale>/`.
///
/// The target directory is wiped first and recreated even when no files
/// survive; an empty archive is a valid state meaning "this locale renders
/// nothing differently".
pub fn archive_locale(
    captures: &Path,
    archive_root: &Path,
    locale: &str,
) -> LocshotResult<ArchiveStats> {
    let target = archive_root.join(locale);
    if target.exists() {
        std::fs::remove_dir_all(&target).map_err(|e| LocshotError::io("wipe", &target, e))?;
    }
    std::fs::create_dir_all(&target).map_err(|e| LocshotError::io("create", &target, e))?;

    let mut stats = ArchiveStats::default();
    for name in list_filenames(captures)? {
        match ScreenshotName::parse(&name) {
            Ok(shot) if shot.locale == locale => {
                let from = captures.join(&name);
                let to = target.join(&name);
                std::fs::rename(&from, &to).map_err(|e| LocshotError::io("move", &from, e))?;
                stats.moved += 1;
            }
            Ok(_) => {}
            Err(_) => stats.skipped += 1,
        }
    }

    Ok(stats)
}
