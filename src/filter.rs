//! Duplicate filter
//!
//! Deletes locale screenshots that render identically to their English
//! baseline. Deletion is irreversible; the archive step only ever sees
//! survivors.

use std::path::Path;

use crate::compare::ScreenshotComparator;
use crate::discovery::list_filenames;
use crate::error::{LocshotError, LocshotResult};
use crate::models::ScreenshotName;

/// Counters accumulated while filtering one locale.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    /// Locale files kept because they differ from the baseline.
    pub kept: usize,
    /// Locale files deleted as visually identical to the baseline.
    pub deleted: usize,
    /// Files skipped because their names do not conform to the protocol.
    pub skipped: usize,
}

/// Delete every capture of `locale` that the comparator reports as
/// visually identical to its baseline counterpart.
///
/// A locale file without a baseline is fatal: the absence must surface as
/// [`LocshotError::MissingBaseline`], never as either verdict.
pub fn prune_identical(
    captures: &Path,
    locale: &str,
    comparator: &dyn ScreenshotComparator,
) -> LocshotResult<FilterStats> {
    let mut stats = FilterStats::default();

    for name in list_filenames(captures)? {
        let shot = match ScreenshotName::parse(&name) {
            Ok(shot) => shot,
            Err(_) => {
                stats.skipped += 1;
                continue;
            }
        };
        if shot.locale != locale {
            continue;
        }

        let file = captures.join(&name);
        let baseline = captures.join(shot.baseline_counterpart().encode());
        if !baseline.exists() {
            return Err(LocshotError::MissingBaseline {
                locale_file: file,
                baseline,
            });
        }

        if comparator.differs(&file, &baseline)? {
            stats.kept += 1;
        } else {
            std::fs::remove_file(&file).map_err(|e| LocshotError::io("delete", &file, e))?;
            stats.deleted += 1;
        }
    }

    Ok(stats)
}
