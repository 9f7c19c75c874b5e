//! Presence manifest
//!
//! The review viewer loads a generated `data.js` module describing, for
//! every Light-theme baseline screenshot, which locales still have a
//! visually distinct rendering in the archive. The manifest is derived
//! entirely from on-disk state at build time and regenerated wholesale on
//! each run; row and locale order come from sorting, never from directory
//! enumeration order.

use std::io::Write;
use std::path::Path;

use crate::discovery::list_filenames;
use crate::error::{LocshotError, LocshotResult};
use crate::models::{ScreenshotName, Theme, BASELINE_LOCALE};
use crate::protocol;

/// Marker line opening the generated data module.
pub const GENERATED_MARKER: &str = "// Generated file, do not edit";

/// One manifest row: a baseline screenshot and its per-locale presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Baseline filename with the extension removed.
    pub label: String,
    /// One flag per non-baseline locale, aligned with the locale list.
    /// The baseline's own flag is implicit and always true.
    pub presence: Vec<bool>,
}

/// The presence matrix consumed by the review viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Baseline first, then archived locales sorted alphabetically.
    pub locales: Vec<String>,
    /// Directory serving each locale's screenshots, aligned with `locales`.
    pub roots: Vec<String>,
    /// Rows sorted by scenario key, then filename.
    pub rows: Vec<Row>,
}

/// Result of a manifest build, with scan observability.
#[derive(Debug, Clone)]
pub struct ManifestBuild {
    pub manifest: Manifest,
    /// Capture files skipped as non-conforming.
    pub skipped: usize,
}

/// Locale subdirectories of the archive root, sorted alphabetically.
///
/// A missing root means no locale has been archived yet; that is an empty
/// list, not an error.
pub fn archived_locales(archive_root: &Path) -> LocshotResult<Vec<String>> {
    if !archive_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut locales = Vec::new();
    let entries =
        std::fs::read_dir(archive_root).map_err(|e| LocshotError::io("list", archive_root, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| LocshotError::io("list", archive_root, e))?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if protocol::is_locale_code(name) {
                locales.push(name.to_string());
            }
        }
    }
    locales.sort();
    Ok(locales)
}

/// Build the manifest from the capture directory and the archive root.
///
/// Both roots are explicit inputs; the builder reads the archive exactly
/// once and holds no other state.
pub fn build(captures: &Path, archive_root: &Path) -> LocshotResult<ManifestBuild> {
    let archived = archived_locales(archive_root)?;

    let mut skipped = 0;
    let mut entries: Vec<(String, String, ScreenshotName)> = Vec::new();
    for name in list_filenames(captures)? {
        let shot = match ScreenshotName::parse(&name) {
            Ok(shot) => shot,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if shot.theme() == Theme::Night {
            continue;
        }
        // The separator is expected in every conforming name; names without
        // one are skipped like any other malformed file.
        let key = match protocol::scenario_key(&name) {
            Ok(key) => key.to_string(),
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        entries.push((key, name, shot));
    }
    // Secondary sort on the filename keeps tied rows in a fixed order
    // regardless of how the directory happened to be enumerated.
    entries.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));

    let mut rows = Vec::with_capacity(entries.len());
    for (_, _, shot) in &entries {
        let presence = archived
            .iter()
            .map(|locale| {
                let translated = shot.translated_counterpart(locale).encode();
                archive_root.join(locale).join(translated).exists()
            })
            .collect();
        rows.push(Row {
            label: shot.label(),
            presence,
        });
    }

    let mut locales = Vec::with_capacity(archived.len() + 1);
    locales.push(BASELINE_LOCALE.to_string());
    let mut roots = Vec::with_capacity(archived.len() + 1);
    roots.push(viewer_path(captures));
    for locale in &archived {
        locales.push(locale.clone());
        roots.push(viewer_path(&archive_root.join(locale)));
    }

    Ok(ManifestBuild {
        manifest: Manifest {
            locales,
            roots,
            rows,
        },
        skipped,
    })
}

/// Path string the viewer resolves relative to its own location.
fn viewer_path(path: &Path) -> String {
    let s = path.display().to_string();
    if s.starts_with('/') || s.starts_with("./") {
        s
    } else {
        format!("./{s}")
    }
}

impl Manifest {
    /// Render the viewer data module.
    ///
    /// The layout is fixed by the viewer: row 0 is the locale list, row 1
    /// the per-locale directory, every following row a label plus `1`/`0`
    /// presence flags, one trailing comma after each item.
    pub fn to_data_js(&self) -> String {
        let mut out = String::new();
        out.push_str(GENERATED_MARKER);
        out.push('\n');
        out.push_str("export const screenshots = [\n");
        push_string_row(&mut out, &self.locales);
        push_string_row(&mut out, &self.roots);
        for row in &self.rows {
            out.push_str("[\"");
            out.push_str(&row.label);
            out.push_str("\",");
            for &present in &row.presence {
                out.push_str(if present { "1," } else { "0," });
            }
            out.push_str("],\n");
        }
        out.push_str("];\n");
        out
    }

    /// Write the data module atomically (tempfile + rename), creating the
    /// parent directory and overwriting any previous manifest in full.
    pub fn write(&self, path: &Path) -> LocshotResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).map_err(|e| LocshotError::io("create", parent, e))?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| LocshotError::io("create", path, e))?;
        tmp.write_all(self.to_data_js().as_bytes())
            .map_err(|e| LocshotError::io("write", path, e))?;
        tmp.persist(path)
            .map_err(|e| LocshotError::io("write", path, e.error))?;
        Ok(())
    }
}

fn push_string_row(out: &mut String, items: &[String]) {
    out.push('[');
    for item in items {
        out.push('"');
        out.push_str(item);
        out.push_str("\",");
    }
    out.push_str("],\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), b"png").unwrap();
    }

    fn seed_archive(root: &Path, locale: &str, names: &[&str]) {
        let dir = root.join(locale);
        fs::create_dir_all(&dir).unwrap();
        for name in names {
            touch(&dir, name);
        }
    }

    #[test]
    fn test_archived_locales_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("fr")).unwrap();
        fs::create_dir_all(root.join("de")).unwrap();
        fs::create_dir_all(root.join("html")).unwrap();
        fs::write(root.join("stray.txt"), b"x").unwrap();

        assert_eq!(archived_locales(root).unwrap(), vec!["de", "fr"]);
    }

    #[test]
    fn test_archived_locales_missing_root_is_empty() {
        assert!(archived_locales(Path::new("/nonexistent/screenshots"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_build_presence_matrix() {
        let dir = tempdir().unwrap();
        let captures = dir.path().join("images");
        let root = dir.path().join("screenshots");
        touch(&captures, "abcSfoo_01en1.png");
        touch(&captures, "abcSbar_02en1.png");
        seed_archive(&root, "de", &["abcTfoo_01de1.png"]);
        seed_archive(&root, "fr", &[]);

        let built = build(&captures, &root).unwrap();
        let manifest = built.manifest;

        assert_eq!(manifest.locales, vec!["en", "de", "fr"]);
        assert_eq!(manifest.rows.len(), 2);
        for row in &manifest.rows {
            assert_eq!(row.presence.len(), manifest.locales.len() - 1);
        }

        // Rows sorted by scenario key: "_01en1.png" < "_02en1.png"
        assert_eq!(manifest.rows[0].label, "abcSfoo_01en1");
        assert_eq!(manifest.rows[0].presence, vec![true, false]);
        assert_eq!(manifest.rows[1].label, "abcSbar_02en1");
        assert_eq!(manifest.rows[1].presence, vec![false, false]);
    }

    #[test]
    fn test_build_excludes_night_rows() {
        let dir = tempdir().unwrap();
        let captures = dir.path().join("images");
        let root = dir.path().join("screenshots");
        touch(&captures, "abcSfoo_01en1.png");
        touch(&captures, "abcSfoo-Night_01en1.png");
        seed_archive(&root, "de", &[]);

        let built = build(&captures, &root).unwrap();

        assert_eq!(built.manifest.rows.len(), 1);
        assert_eq!(built.manifest.rows[0].label, "abcSfoo_01en1");
    }

    #[test]
    fn test_build_counts_skipped_files() {
        let dir = tempdir().unwrap();
        let captures = dir.path().join("images");
        let root = dir.path().join("screenshots");
        touch(&captures, "abcSfoo_01en1.png");
        touch(&captures, "thumbs.db");

        let built = build(&captures, &root).unwrap();
        assert_eq!(built.skipped, 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        let dir = tempdir().unwrap();
        let captures = dir.path().join("images");
        let root = dir.path().join("screenshots");
        // Two scenarios whose lexical and scenario orders disagree
        touch(&captures, "zzzSaaa_01en1.png");
        touch(&captures, "aaaSzzz_02en1.png");
        seed_archive(&root, "de", &[]);

        let first = build(&captures, &root).unwrap().manifest;
        let second = build(&captures, &root).unwrap().manifest;

        assert_eq!(first, second);
        assert_eq!(first.to_data_js(), second.to_data_js());
        // Scenario key order, not filename order
        assert_eq!(first.rows[0].label, "zzzSaaa_01en1");
    }

    #[test]
    fn test_to_data_js_format() {
        let manifest = Manifest {
            locales: vec!["en".into(), "de".into()],
            roots: vec!["./images".into(), "./screenshots/de".into()],
            rows: vec![
                Row {
                    label: "abcSfoo_01en1".into(),
                    presence: vec![true],
                },
                Row {
                    label: "abcSbar_02en1".into(),
                    presence: vec![false],
                },
            ],
        };

        let expected = "\
// Generated file, do not edit
export const screenshots = [
[\"en\",\"de\",],
[\"./images\",\"./screenshots/de\",],
[\"abcSfoo_01en1\",1,],
[\"abcSbar_02en1\",0,],
];
";
        assert_eq!(manifest.to_data_js(), expected);
    }

    #[test]
    fn test_write_creates_parent_and_marker() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("screenshots/html/data.js");
        let manifest = Manifest {
            locales: vec!["en".into()],
            roots: vec!["./images".into()],
            rows: Vec::new(),
        };

        manifest.write(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(GENERATED_MARKER));
        assert!(content.ends_with("];\n"));
    }

    #[test]
    fn test_write_overwrites_previous_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.js");
        fs::write(&path, "stale contents").unwrap();

        let manifest = Manifest {
            locales: vec!["en".into()],
            roots: vec!["./images".into()],
            rows: Vec::new(),
        };
        manifest.write(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.starts_with(GENERATED_MARKER));
    }
}
