//! Capture filename protocol
//!
//! The capture tool names every screenshot with fixed-position fields:
//!
//! ```text
//! [0:3]   test code   3 characters
//! [3]     kind        1 character
//! [4:-7]  body        variable, may be empty, may embed "-Night"
//! [-7:-5] locale      2 lowercase letters
//! [-5:-4] variant     1 character
//! [-4:]   ".png"      literal extension
//! ```
//!
//! The named-field grammar below replaces raw offset arithmetic while
//! staying byte-compatible with filenames the capture tool already
//! produces. Non-conforming names are [`LocshotError::MalformedFilename`];
//! callers skip those files rather than aborting the run.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{LocshotError, LocshotResult};
use crate::models::{ScreenshotName, EXTENSION};

/// Shortest conforming filename: empty body, every fixed-width field present.
pub const MIN_LEN: usize = 11;

/// Earliest byte offset at which the scenario separator may appear.
const SCENARIO_SEP_OFFSET: usize = 6;

static FILENAME_RE: Lazy<Regex> = Lazy::new(|| {
    // Body is greedy; the fixed-width tail anchors locale and variant, so
    // the decomposition is unique and matches the positional slicing above.
    Regex::new(r"^(?P<test>.{3})(?P<kind>.)(?P<body>.*)(?P<locale>[a-z]{2})(?P<variant>.)\.png$")
        .expect("filename grammar is valid")
});

fn malformed(name: &str, reason: impl Into<String>) -> LocshotError {
    LocshotError::MalformedFilename {
        name: name.to_string(),
        reason: reason.into(),
    }
}

/// Parse a capture filename into its protocol fields.
pub fn parse(name: &str) -> LocshotResult<ScreenshotName> {
    if name.len() < MIN_LEN {
        return Err(malformed(
            name,
            format!("shorter than the {MIN_LEN}-byte protocol minimum"),
        ));
    }
    if !name.ends_with(EXTENSION) {
        return Err(malformed(name, format!("does not end in '{EXTENSION}'")));
    }

    let caps = FILENAME_RE
        .captures(name)
        .ok_or_else(|| malformed(name, "locale field is not two lowercase letters"))?;

    let kind = caps["kind"]
        .chars()
        .next()
        .ok_or_else(|| malformed(name, "empty kind field"))?;
    let variant = caps["variant"]
        .chars()
        .next()
        .ok_or_else(|| malformed(name, "empty variant field"))?;

    Ok(ScreenshotName {
        test_code: caps["test"].to_string(),
        kind,
        body: caps["body"].to_string(),
        locale: caps["locale"].to_string(),
        variant,
    })
}

/// True for strings that look like a locale code (two lowercase letters).
pub fn is_locale_code(s: &str) -> bool {
    s.len() == 2 && s.chars().all(|c| c.is_ascii_lowercase())
}

/// Manifest sort key: everything from the first `'_'` at or after byte
/// offset 6 onward.
///
/// Sorting on this key groups rows by scenario instead of raw lexical
/// filename order. Every conforming filename is expected to contain the
/// separator; its absence is reported as malformed, never as an index
/// panic.
pub fn scenario_key(name: &str) -> LocshotResult<&str> {
    let start = name
        .get(SCENARIO_SEP_OFFSET..)
        .and_then(|tail| tail.find('_'))
        .map(|i| i + SCENARIO_SEP_OFFSET)
        .ok_or_else(|| {
            malformed(
                name,
                format!("no '_' at or after offset {SCENARIO_SEP_OFFSET}"),
            )
        })?;
    Ok(&name[start..])
}
