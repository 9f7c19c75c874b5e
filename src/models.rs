//! Core data model for locshot
//!
//! A capture filename packs the whole identity of a screenshot: test code,
//! capture kind, scenario body, locale and variant. `ScreenshotName` is the
//! parsed form; encoding it reproduces the filename byte for byte, so the
//! codec is a bijection over conforming filenames.

use crate::error::LocshotResult;
use crate::protocol;

/// The distinguished baseline locale every other locale is compared against.
pub const BASELINE_LOCALE: &str = "en";

/// Capture kind of baseline-style screenshots.
pub const BASELINE_KIND: char = 'S';

/// Capture kind of translated-style screenshots.
pub const TRANSLATED_KIND: char = 'T';

/// Filename extension of every capture.
pub const EXTENSION: &str = ".png";

/// Theme marker embedded in the body of dark-mode captures.
pub const NIGHT_MARKER: &str = "-Night";

/// UI theme a screenshot was captured under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Night,
}

/// A capture filename, parsed into its protocol fields.
///
/// Two names with equal `test_code`/`body`/`variant` represent the same UI
/// moment rendered in different locales (or capture kinds).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScreenshotName {
    /// 3-character test-suite identifier
    pub test_code: String,
    /// Single character distinguishing baseline-style from translated-style captures
    pub kind: char,
    /// Variable-length scenario descriptor; may embed the `-Night` theme marker
    pub body: String,
    /// 2-letter locale code
    pub locale: String,
    /// Single-character variant index
    pub variant: char,
}

impl ScreenshotName {
    /// Parse a capture filename. See [`protocol`] for the grammar.
    pub fn parse(name: &str) -> LocshotResult<Self> {
        protocol::parse(name)
    }

    /// Reconstruct the filename these fields were parsed from.
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}{}{}{}",
            self.test_code, self.kind, self.body, self.locale, self.variant, EXTENSION
        )
    }

    /// Theme is carried inside the body rather than as a separate field.
    pub fn theme(&self) -> Theme {
        if self.body.contains(NIGHT_MARKER) {
            Theme::Night
        } else {
            Theme::Light
        }
    }

    pub fn is_baseline(&self) -> bool {
        self.locale == BASELINE_LOCALE
    }

    /// Name of the baseline capture this screenshot is compared against:
    /// same test code, body and variant, baseline kind, baseline locale.
    pub fn baseline_counterpart(&self) -> ScreenshotName {
        ScreenshotName {
            kind: BASELINE_KIND,
            locale: BASELINE_LOCALE.to_string(),
            ..self.clone()
        }
    }

    /// Name the archived translation of this capture has in `locale`.
    pub fn translated_counterpart(&self, locale: &str) -> ScreenshotName {
        ScreenshotName {
            kind: TRANSLATED_KIND,
            locale: locale.to_string(),
            ..self.clone()
        }
    }

    /// Manifest row label: the filename with its extension removed.
    pub fn label(&self) -> String {
        let name = self.encode();
        name.strip_suffix(EXTENSION).unwrap_or(&name).to_string()
    }
}
