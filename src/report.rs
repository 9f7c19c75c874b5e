//! Run reporting
//!
//! Human-readable progress on a terminal, JSON lines for CI when `--json`
//! is set. Counts of kept, deleted and skipped files are always surfaced;
//! deleting screenshots silently would make the filter unauditable.

use is_terminal::IsTerminal;
use serde::Serialize;

use crate::pipeline::{PipelineEvent, RunSummary};

/// Renders pipeline progress and summaries to stdout.
pub struct Reporter {
    json: bool,
    verbose: u8,
    glyphs: bool,
}

#[derive(Serialize)]
struct JsonEvent<'a, T: Serialize> {
    event: &'static str,
    #[serde(flatten)]
    data: &'a T,
}

#[derive(Serialize)]
struct ManifestData<'a> {
    rows: usize,
    locales: usize,
    path: &'a str,
}

impl Reporter {
    pub fn new(json: bool, verbose: u8) -> Self {
        Self {
            json,
            verbose,
            glyphs: std::io::stdout().is_terminal(),
        }
    }

    fn ok_mark(&self) -> &'static str {
        if self.glyphs {
            "✓"
        } else {
            "ok"
        }
    }

    fn emit_json<T: Serialize>(&self, event: &'static str, data: &T) {
        if let Ok(line) = serde_json::to_string(&JsonEvent { event, data }) {
            println!("{line}");
        }
    }

    /// Render one pipeline progress event.
    pub fn event(&self, event: &PipelineEvent) {
        match event {
            PipelineEvent::LocaleStarted { locale } => {
                if self.json {
                    #[derive(Serialize)]
                    struct Data<'a> {
                        locale: &'a str,
                    }
                    self.emit_json("locale_started", &Data { locale });
                } else if self.verbose > 0 {
                    println!("Processing locale {locale}...");
                }
            }
            PipelineEvent::LocaleFinished { outcome } => {
                if self.json {
                    self.emit_json("locale_finished", outcome);
                } else {
                    println!(
                        "{} {}: kept {}, deleted {}, archived {}",
                        self.ok_mark(),
                        outcome.locale,
                        outcome.kept,
                        outcome.deleted,
                        outcome.archived
                    );
                }
            }
            PipelineEvent::ManifestWritten {
                rows,
                locales,
                path,
            } => {
                let path = path.display().to_string();
                if self.json {
                    self.emit_json(
                        "manifest_written",
                        &ManifestData {
                            rows: *rows,
                            locales: *locales,
                            path: &path,
                        },
                    );
                } else {
                    println!(
                        "{} manifest: {rows} rows x {locales} locales -> {path}",
                        self.ok_mark()
                    );
                }
            }
        }
    }

    /// Render the end-of-run summary.
    pub fn summary(&self, summary: &RunSummary) {
        if self.json {
            self.emit_json("summary", summary);
            return;
        }
        println!(
            "Done: {} locales reconciled, {} manifest rows, {} files skipped",
            summary.locales.len(),
            summary.manifest_rows,
            summary.skipped_files
        );
        if summary.skipped_files > 0 && self.verbose > 0 {
            println!("(skipped files do not match the capture filename protocol)");
        }
    }

    /// Render a plain list of locale codes, one per line.
    pub fn locales(&self, locales: &[String]) {
        if self.json {
            #[derive(Serialize)]
            struct Data<'a> {
                locales: &'a [String],
            }
            self.emit_json("locales", &Data { locales });
            return;
        }
        for locale in locales {
            println!("{locale}");
        }
    }
}
