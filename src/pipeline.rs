//! Sequential reconciliation pipeline
//!
//! Locales are processed one at a time, filter before archive, with the
//! filesystem itself carrying state between steps. The manifest is built
//! once, after the last locale, and only if every locale completed; a
//! fatal error leaves already-archived locales valid and writes nothing.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::archive;
use crate::compare::ScreenshotComparator;
use crate::discovery;
use crate::error::LocshotResult;
use crate::filter;
use crate::manifest;

/// Per-locale outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleOutcome {
    pub locale: String,
    /// Files kept because they differ from the baseline.
    pub kept: usize,
    /// Files deleted as visually identical to the baseline.
    pub deleted: usize,
    /// Files moved into the per-locale archive.
    pub archived: usize,
}

/// Summary of a full reconciliation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub locales: Vec<LocaleOutcome>,
    /// Non-conforming capture files ignored by the scans.
    pub skipped_files: usize,
    pub manifest_rows: usize,
    pub manifest_locales: usize,
}

/// Progress events emitted while a run advances.
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    LocaleStarted { locale: String },
    LocaleFinished { outcome: LocaleOutcome },
    ManifestWritten { rows: usize, locales: usize, path: PathBuf },
}

/// The filter, archive and manifest steps over explicit directory roots.
pub struct ReconcilePipeline<'a> {
    captures: PathBuf,
    archive_root: PathBuf,
    manifest_path: PathBuf,
    comparator: &'a dyn ScreenshotComparator,
}

impl<'a> ReconcilePipeline<'a> {
    pub fn new(
        captures: impl Into<PathBuf>,
        archive_root: impl Into<PathBuf>,
        manifest_path: impl Into<PathBuf>,
        comparator: &'a dyn ScreenshotComparator,
    ) -> Self {
        Self {
            captures: captures.into(),
            archive_root: archive_root.into(),
            manifest_path: manifest_path.into(),
            comparator,
        }
    }

    pub fn captures(&self) -> &Path {
        &self.captures
    }

    /// Run the pipeline. An empty `requested` list means every locale
    /// discovered in the capture directory.
    pub fn run(&self, requested: &[String]) -> LocshotResult<RunSummary> {
        self.run_with(requested, |_| {})
    }

    /// Like [`run`](Self::run), emitting a [`PipelineEvent`] at each step.
    pub fn run_with<F>(&self, requested: &[String], mut observe: F) -> LocshotResult<RunSummary>
    where
        F: FnMut(PipelineEvent),
    {
        let discovered = discovery::discover_locales(&self.captures)?;
        let mut locales: Vec<String> = if requested.is_empty() {
            discovered.locales.into_iter().collect()
        } else {
            requested.to_vec()
        };
        // Discovery is unordered; processing order is fixed here so runs
        // log identically. Outcomes do not depend on it.
        locales.sort();
        locales.dedup();

        let mut summary = RunSummary {
            skipped_files: discovered.skipped,
            ..RunSummary::default()
        };

        for locale in &locales {
            observe(PipelineEvent::LocaleStarted {
                locale: locale.clone(),
            });
            let filtered = filter::prune_identical(&self.captures, locale, self.comparator)?;
            let archived = archive::archive_locale(&self.captures, &self.archive_root, locale)?;
            let outcome = LocaleOutcome {
                locale: locale.clone(),
                kept: filtered.kept,
                deleted: filtered.deleted,
                archived: archived.moved,
            };
            observe(PipelineEvent::LocaleFinished {
                outcome: outcome.clone(),
            });
            summary.locales.push(outcome);
        }

        let built = manifest::build(&self.captures, &self.archive_root)?;
        built.manifest.write(&self.manifest_path)?;
        summary.manifest_rows = built.manifest.rows.len();
        summary.manifest_locales = built.manifest.locales.len();
        observe(PipelineEvent::ManifestWritten {
            rows: summary.manifest_rows,
            locales: summary.manifest_locales,
            path: self.manifest_path.clone(),
        });

        Ok(summary)
    }
}
