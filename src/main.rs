//! locshot CLI - locale screenshot reconciliation tool
//!
//! Usage: locshot <COMMAND>
//!
//! Commands:
//!   reconcile  Filter, archive and index captured screenshots
//!   manifest   Rebuild the viewer manifest from the current archive
//!   locales    List the locales present in the capture directory

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use locshot::compare::PixelComparator;
use locshot::config::Config;
use locshot::pipeline::ReconcilePipeline;
use locshot::report::Reporter;
use locshot::{discovery, manifest};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let reporter = Reporter::new(cli.json, cli.verbose);
    let config = Config::load(&cli.config)?;

    match cli.command {
        cli::Commands::Reconcile {
            locales,
            captures,
            archive,
            manifest,
        } => {
            let paths = resolve_paths(&config, captures, archive, manifest);
            cmd_reconcile(&paths, &locales, &reporter)
        }
        cli::Commands::Manifest {
            captures,
            archive,
            manifest,
        } => {
            let paths = resolve_paths(&config, captures, archive, manifest);
            cmd_manifest(&paths, &reporter)
        }
        cli::Commands::Locales { captures } => {
            let captures = captures.unwrap_or_else(|| config.paths.captures.clone());
            cmd_locales(&captures, &reporter)
        }
    }
}

struct ResolvedPaths {
    captures: PathBuf,
    archive: PathBuf,
    manifest: PathBuf,
}

fn resolve_paths(
    config: &Config,
    captures: Option<PathBuf>,
    archive: Option<PathBuf>,
    manifest: Option<PathBuf>,
) -> ResolvedPaths {
    ResolvedPaths {
        captures: captures.unwrap_or_else(|| config.paths.captures.clone()),
        archive: archive.unwrap_or_else(|| config.paths.archive.clone()),
        manifest: manifest.unwrap_or_else(|| config.paths.manifest.clone()),
    }
}

fn cmd_reconcile(paths: &ResolvedPaths, locales: &[String], reporter: &Reporter) -> Result<()> {
    let comparator = PixelComparator::new();
    let pipeline = ReconcilePipeline::new(
        &paths.captures,
        &paths.archive,
        &paths.manifest,
        &comparator,
    );
    let summary = pipeline.run_with(locales, |event| reporter.event(&event))?;
    reporter.summary(&summary);
    Ok(())
}

fn cmd_manifest(paths: &ResolvedPaths, reporter: &Reporter) -> Result<()> {
    let built = manifest::build(&paths.captures, &paths.archive)?;
    built.manifest.write(&paths.manifest)?;
    reporter.event(&locshot::pipeline::PipelineEvent::ManifestWritten {
        rows: built.manifest.rows.len(),
        locales: built.manifest.locales.len(),
        path: paths.manifest.clone(),
    });
    Ok(())
}

fn cmd_locales(captures: &PathBuf, reporter: &Reporter) -> Result<()> {
    let found = discovery::discover_locales(captures)?;
    let mut locales: Vec<String> = found.locales.into_iter().collect();
    locales.sort();
    reporter.locales(&locales);
    Ok(())
}
