use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// locshot - locale screenshot reconciliation tool
#[derive(Parser, Debug)]
#[command(name = "locshot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the config file
    #[arg(long, global = true, default_value = "locshot.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter, archive and index captured screenshots
    Reconcile {
        /// Locales to process (default: every locale found in the captures)
        locales: Vec<String>,

        /// Capture directory (overrides config)
        #[arg(long)]
        captures: Option<PathBuf>,

        /// Archive root (overrides config)
        #[arg(long)]
        archive: Option<PathBuf>,

        /// Manifest output path (overrides config)
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// Rebuild the viewer manifest from the current archive
    Manifest {
        /// Capture directory (overrides config)
        #[arg(long)]
        captures: Option<PathBuf>,

        /// Archive root (overrides config)
        #[arg(long)]
        archive: Option<PathBuf>,

        /// Manifest output path (overrides config)
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// List the locales present in the capture directory
    Locales {
        /// Capture directory (overrides config)
        #[arg(long)]
        captures: Option<PathBuf>,
    },
}
