use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "depwatch")]
#[command(about = "Tracks vehicle depreciation listings as daily snapshots")]
#[command(version)]
pub struct Cli {
    /// Override the history root directory
    #[arg(long, global = true)]
    pub history_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest listings, aggregate, and save today's snapshot
    Collect(CollectArgs),

    /// Display a snapshot or the history listing
    Report(ReportArgs),

    /// Compare two snapshots by date
    Diff(DiffArgs),

    /// Export a snapshot as CSV, JSON, or an Excel workbook
    Export(ExportArgs),

    /// Remove snapshots past the retention window
    Prune(PruneArgs),
}

#[derive(Parser)]
pub struct CollectArgs {
    /// CSV file of raw listing rows (category,vehicle,year,depreciation);
    /// falls back to the built-in sample dataset on failure
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Date key to save under (defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Force the built-in sample dataset
    #[arg(long, default_value_t = false)]
    pub sample: bool,

    /// Output as JSON instead of table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show detailed output including diagnostics
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Show a specific date (defaults to the latest snapshot)
    #[arg(long)]
    pub date: Option<String>,

    /// List history dates instead of a single snapshot
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Maximum dates to list
    #[arg(long, default_value_t = 30)]
    pub limit: usize,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct DiffArgs {
    /// Compare the two most recent dates (default behavior)
    #[arg(long, default_value_t = true)]
    pub last: bool,

    /// Starting date for comparison
    #[arg(long)]
    pub from: Option<String>,

    /// Ending date for comparison
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Export format
    #[arg(long, value_enum)]
    pub format: ExportFormat,

    /// Date to export (defaults to the latest snapshot)
    #[arg(long)]
    pub date: Option<String>,

    /// Write to a file instead of stdout (required for xlsx)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct PruneArgs {
    /// Retention window ("365d", "26w"); overrides the config file
    #[arg(long)]
    pub keep: Option<String>,

    /// Show what would be removed without deleting anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
