use clap::Parser;
use std::path::PathBuf;

use crate::models::ReportConfig;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Cross-meeting attendance summary from per-meeting CSV exports
#[derive(Parser, Debug, Clone)]
#[command(
    name = "attendance-report",
    about = "Summarise minutes attended per participant across meeting CSV exports",
    version
)]
pub struct Settings {
    /// Meeting export files, in meeting order
    pub inputs: Vec<PathBuf>,

    /// Directory to scan recursively for .csv exports (appended after
    /// explicit inputs, sorted by path)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Write the summary to this file as well as stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output file format
    #[arg(long, default_value = "csv", value_parser = ["csv", "json"])]
    pub format: String,

    /// Minimum clamped minutes for a record to count
    #[arg(long, default_value = "2.0")]
    pub min_minutes: f64,

    /// Logging level
    #[arg(
        long,
        default_value = "INFO",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"],
        ignore_case = true
    )]
    pub log_level: String,

    /// Log file path (stderr when unset)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Build the parser/aggregator configuration from the CLI flags.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            min_attendance_minutes: self.min_minutes,
            ..ReportConfig::default()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
