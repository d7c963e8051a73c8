mod bootstrap;
mod export;
mod render;

use anyhow::Result;
use attendance_core::settings::Settings;
use attendance_data::reader::{find_csv_files, read_sources};
use attendance_data::summary::summarize_sources;
use clap::Parser;
use render::SummaryTable;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("attendance-report v{} starting", env!("CARGO_PKG_VERSION"));

    // Explicit inputs first (meeting order), then any discovered under
    // --input-dir, sorted by path.
    let mut inputs = settings.inputs.clone();
    if let Some(dir) = &settings.input_dir {
        inputs.extend(find_csv_files(dir));
    }
    if inputs.is_empty() {
        anyhow::bail!("no input files: pass meeting CSV exports or --input-dir");
    }

    let config = settings.report_config();

    // Fail-fast batch: a single unreadable or malformed input aborts the run
    // before anything is rendered.
    let sources = read_sources(&inputs)?;
    let summary = summarize_sources(&sources, &config)?;

    tracing::info!(
        "Summarised {} meetings, {} participants",
        summary.matrix.meeting_ids.len(),
        summary.matrix.participants.len()
    );
    tracing::debug!(
        "Parsed {} records from {} sources in {:.3}s; aggregated in {:.3}s",
        summary.metadata.records_parsed,
        summary.metadata.sources_processed,
        summary.metadata.parse_time_seconds,
        summary.metadata.aggregate_time_seconds
    );

    let table = SummaryTable::from_matrix(&summary.matrix);
    if summary.matrix.is_empty() {
        println!("No qualifying attendance found.");
    } else {
        print!("{}", table.render_text());
    }

    if let Some(path) = &settings.output {
        match settings.format.as_str() {
            "json" => export::write_json(&summary.matrix, path)?,
            _ => export::write_workbook(&table, path)?,
        }
        tracing::info!("Summary written to {}", path.display());
    }

    Ok(())
}
