//! Top-level summary pipeline.
//!
//! Parses every acquired source in order, then aggregates the full list once,
//! returning the matrix alongside run metadata. Any fatal error aborts the
//! whole batch with no partial summary.

use attendance_core::error::Result;
use attendance_core::models::{AttendanceMatrix, ReportConfig};
use chrono::Utc;

use crate::aggregator::AttendanceAggregator;
use crate::parser::parse_meeting;
use crate::reader::RawSource;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the summary result.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SummaryMetadata {
    /// ISO-8601 timestamp when this summary was generated.
    pub generated_at: String,
    /// Number of input sources processed.
    pub sources_processed: usize,
    /// Total attendance records across all meetings.
    pub records_parsed: usize,
    /// Number of distinct participants with qualifying attendance.
    pub participants_found: usize,
    /// Wall-clock seconds spent parsing the sources.
    pub parse_time_seconds: f64,
    /// Wall-clock seconds spent aggregating.
    pub aggregate_time_seconds: f64,
}

/// The complete output of [`summarize_sources`].
#[derive(Debug, Clone)]
pub struct SummaryResult {
    /// The participant × meeting minutes matrix.
    pub matrix: AttendanceMatrix,
    /// Metadata about this run.
    pub metadata: SummaryMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full summary pipeline over pre-acquired sources.
///
/// 1. Parse each source into a structured meeting (file order preserved).
/// 2. Aggregate the full list into an [`AttendanceMatrix`].
/// 3. Return the matrix with run metadata.
pub fn summarize_sources(
    sources: &[RawSource],
    config: &ReportConfig,
) -> Result<SummaryResult> {
    // ── Step 1: Parse ─────────────────────────────────────────────────────────
    let parse_start = std::time::Instant::now();
    let mut meetings = Vec::with_capacity(sources.len());
    for (idx, source) in sources.iter().enumerate() {
        meetings.push(parse_meeting(&source.content, idx, &source.label, config)?);
    }
    let parse_time = parse_start.elapsed().as_secs_f64();

    // ── Step 2: Aggregate ─────────────────────────────────────────────────────
    let aggregate_start = std::time::Instant::now();
    let matrix = AttendanceAggregator::aggregate(&meetings, config)?;
    let aggregate_time = aggregate_start.elapsed().as_secs_f64();

    // ── Step 3: Build result ──────────────────────────────────────────────────
    let metadata = SummaryMetadata {
        generated_at: Utc::now().to_rfc3339(),
        sources_processed: sources.len(),
        records_parsed: meetings.iter().map(|m| m.records.len()).sum(),
        participants_found: matrix.participants.len(),
        parse_time_seconds: parse_time,
        aggregate_time_seconds: aggregate_time,
    };

    Ok(SummaryResult { matrix, metadata })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
