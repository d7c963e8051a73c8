//! Record parser: one raw export blob → a structured [`ParsedMeeting`].
//!
//! The export format is comma-separated plain text with a header line.
//! Splitting is positional with no quoting or escaping support; fields
//! containing embedded commas are a known, accepted limitation of the format.

use std::collections::HashMap;

use attendance_core::error::{AttendanceError, Result};
use attendance_core::models::{AttendanceRecord, ParsedMeeting, ReportConfig};
use attendance_core::time_utils::strip_directional_marks;
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse one export file's text into a [`ParsedMeeting`].
///
/// * `raw_text` – the full file content.
/// * `positional_index` – zero-based position of the file in the batch; used
///   for the `"Meeting {n}"` fallback id.
/// * `source_label` – file name used in error messages.
///
/// Fails when the text has no non-empty lines, or when the header line lacks
/// any of the configured required columns. Pure transformation: no I/O, and
/// timestamp cells are carried as raw text, not validated here.
pub fn parse_meeting(
    raw_text: &str,
    positional_index: usize,
    source_label: &str,
    config: &ReportConfig,
) -> Result<ParsedMeeting> {
    let lines: Vec<&str> = raw_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some((header_line, data_lines)) = lines.split_first() else {
        return Err(AttendanceError::EmptyInput {
            source_label: source_label.to_string(),
        });
    };

    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    let missing: Vec<String> = config
        .required_columns
        .iter()
        .filter(|col| !headers.contains(&col.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(AttendanceError::MissingColumns {
            source_label: source_label.to_string(),
            columns: missing,
        });
    }

    // Column-name → index map; a duplicated header keeps its last position.
    let mut col_idx: HashMap<&str, usize> = HashMap::new();
    for (i, header) in headers.iter().enumerate() {
        col_idx.insert(*header, i);
    }

    let records: Vec<AttendanceRecord> = data_lines
        .iter()
        .map(|line| {
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            let field = |name: &str| -> String {
                col_idx
                    .get(name)
                    .and_then(|i| cells.get(*i))
                    .map(|c| c.to_string())
                    .unwrap_or_default()
            };
            AttendanceRecord {
                full_name: field("Full Name"),
                email: field("Email Address"),
                join_time: field("Join Time"),
                leave_time: field("Leave Time"),
                duration_minutes: field("Duration (minutes)"),
                role: field("Role"),
            }
        })
        .collect();

    let meeting_id = derive_meeting_id(&records, positional_index);

    debug!(
        "Parsed {}: {} records, meeting id {}",
        source_label,
        records.len(),
        meeting_id
    );

    Ok(ParsedMeeting {
        meeting_id,
        records,
    })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// The date portion of the first record with a non-empty join time, or a
/// positional `"Meeting {n}"` fallback when no record has one.
///
/// The extraction is textual (the token before the first space); only
/// invisible directional marks are removed so the id renders cleanly.
fn derive_meeting_id(records: &[AttendanceRecord], positional_index: usize) -> String {
    for record in records {
        if !record.join_time.is_empty() {
            if let Some(date) = record.join_time.split(' ').next() {
                return strip_directional_marks(date);
            }
        }
    }
    format!("Meeting {}", positional_index + 1)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
