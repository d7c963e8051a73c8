//! Summary export: CSV workbook and JSON.
//!
//! The workbook is a faithful transcription of the rendered table, written
//! atomically (temp file then rename) so a failed run never leaves a torn
//! output file behind.

use std::path::Path;

use attendance_core::error::Result;
use attendance_core::models::AttendanceMatrix;
use tracing::debug;

use crate::render::SummaryTable;

// ── Public API ────────────────────────────────────────────────────────────────

/// Write the rendered table to `path` as a comma-separated workbook file.
///
/// Cells containing delimiters, quotes or newlines are quoted so the
/// transcription survives the round trip into a spreadsheet application.
pub fn write_workbook(table: &SummaryTable, path: &Path) -> Result<()> {
    let mut out = String::new();
    push_csv_row(&mut out, &table.columns);
    for row in &table.rows {
        push_csv_row(&mut out, row);
    }

    write_atomic(path, out.as_bytes())?;
    debug!("Wrote workbook with {} rows to {}", table.rows.len(), path.display());
    Ok(())
}

/// Write the full matrix to `path` as pretty-printed JSON.
pub fn write_json(matrix: &AttendanceMatrix, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(matrix)?;
    write_atomic(path, json.as_bytes())?;
    Ok(())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn push_csv_row(out: &mut String, cells: &[String]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&csv_field(cell));
    }
    out.push('\n');
}

/// Quote a cell when it contains a delimiter, quote or newline.
fn csv_field(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Write to a temp file next to `path`, then rename into place.
fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
