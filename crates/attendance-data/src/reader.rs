//! File acquisition for the attendance report tool.
//!
//! Discovers `.csv` exports and reads every input up front. The batch is
//! all-or-nothing: a failure reading any one file aborts the whole run, so
//! partial results are never aggregated.

use std::path::{Path, PathBuf};

use attendance_core::error::{AttendanceError, Result};
use tracing::{debug, warn};

// ── RawSource ─────────────────────────────────────────────────────────────────

/// One input file's raw text plus the label used in error messages.
#[derive(Debug, Clone)]
pub struct RawSource {
    /// File name (or full path when the name is not representable).
    pub label: String,
    /// The file's full text content.
    pub content: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.csv` files recursively under `dir`, sorted by path.
///
/// A missing directory logs a warning and yields an empty list.
pub fn find_csv_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        warn!("Input directory does not exist: {}", dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Read every input file to a string, in order, failing fast.
///
/// The first unreadable file raises [`AttendanceError::FileRead`] carrying
/// its path and nothing from the batch is returned.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<RawSource>> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let content =
            std::fs::read_to_string(path).map_err(|source| AttendanceError::FileRead {
                path: path.clone(),
                source,
            })?;
        sources.push(RawSource {
            label: source_label(path),
            content,
        });
    }

    debug!("Read {} input files", sources.len());
    Ok(sources)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
