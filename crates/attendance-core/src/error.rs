use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the attendance report pipeline.
///
/// Every variant is fatal to the current batch: no partial summary is ever
/// produced once one of these is raised. Non-organizer records with missing
/// or unparsable fields are skipped silently and never reach this enum.
#[derive(Error, Debug)]
pub enum AttendanceError {
    /// An input source contained no non-empty lines.
    #[error("File {source_label} is empty.")]
    EmptyInput { source_label: String },

    /// The header line of a source lacks one or more required columns.
    #[error("File {source_label} is missing required columns: {}", columns.join(", "))]
    MissingColumns {
        source_label: String,
        columns: Vec<String>,
    },

    /// A meeting has no record with the organizer role.
    #[error("No organizer found for meeting on {meeting_id}.")]
    MissingOrganizer { meeting_id: String },

    /// The organizer's join or leave timestamp could not be parsed.
    #[error("Invalid organizer times for meeting on {meeting_id}.")]
    InvalidOrganizerTime { meeting_id: String },

    /// A file could not be read from disk; the whole batch is aborted.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A summary could not be serialized for export.
    #[error("Failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the attendance crates.
pub type Result<T> = std::result::Result<T, AttendanceError>;
