//! Core domain layer for the attendance report tool.
//!
//! Holds the data model (attendance records, parsed meetings, the summary
//! matrix), the error taxonomy, shared timestamp parsing, display formatting
//! helpers and the CLI settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
