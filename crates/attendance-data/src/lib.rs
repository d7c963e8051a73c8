//! Data layer for the attendance report tool.
//!
//! Responsible for acquiring raw export text, parsing each export into a
//! structured meeting, aggregating meetings into the participant × meeting
//! minutes matrix and running the top-level summary pipeline.

pub mod aggregator;
pub mod parser;
pub mod reader;
pub mod summary;

pub use attendance_core as core;
