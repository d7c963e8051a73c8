/// Format a fractional minute total as a whole-minute cell value.
///
/// Totals stay fractional inside the matrix; rounding to whole minutes is a
/// presentation concern and happens here, at the table edge.
///
/// # Examples
///
/// ```
/// use attendance_core::formatting::format_minutes;
///
/// assert_eq!(format_minutes(30.0), "30");
/// assert_eq!(format_minutes(29.5), "30");
/// assert_eq!(format_minutes(29.4), "29");
/// ```
pub fn format_minutes(minutes: f64) -> String {
    format!("{}", minutes.round() as i64)
}
