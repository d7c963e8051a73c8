//! Plain-text rendering of the attendance summary.
//!
//! Builds a participant × meeting table from the matrix, with minutes rounded
//! to whole numbers and empty cells where a participant contributed no
//! qualifying attendance to a meeting.

use attendance_core::formatting::format_minutes;
use attendance_core::models::AttendanceMatrix;
use unicode_width::UnicodeWidthStr;

// ── SummaryTable ──────────────────────────────────────────────────────────────

/// The rendered tabular form of an [`AttendanceMatrix`].
///
/// One `Participant` leader column followed by one column per meeting id, in
/// input order; one row per participant, lexicographically sorted. This is
/// the representation the export layer serialises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    /// Column headers: `"Participant"` then the meeting ids.
    pub columns: Vec<String>,
    /// One row per participant: key, then per-meeting cell values.
    pub rows: Vec<Vec<String>>,
}

impl SummaryTable {
    /// Build the table from the aggregation result.
    pub fn from_matrix(matrix: &AttendanceMatrix) -> Self {
        let mut columns = Vec::with_capacity(matrix.meeting_ids.len() + 1);
        columns.push("Participant".to_string());
        columns.extend(matrix.meeting_ids.iter().cloned());

        let rows = matrix
            .participants
            .iter()
            .map(|participant| {
                let mut row = Vec::with_capacity(columns.len());
                row.push(participant.clone());
                for meeting_id in &matrix.meeting_ids {
                    let cell = matrix
                        .minutes_for(meeting_id, participant)
                        .map(format_minutes)
                        .unwrap_or_default();
                    row.push(cell);
                }
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Render as aligned plain text, one line per row plus a header rule.
    pub fn render_text(&self) -> String {
        let widths = self.column_widths();

        let mut out = String::new();
        push_row(&mut out, &self.columns, &widths);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_row(&mut out, &rule, &widths);

        for row in &self.rows {
            push_row(&mut out, row, &widths);
        }
        out
    }

    /// Display width of each column: the widest of header and cells.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if cell.width() > widths[i] {
                    widths[i] = cell.width();
                }
            }
        }
        widths
    }
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        // Pad by display width so wide characters stay aligned.
        let pad = widths[i].saturating_sub(cell.width());
        if i < cells.len() - 1 {
            out.push_str(&" ".repeat(pad));
        }
    }
    out.push('\n');
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn matrix() -> AttendanceMatrix {
        let mut minutes = HashMap::new();

        let mut first = HashMap::new();
        first.insert("Alice (a@x.com)".to_string(), 29.5);
        first.insert("Bob".to_string(), 60.0);
        minutes.insert("2024-01-01".to_string(), first);

        let mut second = HashMap::new();
        second.insert("Bob".to_string(), 12.0);
        minutes.insert("2024-01-08".to_string(), second);

        AttendanceMatrix {
            participants: vec!["Alice (a@x.com)".to_string(), "Bob".to_string()],
            meeting_ids: vec!["2024-01-01".to_string(), "2024-01-08".to_string()],
            minutes,
        }
    }

    // ── from_matrix ───────────────────────────────────────────────────────────

    #[test]
    fn test_from_matrix_shape_and_rounding() {
        let table = SummaryTable::from_matrix(&matrix());

        assert_eq!(table.columns, vec!["Participant", "2024-01-01", "2024-01-08"]);
        assert_eq!(table.rows.len(), 2);
        // 29.5 rounds to 30 for display.
        assert_eq!(table.rows[0], vec!["Alice (a@x.com)", "30", ""]);
        assert_eq!(table.rows[1], vec!["Bob", "60", "12"]);
    }

    #[test]
    fn test_from_matrix_empty_cell_for_absent_attendance() {
        let table = SummaryTable::from_matrix(&matrix());
        // Alice has no qualifying minutes in the second meeting.
        assert_eq!(table.rows[0][2], "");
    }

    #[test]
    fn test_from_matrix_duplicate_meeting_columns() {
        let mut m = matrix();
        m.meeting_ids = vec!["2024-01-01".to_string(), "2024-01-01".to_string()];
        let table = SummaryTable::from_matrix(&m);
        assert_eq!(table.columns, vec!["Participant", "2024-01-01", "2024-01-01"]);
        assert_eq!(table.rows[1], vec!["Bob", "60", "60"]);
    }

    #[test]
    fn test_from_matrix_empty() {
        let empty = AttendanceMatrix {
            participants: vec![],
            meeting_ids: vec![],
            minutes: HashMap::new(),
        };
        let table = SummaryTable::from_matrix(&empty);
        assert_eq!(table.columns, vec!["Participant"]);
        assert!(table.rows.is_empty());
    }

    // ── render_text ───────────────────────────────────────────────────────────

    #[test]
    fn test_render_text_contains_header_and_cells() {
        let text = SummaryTable::from_matrix(&matrix()).render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4); // header, rule, two participants
        assert!(lines[0].starts_with("Participant"));
        assert!(lines[0].contains("2024-01-01"));
        assert!(lines[1].starts_with("---"));
        assert!(lines[2].contains("Alice (a@x.com)"));
        assert!(lines[2].contains("30"));
        assert!(lines[3].contains("Bob"));
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let text = SummaryTable::from_matrix(&matrix()).render_text();
        let lines: Vec<&str> = text.lines().collect();
        // The first meeting column starts at the same offset in every line.
        let offset = lines[0].find("2024-01-01").unwrap();
        assert_eq!(lines[2].find("30").unwrap(), offset);
        assert_eq!(lines[3].find("60").unwrap(), offset);
    }
}
