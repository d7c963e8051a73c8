use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column headers every meeting export must carry (order-independent).
pub const DEFAULT_REQUIRED_COLUMNS: [&str; 6] = [
    "Full Name",
    "Email Address",
    "Join Time",
    "Leave Time",
    "Duration (minutes)",
    "Role",
];

/// Minimum clamped duration (minutes) for a record to count towards a total.
pub const DEFAULT_MIN_ATTENDANCE_MINUTES: f64 = 2.0;

/// The role string that marks a meeting's organizer (compared case-insensitively).
pub const ORGANIZER_ROLE: &str = "organizer";

/// One row of a meeting attendance export.
///
/// All fields are the raw trimmed cell values; timestamps stay as text here
/// and are only parsed where they are consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Participant display name. Empty names are skipped during aggregation.
    pub full_name: String,
    /// Participant email address; may be empty.
    #[serde(default)]
    pub email: String,
    /// Raw join timestamp text, e.g. `"2024-01-01 09:00 AM"`.
    #[serde(default)]
    pub join_time: String,
    /// Raw leave timestamp text.
    #[serde(default)]
    pub leave_time: String,
    /// Raw duration column text; carried through but not used for totals.
    #[serde(default)]
    pub duration_minutes: String,
    /// Raw role text; `"organizer"` (any casing) is the distinguished value.
    #[serde(default)]
    pub role: String,
}

impl AttendanceRecord {
    /// The identity string used to match a person across meetings:
    /// `"Name (email)"` when the email is non-empty, else the name alone.
    pub fn participant_key(&self) -> String {
        if self.email.is_empty() {
            self.full_name.clone()
        } else {
            format!("{} ({})", self.full_name, self.email)
        }
    }

    /// Whether this record carries the organizer role.
    pub fn is_organizer(&self) -> bool {
        self.role.eq_ignore_ascii_case(ORGANIZER_ROLE)
    }
}

/// The structured result of parsing one export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMeeting {
    /// Derived meeting label: the date portion of the first parseable-looking
    /// join time, or a positional fallback such as `"Meeting 2"`.
    pub meeting_id: String,
    /// Records in input-file order.
    pub records: Vec<AttendanceRecord>,
}

/// The cross-meeting aggregation result: minutes per participant per meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceMatrix {
    /// Participant keys with at least one qualifying record anywhere,
    /// lexicographically sorted.
    pub participants: Vec<String>,
    /// Meeting ids in input order. Duplicates are preserved, not deduplicated.
    pub meeting_ids: Vec<String>,
    /// Per-meeting totals. Every stored value is at least the
    /// minimum-attendance threshold; sub-threshold contributions are dropped
    /// entirely rather than stored as zero.
    pub minutes: HashMap<String, HashMap<String, f64>>,
}

impl AttendanceMatrix {
    /// Total minutes for `participant` in `meeting_id`, if any qualified.
    pub fn minutes_for(&self, meeting_id: &str, participant: &str) -> Option<f64> {
        self.minutes.get(meeting_id)?.get(participant).copied()
    }

    /// Whether the summary has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Knobs the parser and aggregator close over.
///
/// Explicit configuration rather than hidden module state, so tests can vary
/// the required-column list and the attendance threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Header names that must be present in every export.
    pub required_columns: Vec<String>,
    /// Minimum clamped minutes for a record to count.
    pub min_attendance_minutes: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            required_columns: DEFAULT_REQUIRED_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            min_attendance_minutes: DEFAULT_MIN_ATTENDANCE_MINUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: &str, role: &str) -> AttendanceRecord {
        AttendanceRecord {
            full_name: name.to_string(),
            email: email.to_string(),
            join_time: String::new(),
            leave_time: String::new(),
            duration_minutes: String::new(),
            role: role.to_string(),
        }
    }

    // ── participant_key ───────────────────────────────────────────────────────

    #[test]
    fn test_participant_key_with_email() {
        let rec = record("Alice Jones", "alice@example.com", "Attendee");
        assert_eq!(rec.participant_key(), "Alice Jones (alice@example.com)");
    }

    #[test]
    fn test_participant_key_without_email() {
        let rec = record("Alice Jones", "", "Attendee");
        assert_eq!(rec.participant_key(), "Alice Jones");
    }

    // ── is_organizer ──────────────────────────────────────────────────────────

    #[test]
    fn test_is_organizer_case_insensitive() {
        assert!(record("A", "", "Organizer").is_organizer());
        assert!(record("A", "", "ORGANIZER").is_organizer());
        assert!(record("A", "", "organizer").is_organizer());
        assert!(!record("A", "", "Attendee").is_organizer());
        assert!(!record("A", "", "").is_organizer());
    }

    // ── AttendanceMatrix ──────────────────────────────────────────────────────

    #[test]
    fn test_matrix_minutes_for() {
        let mut minutes = HashMap::new();
        let mut per_meeting = HashMap::new();
        per_meeting.insert("Alice".to_string(), 30.0);
        minutes.insert("2024-01-01".to_string(), per_meeting);

        let matrix = AttendanceMatrix {
            participants: vec!["Alice".to_string()],
            meeting_ids: vec!["2024-01-01".to_string()],
            minutes,
        };

        assert_eq!(matrix.minutes_for("2024-01-01", "Alice"), Some(30.0));
        assert_eq!(matrix.minutes_for("2024-01-01", "Bob"), None);
        assert_eq!(matrix.minutes_for("2024-01-02", "Alice"), None);
        assert!(!matrix.is_empty());
    }

    // ── ReportConfig ──────────────────────────────────────────────────────────

    #[test]
    fn test_report_config_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.required_columns.len(), 6);
        assert!(config.required_columns.iter().any(|c| c == "Role"));
        assert_eq!(config.min_attendance_minutes, 2.0);
    }
}
