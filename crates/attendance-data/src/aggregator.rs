//! Attendance aggregation across meetings.
//!
//! Clamps each attendee's presence interval to the organizer's session
//! window, sums qualifying intervals per participant per meeting and builds
//! the cross-meeting [`AttendanceMatrix`].

use std::collections::{BTreeSet, HashMap};

use attendance_core::error::{AttendanceError, Result};
use attendance_core::models::{AttendanceMatrix, ParsedMeeting, ReportConfig};
use attendance_core::time_utils::{minutes_between, parse_timestamp};
use tracing::debug;

// ── AttendanceAggregator ──────────────────────────────────────────────────────

/// Stateless helper that turns parsed meetings into the summary matrix.
pub struct AttendanceAggregator;

impl AttendanceAggregator {
    /// Aggregate `meetings` into a participant × meeting minutes matrix.
    ///
    /// Each meeting is processed independently. The organizer window is
    /// load-bearing: a meeting with no organizer record, or whose first
    /// organizer record has unparsable join/leave times, aborts the whole
    /// batch. Individual attendee rows with missing or unparsable fields are
    /// skipped silently instead; this two-tier policy is deliberate.
    ///
    /// Meeting ids keep input order, duplicates included. Participants are
    /// sorted lexicographically. Totals stay fractional; rounding is the
    /// presentation layer's job.
    pub fn aggregate(
        meetings: &[ParsedMeeting],
        config: &ReportConfig,
    ) -> Result<AttendanceMatrix> {
        let mut participants: BTreeSet<String> = BTreeSet::new();
        let mut meeting_ids: Vec<String> = Vec::with_capacity(meetings.len());
        let mut minutes: HashMap<String, HashMap<String, f64>> = HashMap::new();

        for meeting in meetings {
            meeting_ids.push(meeting.meeting_id.clone());

            // First organizer record in input order wins.
            let organizer = meeting
                .records
                .iter()
                .find(|r| r.is_organizer())
                .ok_or_else(|| AttendanceError::MissingOrganizer {
                    meeting_id: meeting.meeting_id.clone(),
                })?;

            let (org_join, org_leave) = match (
                parse_timestamp(&organizer.join_time),
                parse_timestamp(&organizer.leave_time),
            ) {
                (Some(join), Some(leave)) => (join, leave),
                _ => {
                    return Err(AttendanceError::InvalidOrganizerTime {
                        meeting_id: meeting.meeting_id.clone(),
                    })
                }
            };

            let mut totals: HashMap<String, f64> = HashMap::new();

            for record in &meeting.records {
                if record.full_name.is_empty()
                    || record.join_time.is_empty()
                    || record.leave_time.is_empty()
                {
                    continue;
                }
                if record.is_organizer() {
                    continue;
                }

                // Lenient tier: unparsable attendee timestamps drop the row.
                let (Some(join), Some(leave)) = (
                    parse_timestamp(&record.join_time),
                    parse_timestamp(&record.leave_time),
                ) else {
                    debug!(
                        "Skipping record for {} in {}: unparsable timestamps",
                        record.full_name, meeting.meeting_id
                    );
                    continue;
                };

                // Clamp to the organizer window; inverted or out-of-window
                // intervals floor to zero.
                let effective_join = join.max(org_join);
                let effective_leave = leave.min(org_leave);
                let duration = minutes_between(effective_join, effective_leave).max(0.0);

                if duration >= config.min_attendance_minutes {
                    let key = record.participant_key();
                    participants.insert(key.clone());
                    *totals.entry(key).or_default() += duration;
                }
            }

            minutes.insert(meeting.meeting_id.clone(), totals);
        }

        Ok(AttendanceMatrix {
            participants: participants.into_iter().collect(),
            meeting_ids,
            minutes,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
