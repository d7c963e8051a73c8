use chrono::NaiveDateTime;
use tracing::debug;

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Invisible directional mark some exporters prefix timestamps with.
const LEFT_TO_RIGHT_MARK: char = '\u{200E}';

/// Parse an export timestamp such as `"2024-01-01 09:00 AM"`.
///
/// Any left-to-right marks are stripped before parsing. Tries the 12-hour
/// export shape first (with and without seconds), then 24-hour fallbacks.
/// Returns `None` for empty or unrecognised input; the caller decides whether
/// that is fatal.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let cleaned: String = s.chars().filter(|c| *c != LEFT_TO_RIGHT_MARK).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    const FMTS: &[&str] = &[
        "%Y-%m-%d %I:%M %p",
        "%Y-%m-%d %I:%M:%S %p",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in FMTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(cleaned, fmt) {
            return Some(dt);
        }
    }

    debug!("could not parse timestamp \"{}\"", s);
    None
}

/// Strip left-to-right marks from a raw cell without otherwise touching it.
pub fn strip_directional_marks(s: &str) -> String {
    s.chars().filter(|c| *c != LEFT_TO_RIGHT_MARK).collect()
}

/// Signed difference `end - start` in fractional minutes.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 60.0
}

// ── Tests ─────────────────────────────────────────────────────────────────────
