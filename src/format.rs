// src/format.rs
// Display helpers shared by the page views. All pure, so they are where the
// view behaviour gets tested.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const SCORE_PLACEHOLDER: &str = "-";
pub const MAX_ACHIEVEMENTS: usize = 3;

/// A missing score is a dash; a real 0 stays "0".
pub fn score_label(score: Option<i32>) -> String {
    match score {
        Some(s) => s.to_string(),
        None => SCORE_PLACEHOLDER.to_string(),
    }
}

pub fn top_achievements(achievements: &[String]) -> &[String] {
    &achievements[..achievements.len().min(MAX_ACHIEVEMENTS)]
}

pub fn counter(value: Option<u64>) -> String {
    value.unwrap_or(0).to_string()
}

/// "12/40 participants", only when the event has a non-zero cap.
pub fn participants_label(current: u32, max: Option<u32>) -> Option<String> {
    max.filter(|m| *m > 0).map(|m| format!("{current}/{m} participants"))
}

// ---------- timestamps ----------
//
// The API emits ISO-8601, usually without an offset ("2025-07-30T18:30:00.123456").
// Values are shown in the wall-clock time they carry.

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn fmt_or_raw(raw: &str, pattern: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format(pattern).to_string(),
        None => raw.to_string(),
    }
}

/// 7/30/2025
pub fn fmt_date(raw: &str) -> String {
    fmt_or_raw(raw, "%-m/%-d/%Y")
}

/// 06:30 PM
pub fn fmt_time(raw: &str) -> String {
    fmt_or_raw(raw, "%I:%M %p")
}

/// Wednesday, July 30, 2025
pub fn fmt_long_date(raw: &str) -> String {
    fmt_or_raw(raw, "%A, %B %-d, %Y")
}

// ---------- empty states ----------

#[derive(Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
}

pub enum Section<'a, T> {
    Items(&'a [T]),
    Empty(&'static EmptyState),
}

impl<'a, T> Section<'a, T> {
    pub fn empty_state(&self) -> Option<&'static EmptyState> {
        match self {
            Section::Items(_) => None,
            Section::Empty(e) => Some(*e),
        }
    }
}

pub fn section<'a, T>(items: &'a [T], empty: &'static EmptyState) -> Section<'a, T> {
    if items.is_empty() {
        Section::Empty(empty)
    } else {
        Section::Items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_scores_render_as_dash() {
        assert_eq!(score_label(None), "-");
        assert_eq!(score_label(Some(0)), "0");
        assert_eq!(score_label(Some(3)), "3");
    }

    #[test]
    fn only_three_achievements_are_shown() {
        let all: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(top_achievements(&all), &all[..3]);
        assert_eq!(top_achievements(&all[..1]), &all[..1]);
        assert!(top_achievements(&[]).is_empty());
    }

    #[test]
    fn missing_counters_show_zero() {
        assert_eq!(counter(None), "0");
        assert_eq!(counter(Some(48)), "48");
    }

    #[test]
    fn participants_need_a_cap() {
        assert_eq!(participants_label(12, Some(40)).as_deref(), Some("12/40 participants"));
        assert_eq!(participants_label(12, None), None);
        assert_eq!(participants_label(12, Some(0)), None);
    }

    #[test]
    fn naive_and_offset_timestamps_parse() {
        assert_eq!(fmt_date("2025-07-30T18:30:00.123456"), "7/30/2025");
        assert_eq!(fmt_time("2025-07-30T18:30:00"), "06:30 PM");
        assert_eq!(fmt_date("2025-07-30T18:30:00+02:00"), "7/30/2025");
        assert_eq!(fmt_time("2025-07-30T18:30:00Z"), "06:30 PM");
        assert_eq!(fmt_long_date("2025-07-30"), "Wednesday, July 30, 2025");
    }

    #[test]
    fn unparseable_timestamp_is_shown_verbatim() {
        assert_eq!(fmt_date("next tuesday"), "next tuesday");
    }

    static EMPTY: EmptyState = EmptyState {
        title: "Nothing",
        message: "Nothing here yet.",
    };

    #[test]
    fn section_switches_on_emptiness() {
        let none: [u8; 0] = [];
        assert_eq!(section(&none, &EMPTY).empty_state(), Some(&EMPTY));
        assert_eq!(section(&[1u8], &EMPTY).empty_state(), None);
    }
}
