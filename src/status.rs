//! Temporal classification of event records.
//!
//! Every listing view derives an `upcoming` / `live` / `passed` badge from a
//! record's date and time strings. The backend's data entry is inconsistent:
//! dates arrive either year-first (`2024-06-01`) or day-first (`01/06/2024`
//! or `01-06-2024`), and times arrive as 24-hour `HH:MM` or 12-hour with an
//! `am`/`pm` marker. A badge is cosmetic, so unparseable input degrades to
//! [`Status::Upcoming`] instead of surfacing an error: [`classify`] is total
//! and never panics.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// The computed temporal classification of an event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Upcoming,
    Live,
    Passed,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Upcoming => "upcoming",
            Status::Live => "live",
            Status::Passed => "passed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an event record relative to `now`.
///
/// The event window runs from the start date (at the given time, or local
/// midnight when no time is given) through the end of the end date. A
/// missing end date collapses the window to the single day of the start
/// date. `now` is explicit rather than read from the system clock so the
/// boundaries are testable; callers pass `Local::now().naive_local()`.
///
/// Missing or malformed input yields `Upcoming`.
pub fn classify(
    start_date: Option<&str>,
    end_date: Option<&str>,
    time: Option<&str>,
    now: NaiveDateTime,
) -> Status {
    let Some(raw_start) = start_date else {
        return Status::Upcoming;
    };
    let Some(start) = parse_date(raw_start) else {
        return Status::Upcoming;
    };
    let end = match end_date {
        Some(raw) => match parse_date(raw) {
            Some(date) => date,
            None => return Status::Upcoming,
        },
        None => start,
    };
    let start_time = match time {
        Some(raw) => match parse_time(raw) {
            Some(t) => t,
            None => return Status::Upcoming,
        },
        None => NaiveTime::MIN,
    };
    let start_instant = start.and_time(start_time);
    let Some(end_of_day) = end.and_hms_opt(23, 59, 59) else {
        return Status::Upcoming;
    };

    if now < start_instant {
        Status::Upcoming
    } else if now > end_of_day {
        Status::Passed
    } else {
        Status::Live
    }
}

/// Treat a blank record field as absent.
pub fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Parse a calendar date in either of the backend's two spellings.
///
/// A `-`-separated string whose first segment is 4 characters is
/// year-month-day; anything else is day-month-year, split on `/` when
/// present and `-` otherwise. The year-first check is structural, not
/// locale-aware: a valid day can never be 4 digits.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let year_first = raw.contains('-') && raw.split('-').next().is_some_and(|s| s.len() == 4);

    if year_first {
        let parts: Vec<&str> = raw.split('-').collect();
        if parts.len() != 3 {
            return None;
        }
        let year: i32 = parts[0].trim().parse().ok()?;
        let month: u32 = parts[1].trim().parse().ok()?;
        let day: u32 = parts[2].trim().parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    } else {
        let sep = if raw.contains('/') { '/' } else { '-' };
        let parts: Vec<&str> = raw.split(sep).collect();
        if parts.len() != 3 {
            return None;
        }
        let day: u32 = parts[0].trim().parse().ok()?;
        let month: u32 = parts[1].trim().parse().ok()?;
        let year: i32 = parts[2].trim().parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

enum Meridiem {
    Am,
    Pm,
}

/// Parse a clock time, either 24-hour `HH:MM` or 12-hour with a trailing
/// `am`/`pm` marker (case-insensitive, space optional). `12:00 am` is
/// midnight and `12:00 pm` is noon.
fn parse_time(raw: &str) -> Option<NaiveTime> {
    let lower = raw.trim().to_ascii_lowercase();
    let (clock, meridiem) = if let Some(stripped) = lower.strip_suffix("am") {
        (stripped.trim_end(), Some(Meridiem::Am))
    } else if let Some(stripped) = lower.strip_suffix("pm") {
        (stripped.trim_end(), Some(Meridiem::Pm))
    } else {
        (lower.as_str(), None)
    };

    let mut segments = clock.split(':');
    let hour: u32 = segments.next()?.trim().parse().ok()?;
    let minute: u32 = match segments.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };

    let hour = match meridiem {
        // A 12-hour clock only has hours 1 through 12.
        Some(_) if hour == 0 || hour > 12 => return None,
        Some(Meridiem::Pm) if hour != 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let time = NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap();
        date.and_time(time)
    }

    #[test]
    fn absent_start_date_is_upcoming() {
        let now = at("2024-06-01", "12:00:00");
        assert_eq!(classify(None, None, None, now), Status::Upcoming);
        assert_eq!(
            classify(None, Some("2020-01-01"), Some("10:00 am"), now),
            Status::Upcoming
        );
    }

    #[test]
    fn totality_over_garbage_input() {
        let now = at("2024-06-01", "12:00:00");
        let garbage = [
            "", " ", "not-a-date", "2024", "2024-06", "2024-06-01-07", "99/99/9999",
            "1234/05/06", "06//01", "----", "2024-13-01", "32-06-2024",
        ];
        for s in garbage {
            let status = classify(Some(s), None, None, now);
            assert_eq!(status, Status::Upcoming, "input {:?}", s);
            // Garbage in the other slots degrades the same way.
            assert_eq!(
                classify(Some("2024-06-01"), Some(s), Some("banana"), now),
                Status::Upcoming,
                "end/time input {:?}",
                s
            );
        }
    }

    #[test]
    fn out_of_range_twelve_hour_values_degrade() {
        let now = at("2024-06-01", "12:00:00");
        // Hours a 12-hour clock cannot show, including one large enough to
        // overflow if it were shifted by 12.
        for time in ["0:30 pm", "13:00 pm", "25:00 am", "4294967290:00 pm"] {
            assert_eq!(
                classify(Some("2024-06-01"), None, Some(time), now),
                Status::Upcoming,
                "time {:?}",
                time
            );
        }
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let now = at("2024-06-01", "12:00:00");
        let first = classify(Some("2024-06-01"), None, Some("10:00 am"), now);
        let second = classify(Some("2024-06-01"), None, Some("10:00 am"), now);
        assert_eq!(first, second);
    }

    #[test]
    fn boundary_at_start_instant() {
        let start = Some("2024-06-01");
        let time = Some("10:00 am");
        assert_eq!(
            classify(start, None, time, at("2024-06-01", "09:59:59")),
            Status::Upcoming
        );
        assert_eq!(
            classify(start, None, time, at("2024-06-01", "10:00:00")),
            Status::Live
        );
    }

    #[test]
    fn boundary_at_end_of_day() {
        let start = Some("2024-06-01");
        let end = Some("2024-06-01");
        let time = Some("10:00 am");
        assert_eq!(
            classify(start, end, time, at("2024-06-01", "23:59:59")),
            Status::Live
        );
        assert_eq!(
            classify(start, end, time, at("2024-06-02", "00:00:01")),
            Status::Passed
        );
    }

    #[test]
    fn twelve_hour_midnight_normalization() {
        // 12:00 am is hour 0 of the start date.
        assert_eq!(
            classify(
                Some("2024-06-01"),
                None,
                Some("12:00 am"),
                at("2024-06-01", "00:00:00")
            ),
            Status::Live
        );
        // 12:00 pm is noon, so the morning is still upcoming.
        assert_eq!(
            classify(
                Some("2024-06-01"),
                None,
                Some("12:00 pm"),
                at("2024-06-01", "11:59:59")
            ),
            Status::Upcoming
        );
        assert_eq!(
            classify(
                Some("2024-06-01"),
                None,
                Some("12:00 pm"),
                at("2024-06-01", "12:00:00")
            ),
            Status::Live
        );
    }

    #[test]
    fn year_first_and_day_first_dates_agree() {
        let now = at("2024-06-01", "11:00:00");
        let time = Some("10:00 am");
        let year_first = classify(Some("2024-06-01"), None, time, now);
        let day_first_dash = classify(Some("01-06-2024"), None, time, now);
        let day_first_slash = classify(Some("01/06/2024"), None, time, now);
        assert_eq!(year_first, Status::Live);
        assert_eq!(day_first_dash, year_first);
        assert_eq!(day_first_slash, year_first);
    }

    #[test]
    fn time_format_variants_agree() {
        let now = at("2024-06-01", "19:45:00");
        for time in ["7:30 pm", "7:30pm", "7:30 PM", "19:30"] {
            assert_eq!(
                classify(Some("2024-06-01"), None, Some(time), now),
                Status::Live,
                "time {:?}",
                time
            );
        }
    }

    #[test]
    fn missing_end_date_is_single_day_window() {
        // The day after the start date is passed, not live.
        assert_eq!(
            classify(Some("2024-06-01"), None, None, at("2024-06-02", "08:00:00")),
            Status::Passed
        );
        assert_eq!(
            classify(Some("2024-06-01"), None, None, at("2024-06-01", "08:00:00")),
            Status::Live
        );
    }

    #[test]
    fn multi_day_window_spans_end_date() {
        let start = Some("2024-06-01");
        let end = Some("2024-06-03");
        assert_eq!(
            classify(start, end, None, at("2024-06-02", "12:00:00")),
            Status::Live
        );
        assert_eq!(
            classify(start, end, None, at("2024-06-03", "23:59:59")),
            Status::Live
        );
        assert_eq!(
            classify(start, end, None, at("2024-06-04", "00:00:01")),
            Status::Passed
        );
    }

    #[test]
    fn mixed_date_spellings_within_one_record() {
        // Backend rows really do mix the two spellings.
        assert_eq!(
            classify(
                Some("2024-06-01"),
                Some("03/06/2024"),
                None,
                at("2024-06-02", "12:00:00")
            ),
            Status::Live
        );
    }

    #[test]
    fn absent_time_means_midnight_start() {
        assert_eq!(
            classify(Some("2024-06-01"), None, None, at("2024-06-01", "00:00:00")),
            Status::Live
        );
        assert_eq!(
            classify(Some("2024-06-01"), None, None, at("2024-05-31", "23:59:59")),
            Status::Upcoming
        );
    }

    #[test]
    fn non_empty_trims_and_drops_blanks() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty(" 2024-06-01 "), Some("2024-06-01"));
    }

    #[test]
    fn status_labels() {
        assert_eq!(Status::Upcoming.to_string(), "upcoming");
        assert_eq!(Status::Live.to_string(), "live");
        assert_eq!(Status::Passed.to_string(), "passed");
    }
}
