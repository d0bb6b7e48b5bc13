use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

/// Time-of-day format used by the backend for `timeIn` / `timeOut`.
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S%.f";

/// Seconds are optional in hand-entered rows (`"08:55"`).
const SHORT_TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// Parses an `HH:MM:SS` value, tolerating a fractional seconds suffix or a
/// missing seconds field.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(trimmed, TIME_OF_DAY_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, SHORT_TIME_OF_DAY_FORMAT))
        .ok()
}

/// `true` when the field carries any value at all, parseable or not.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// `hours * 60 + minutes + seconds / 60`.
pub fn minutes_since_midnight(time: NaiveTime) -> f64 {
    f64::from(time.hour() * 60 + time.minute()) + f64::from(time.second()) / 60.0
}

pub fn today_in(time_zone: Tz) -> NaiveDate {
    Utc::now().with_timezone(&time_zone).date_naive()
}

/// Monday and Sunday of the week containing `reference`.
pub fn week_bounds(reference: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let offset = i64::from(reference.weekday().num_days_from_monday());
    let monday = reference.checked_sub_signed(Duration::days(offset))?;
    let sunday = monday.checked_add_signed(Duration::days(6))?;
    Some((monday, sunday))
}

pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_of_day_accepts_padded_and_fractional_values() {
        assert_eq!(
            parse_time_of_day("08:55:00"),
            NaiveTime::from_hms_opt(8, 55, 0)
        );
        assert_eq!(
            parse_time_of_day("18:00:00.250"),
            NaiveTime::from_hms_milli_opt(18, 0, 0, 250)
        );
        assert_eq!(parse_time_of_day("08:55"), NaiveTime::from_hms_opt(8, 55, 0));
        assert!(parse_time_of_day("").is_none());
        assert!(parse_time_of_day("late").is_none());
        assert!(parse_time_of_day("25:00:00").is_none());
    }

    #[test]
    fn presence_ignores_blank_values() {
        assert!(is_present(Some("9am")));
        assert!(!is_present(Some("  ")));
        assert!(!is_present(None));
    }

    #[test]
    fn minutes_since_midnight_counts_seconds_as_fraction() {
        let time = NaiveTime::from_hms_opt(9, 0, 30).unwrap();
        assert!((minutes_since_midnight(time) - 540.5).abs() < f64::EPSILON);
    }

    #[test]
    fn week_bounds_returns_monday_to_sunday() {
        let wednesday = NaiveDate::from_ymd_opt(2025, 5, 14).unwrap();
        let (start, end) = week_bounds(wednesday).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 5, 12).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 5, 18).unwrap());

        let monday = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();
        assert_eq!(week_bounds(monday).unwrap().0, monday);
    }

    #[test]
    fn weekday_label_is_short_english_name() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 16).unwrap();
        assert_eq!(weekday_label(date), "Fri");
    }
}
