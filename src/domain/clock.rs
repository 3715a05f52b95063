//! Date, time and hour formats used by punch-clock exports

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Clock-in/clock-out dates: month/day/4-digit-year
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Clock-in/clock-out times: 12-hour clock with AM/PM marker
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Parse a mm/dd/yyyy date. The year must have exactly four digits.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let year = value.rsplit('/').next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parse an hh:mm AM/PM time
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Start of the given calendar day
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// Elapsed hours between two instants, unrounded
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Round to hundredths of an hour.
///
/// Rounds the exact binary value, so `2.675` (stored just below the half)
/// becomes `2.67`. Exact halves go to the even hundredth: `0.125` -> `0.12`.
pub fn round_hours(hours: f64) -> f64 {
    if is_half_hundredth(hours) {
        let down = (hours * 100.0).floor();
        let even = if down % 2.0 == 0.0 { down } else { down + 1.0 };
        return even / 100.0;
    }
    format!("{:.2}", hours).parse().unwrap_or(hours)
}

/// Only odd multiples of 1/8 lie exactly halfway between two hundredths
fn is_half_hundredth(hours: f64) -> bool {
    let eighths = hours * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 != 0.0
}

/// Render hours rounded to 2 decimals, always with a fractional part ("8.0", "1.98")
pub fn format_hours(hours: f64) -> String {
    let text = round_hours(hours).to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// True for a non-empty string of ASCII digits
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an hours field: a whole number or a finite, non-negative decimal
pub fn parse_hours(value: &str) -> Option<f64> {
    let hours: f64 = value.parse().ok()?;
    (hours.is_finite() && hours >= 0.0).then_some(hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("01/15/2024"), Some(expected));
        assert_eq!(parse_date("1/15/2024"), Some(expected));
    }

    #[test]
    fn test_parse_date_rejects_other_layouts() {
        assert_eq!(parse_date("2024-01-15"), None);
        assert_eq!(parse_date("15/01/2024"), None);
        assert_eq!(parse_date("01/15/24"), None);
        assert_eq!(parse_date("02/30/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("10:00 PM"),
            NaiveTime::from_hms_opt(22, 0, 0)
        );
        assert_eq!(parse_time("12:30 AM"), NaiveTime::from_hms_opt(0, 30, 0));
        assert_eq!(parse_time("02:05 am"), NaiveTime::from_hms_opt(2, 5, 0));
    }

    #[test]
    fn test_parse_time_rejects_24_hour_clock() {
        assert_eq!(parse_time("22:00"), None);
        assert_eq!(parse_time("13:00 PM"), None);
        assert_eq!(parse_time("noon"), None);
    }

    #[test]
    fn test_format_round_trip_text() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "03/05/2024");
        let time = NaiveTime::from_hms_opt(14, 7, 0).unwrap();
        assert_eq!(format_time(time), "02:07 PM");
    }

    #[test]
    fn test_hours_between_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        assert_eq!(hours_between(start, midnight(date)), 2.0);
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(2.0), "2.0");
        assert_eq!(format_hours(1.98), "1.98");
        assert_eq!(format_hours(7.5), "7.5");
        assert_eq!(format_hours(1.0 + 2.0 / 3.0), "1.67");
        assert_eq!(format_hours(0.0), "0.0");
    }

    #[test]
    fn test_round_hours_halves_and_binary_values() {
        let cases = [
            (0.125, "0.12"),
            (0.375, "0.38"),
            (0.625, "0.62"),
            (7.125, "7.12"),
            (2.675, "2.67"),
            (1.115, "1.11"),
            (0.835, "0.83"),
            (4.005, "4.0"),
            (10.0 / 60.0, "0.17"),
        ];
        for (hours, expected) in cases {
            assert_eq!(format_hours(hours), expected, "rounding {}", hours);
        }
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("1001"));
        assert!(!is_digits(""));
        assert!(!is_digits("10a1"));
        assert!(!is_digits("-1"));
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours("4"), Some(4.0));
        assert_eq!(parse_hours("7.25"), Some(7.25));
        assert_eq!(parse_hours("-1.5"), None);
        assert_eq!(parse_hours("inf"), None);
        assert_eq!(parse_hours("eight"), None);
    }
}
