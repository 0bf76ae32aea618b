//! Human-readable labels for due dates ("Today", "Tomorrow", "Mar 05, 2025")

use chrono::{Duration, Local, NaiveDate, ParseError};

/// Turn an optional `YYYY-MM-DD` string into a display label, relative to the local calendar day.
///
/// An absent date yields an empty string. A malformed date is an error: a garbage label would be
/// worse than no label, so the caller gets to report it instead.
///
/// The input is parsed as a plain calendar date. It is *not* fed to a timestamp parser: a
/// date-only string interpreted as a UTC timestamp and rendered in a zone behind UTC would
/// display the previous day.
pub fn label(date: Option<&str>) -> Result<String, ParseError> {
    match date {
        None => Ok(String::new()),
        Some(s) => {
            let date = parse_date_only(s)?;
            Ok(label_for_date(date, Local::today().naive_local()))
        }
    }
}

/// Parse a `YYYY-MM-DD` string into a calendar date, with no time zone involved
pub fn parse_date_only(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

/// The label for a given calendar date, relative to a given "today".
///
/// Split out of [`label`] so that it does not depend on the wall clock.
pub fn label_for_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        date.format("%b %d, %Y").to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_absent_date_has_no_label() {
        assert_eq!(label(None).unwrap(), "");
    }

    #[test]
    fn test_today_and_tomorrow() {
        let today = NaiveDate::from_ymd(2025, 3, 4);
        assert_eq!(label_for_date(NaiveDate::from_ymd(2025, 3, 4), today), "Today");
        assert_eq!(label_for_date(NaiveDate::from_ymd(2025, 3, 5), today), "Tomorrow");
        // Yesterday gets the full format, not a relative label
        assert_eq!(label_for_date(NaiveDate::from_ymd(2025, 3, 3), today), "Mar 03, 2025");
    }

    #[test]
    fn test_tomorrow_across_month_and_year_boundaries() {
        let today = NaiveDate::from_ymd(2025, 3, 31);
        assert_eq!(label_for_date(NaiveDate::from_ymd(2025, 4, 1), today), "Tomorrow");

        let today = NaiveDate::from_ymd(2025, 12, 31);
        assert_eq!(label_for_date(NaiveDate::from_ymd(2026, 1, 1), today), "Tomorrow");
    }

    #[test]
    fn test_full_format() {
        let today = NaiveDate::from_ymd(2025, 1, 1);
        assert_eq!(label_for_date(NaiveDate::from_ymd(2025, 3, 5), today), "Mar 05, 2025");
        assert_eq!(label_for_date(NaiveDate::from_ymd(2024, 11, 30), today), "Nov 30, 2024");
    }

    #[test]
    fn test_parsing_reads_components_literally() {
        // Whatever zone this test runs in, "2025-03-05" is March 5th. Parsing the raw string
        // as a timestamp would have assumed UTC midnight, which is March 4th in e.g. UTC-5.
        let date = parse_date_only("2025-03-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd(2025, 3, 5));
        assert_eq!(label_for_date(date, NaiveDate::from_ymd(2025, 1, 1)), "Mar 05, 2025");
    }

    #[test]
    fn test_malformed_dates_fail_loudly() {
        assert!(label(Some("")).is_err());
        assert!(label(Some("not a date")).is_err());
        assert!(label(Some("2025-03")).is_err());
        assert!(label(Some("2025-03-05T00:00:00Z")).is_err());
        assert!(label(Some("2025-13-05")).is_err());
        assert!(label(Some("2025-02-30")).is_err());
    }

    #[test]
    fn test_live_today() {
        let now = Local::today().naive_local();
        assert_eq!(label(Some(&now.format("%Y-%m-%d").to_string())).unwrap(), "Today");
        let tomorrow = now + Duration::days(1);
        assert_eq!(label(Some(&tomorrow.format("%Y-%m-%d").to_string())).unwrap(), "Tomorrow");
    }
}
