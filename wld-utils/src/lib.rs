//! Shared utility functions for the war losses dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    /// Date format used by the losses feed: "YYYY-MM-DD"
    pub const FEED_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Timestamp forms some feed mirrors emit instead of a bare date.
    const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(FEED_DATE_FORMAT).to_string()
    }

    /// Parse a feed date.
    ///
    /// Accepts "YYYY-MM-DD", RFC 3339 timestamps and naive
    /// "YYYY-MM-DDTHH:MM:SS" timestamps. Only the calendar date is kept.
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, FEED_DATE_FORMAT) {
            return Ok(date);
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
            return Ok(ts.date_naive());
        }
        for format in TIMESTAMP_FORMATS {
            if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(ts.date());
            }
        }
        anyhow::bail!("unrecognised date: {:?}", s)
    }

    /// Parse a user supplied "as of" date (CLI flag), "YYYY-MM-DD" only.
    pub fn parse_as_of(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), FEED_DATE_FORMAT)?)
    }

    /// Signed number of calendar days from `from` to `to`.
    ///
    /// Positive when `to` is later. Both sides are whole days, so this is the
    /// ceiling of the elapsed time in days.
    pub fn calendar_days_between(from: &NaiveDate, to: &NaiveDate) -> i64 {
        (*to - *from).num_days()
    }

    /// Calendar days between a feed date and an instant, ignoring the time of day.
    pub fn days_since(date: &NaiveDate, now: &NaiveDateTime) -> i64 {
        calendar_days_between(date, &now.date())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        }

        #[test]
        fn test_format_and_parse() {
            let date = ymd(2023, 6, 15);
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_timestamp_forms() {
            assert_eq!(parse_date("2024-02-29T13:45:00").unwrap(), ymd(2024, 2, 29));
            assert_eq!(parse_date("2024-02-29 01:00:00").unwrap(), ymd(2024, 2, 29));
            assert_eq!(parse_date("2024-02-29T23:00:00+00:00").unwrap(), ymd(2024, 2, 29));
            assert_eq!(parse_date("  2024-03-01 ").unwrap(), ymd(2024, 3, 1));
        }

        #[test]
        fn test_parse_rejects_garbage() {
            assert!(parse_date("").is_err());
            assert!(parse_date("yesterday").is_err());
            assert!(parse_date("2024-02-30").is_err());
            assert!(parse_date("01/02/2024").is_err());
        }

        #[test]
        fn test_parse_as_of_is_strict() {
            assert_eq!(parse_as_of("2024-01-07").unwrap(), ymd(2024, 1, 7));
            assert!(parse_as_of("2024-01-07T00:00:00").is_err());
        }

        #[test]
        fn test_calendar_days_between() {
            assert_eq!(calendar_days_between(&ymd(2024, 1, 1), &ymd(2024, 1, 8)), 7);
            assert_eq!(calendar_days_between(&ymd(2024, 1, 8), &ymd(2024, 1, 1)), -7);
            // 2024 is a leap year
            assert_eq!(calendar_days_between(&ymd(2024, 2, 28), &ymd(2024, 3, 1)), 2);
        }

        #[test]
        fn test_days_since_ignores_time_of_day() {
            let date = ymd(2024, 1, 10);
            let early = ymd(2024, 1, 10).and_hms_opt(0, 0, 1).unwrap();
            let late = ymd(2024, 1, 10).and_hms_opt(23, 59, 59).unwrap();
            assert_eq!(days_since(&date, &early), 0);
            assert_eq!(days_since(&date, &late), 0);
            let next = ymd(2024, 1, 11).and_hms_opt(0, 0, 0).unwrap();
            assert_eq!(days_since(&date, &next), 1);
        }
    }
}
