use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown when a posting date cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Formats a posting timestamp as a long date: month name, day, year.
///
/// The calendar date is taken in the timestamp's own offset.
pub fn format_posted_date(raw: &str) -> String {
    parse_date(raw.trim())
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|stamp| stamp.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::{format_posted_date, INVALID_DATE};

    #[test]
    fn rfc3339_uses_long_month_and_unpadded_day() {
        assert_eq!(format_posted_date("2024-03-05T10:15:00Z"), "March 5, 2024");
        assert_eq!(
            format_posted_date("2023-12-31T23:59:59.123+02:00"),
            "December 31, 2023"
        );
    }

    #[test]
    fn naive_timestamps_and_plain_dates_are_accepted() {
        assert_eq!(format_posted_date("2024-01-20T08:00:00.000"), "January 20, 2024");
        assert_eq!(format_posted_date("2024-01-20 08:00:00"), "January 20, 2024");
        assert_eq!(format_posted_date(" 2022-07-04 "), "July 4, 2022");
    }

    #[test]
    fn garbage_is_reported_as_invalid() {
        assert_eq!(format_posted_date("yesterday"), INVALID_DATE);
        assert_eq!(format_posted_date(""), INVALID_DATE);
    }
}
