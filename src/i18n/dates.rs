//! Locale-aware date formatting for record timestamps.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

use crate::i18n::Locale;

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const INDONESIAN_MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const ARABIC_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Format a calendar date in the locale's long style.
///
/// ```
/// use chrono::NaiveDate;
/// use localized_site::i18n::{format_date, Locale};
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
/// assert_eq!(format_date(date, Locale::ENGLISH), "January 5, 2025");
/// assert_eq!(format_date(date, Locale::KOREAN), "2025년 1월 5일");
/// ```
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let (year, month, day) = (date.year(), date.month(), date.day());
    // month() is 1-based and always in 1..=12
    let month_index = (month - 1) as usize;

    match locale.code() {
        "ko" => format!("{}년 {}월 {}일", year, month, day),
        "ja" | "zh" => format!("{}年{}月{}日", year, month, day),
        "id" => format!("{} {} {}", day, INDONESIAN_MONTHS[month_index], year),
        "ar" => format!("{} {} {}", day, ARABIC_MONTHS[month_index], year),
        _ => format!("{} {}, {}", ENGLISH_MONTHS[month_index], day, year),
    }
}

/// Format a UTC timestamp as the locale's long date followed by `HH:MM`.
pub fn format_date_time(timestamp: DateTime<Utc>, locale: Locale) -> String {
    format!(
        "{} {:02}:{:02}",
        format_date(timestamp.date_naive(), locale),
        timestamp.hour(),
        timestamp.minute()
    )
}

/// Parse an RFC 3339 timestamp and format its date for the locale.
///
/// The date is taken in the timestamp's own offset. Unparseable input yields
/// an empty string, the same way a missing record field does.
pub fn format_rfc3339_date(text: &str, locale: Locale) -> String {
    match DateTime::parse_from_rfc3339(text.trim()) {
        Ok(parsed) => format_date(parsed.date_naive(), locale),
        Err(e) => {
            tracing::debug!("Ignoring unparseable timestamp {:?}: {}", text, e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_per_locale() {
        let d = date(2025, 1, 5);
        assert_eq!(format_date(d, Locale::resolve("en")), "January 5, 2025");
        assert_eq!(format_date(d, Locale::resolve("ko")), "2025년 1월 5일");
        assert_eq!(format_date(d, Locale::resolve("ja")), "2025年1月5日");
        assert_eq!(format_date(d, Locale::resolve("zh")), "2025年1月5日");
        assert_eq!(format_date(d, Locale::resolve("id")), "5 Januari 2025");
        assert_eq!(format_date(d, Locale::resolve("ar")), "5 يناير 2025");
    }

    #[test]
    fn test_format_date_december() {
        let d = date(2024, 12, 31);
        assert_eq!(format_date(d, Locale::ENGLISH), "December 31, 2024");
        assert_eq!(format_date(d, Locale::resolve("id")), "31 Desember 2024");
    }

    #[test]
    fn test_format_date_time_pads_minutes() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 9, 7, 4, 59).unwrap();
        assert_eq!(format_date_time(ts, Locale::ENGLISH), "March 9, 2025 07:04");
        assert_eq!(format_date_time(ts, Locale::KOREAN), "2025년 3월 9일 07:04");
    }

    #[test]
    fn test_format_rfc3339_uses_own_offset() {
        // 23:30 in UTC+09:00 is still the 5th locally
        let text = "2025-01-05T23:30:00+09:00";
        assert_eq!(format_rfc3339_date(text, Locale::ENGLISH), "January 5, 2025");
    }

    #[test]
    fn test_format_rfc3339_invalid_is_empty() {
        assert_eq!(format_rfc3339_date("yesterday", Locale::ENGLISH), "");
        assert_eq!(format_rfc3339_date("", Locale::KOREAN), "");
    }
}
