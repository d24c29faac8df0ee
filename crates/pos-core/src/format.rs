//! Display formatting for dates

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, TimeZone, Timelike};

const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

/// Placeholder for a missing or unreadable date
pub const MISSING_DATE: &str = "N/A";

fn month_name(month: u32) -> &'static str {
    MONTHS.get(month.saturating_sub(1) as usize).copied().unwrap_or("")
}

/// `"5 Maret 2025, 14.30"` in the browser's local time zone
pub fn format_date(value: Option<&DateTime<FixedOffset>>) -> String {
    format_date_in(value, &Local)
}

/// Same as [`format_date`] for an explicit time zone
pub fn format_date_in<Tz: TimeZone>(value: Option<&DateTime<FixedOffset>>, tz: &Tz) -> String {
    let Some(value) = value else {
        return MISSING_DATE.to_string();
    };
    let local = value.with_timezone(tz);
    format!(
        "{} {} {}, {:02}.{:02}",
        local.day(),
        month_name(local.month()),
        local.year(),
        local.hour(),
        local.minute()
    )
}

/// Short form for report rows: `"5 Mar"`
pub fn format_day(date: NaiveDate) -> String {
    let month = month_name(date.month());
    format!("{} {}", date.day(), month.get(..3).unwrap_or(month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_date() {
        let parsed = DateTime::parse_from_rfc3339("2025-03-05T14:30:00+07:00").unwrap();
        let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(format_date_in(Some(&parsed), &jakarta), "5 Maret 2025, 14.30");
        assert_eq!(format_date_in(Some(&parsed), &Utc), "5 Maret 2025, 07.30");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_date_in(None, &Utc), "N/A");
    }

    #[test]
    fn test_format_day() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
        assert_eq!(format_day(date), "17 Agu");
    }
}
