// OrderSift - core/format.rs
//
// Display formatting for order timestamps: a date in one of three styles
// and a 12-hour clock time. Numbers are not zero-padded except minutes.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Date layout for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `M/D/YYYY`
    #[default]
    Mdy,
    /// `D/M/YYYY`
    Dmy,
    /// `YYYY/M/D`
    Ymd,
}

impl DateStyle {
    /// Parse `mdy` / `dmy` / `ymd` (any case).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "mdy" => Some(Self::Mdy),
            "dmy" => Some(Self::Dmy),
            "ymd" => Some(Self::Ymd),
            _ => None,
        }
    }
}

/// Format the calendar date of `dt`.
pub fn date_format(dt: &DateTime<Utc>, style: DateStyle) -> String {
    let (y, m, d) = (dt.year(), dt.month(), dt.day());
    match style {
        DateStyle::Mdy => format!("{m}/{d}/{y}"),
        DateStyle::Dmy => format!("{d}/{m}/{y}"),
        DateStyle::Ymd => format!("{y}/{m}/{d}"),
    }
}

/// Format the time of `dt` as `h:mm am` / `h:mm pm`. Midnight and noon
/// show as 12.
pub fn time_format(dt: &DateTime<Utc>) -> String {
    let (is_pm, hour) = dt.hour12();
    let suffix = if is_pm { "pm" } else { "am" };
    format!("{hour}:{:02} {suffix}", dt.minute())
}

/// `"<date>, <time>"`, the layout used in the order table.
pub fn datetime_format(dt: &DateTime<Utc>, style: DateStyle) -> String {
    format!("{}, {}", date_format(dt, style), time_format(dt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, h, min, 0).unwrap()
    }

    #[test]
    fn test_date_styles() {
        let dt = at(9, 0);
        assert_eq!(date_format(&dt, DateStyle::Mdy), "3/7/2024");
        assert_eq!(date_format(&dt, DateStyle::Dmy), "7/3/2024");
        assert_eq!(date_format(&dt, DateStyle::Ymd), "2024/3/7");
    }

    #[test]
    fn test_time_twelve_hour_clock() {
        assert_eq!(time_format(&at(0, 5)), "12:05 am");
        assert_eq!(time_format(&at(9, 30)), "9:30 am");
        assert_eq!(time_format(&at(12, 0)), "12:00 pm");
        assert_eq!(time_format(&at(23, 59)), "11:59 pm");
    }

    #[test]
    fn test_datetime_layout() {
        assert_eq!(datetime_format(&at(14, 7), DateStyle::Mdy), "3/7/2024, 2:07 pm");
    }
}
