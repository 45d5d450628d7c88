//! Display formatting for prices and record dates.

use std::fmt::Write;

use chrono::{DateTime, TimeZone};

use crate::config::DisplayConfig;

/// Format an amount the way the `id-ID` currency formatter does:
/// `150000.0` → `"Rp 150.000,00"` (with a non-breaking space).
pub fn format_currency(amount: f64, display: &DisplayConfig) -> String {
    let symbol = &display.currency_symbol;
    if !amount.is_finite() {
        return format!("{symbol}\u{a0}-");
    }

    let digits = display.fraction_digits;
    let fixed = format!("{:.*}", digits, amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut out = String::new();
    // "-0,00" is not a thing.
    if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(symbol);
    out.push('\u{a0}');
    out.push_str(&group_thousands(int_part, &display.thousands_separator));
    if !frac_part.is_empty() {
        out.push_str(&display.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Format a record timestamp with the configured date pattern, in the
/// timestamp's own offset. An invalid pattern falls back to ISO `YYYY-MM-DD`.
pub fn format_date<Tz>(timestamp: &DateTime<Tz>, display: &DisplayConfig) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", timestamp.format(&display.date_format)).is_err() {
        return timestamp.date_naive().to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_currency_id_locale() {
        let display = DisplayConfig::default();
        assert_eq!(format_currency(150000.0, &display), "Rp\u{a0}150.000,00");
        assert_eq!(format_currency(999.5, &display), "Rp\u{a0}999,50");
        assert_eq!(
            format_currency(1234567.891, &display),
            "Rp\u{a0}1.234.567,89"
        );
        assert_eq!(format_currency(0.0, &display), "Rp\u{a0}0,00");
    }

    #[test]
    fn test_currency_negative_and_non_finite() {
        let display = DisplayConfig::default();
        assert_eq!(format_currency(-2500.0, &display), "-Rp\u{a0}2.500,00");
        assert_eq!(format_currency(-0.001, &display), "Rp\u{a0}0,00");
        assert_eq!(format_currency(f64::NAN, &display), "Rp\u{a0}-");
    }

    #[test]
    fn test_currency_without_fraction() {
        let display = DisplayConfig {
            fraction_digits: 0,
            ..DisplayConfig::default()
        };
        assert_eq!(format_currency(1000000.0, &display), "Rp\u{a0}1.000.000");
    }

    #[test]
    fn test_date() {
        let display = DisplayConfig::default();
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 10, 20, 30).unwrap();
        assert_eq!(format_date(&ts, &display), "01/03/2024");

        let iso = DisplayConfig {
            date_format: "%Y-%m-%d".to_string(),
            ..DisplayConfig::default()
        };
        assert_eq!(format_date(&ts, &iso), "2024-03-01");
    }

    #[test]
    fn test_date_keeps_its_offset() {
        let display = DisplayConfig::default();
        let ts = DateTime::parse_from_rfc3339("2024-03-01T03:00:00+07:00").unwrap();
        assert_eq!(format_date(&ts, &display), "01/03/2024");

        // The same instant seen from UTC is still the previous day.
        assert_eq!(format_date(&ts.with_timezone(&Utc), &display), "29/02/2024");

        let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
        let late = jakarta.with_ymd_and_hms(2024, 2, 29, 23, 59, 0).unwrap();
        assert_eq!(format_date(&late, &display), "29/02/2024");
    }
}
