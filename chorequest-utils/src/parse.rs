use chrono::NaiveDate;

use crate::formatting::normalize_digits;
use crate::jalali::JalaliDate;
use crate::time::ISO_DATE_FORMAT;

/// Parse a Gregorian `YYYY-MM-DD` date.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&normalize_digits(raw.trim()), ISO_DATE_FORMAT).ok()
}

/// Parse a Jalali `YYYY/MM/DD` date.
pub fn parse_jalali_date(raw: &str) -> Option<JalaliDate> {
    let (year, month, day) = split_date(raw, '/')?;
    JalaliDate::new(year, month, day)
}

/// Accept either a Gregorian ISO date or a Jalali slash date and resolve it
/// to the Gregorian calendar used for storage.
pub fn parse_any_date(raw: &str) -> Option<NaiveDate> {
    let value = normalize_digits(raw.trim());
    if value.contains('/') {
        return parse_jalali_date(&value)?.to_gregorian();
    }
    parse_iso_date(&value)
}

/// Parse a Jalali `YYYY/MM` month.
pub fn parse_jalali_month(raw: &str) -> Option<(i32, u32)> {
    let value = normalize_digits(raw.trim());
    let (year, month) = value.split_once('/')?;
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    JalaliDate::new(year, month, 1).map(|_| (year, month))
}

fn split_date(raw: &str, separator: char) -> Option<(i32, u32, u32)> {
    let value = normalize_digits(raw.trim());
    let mut parts = value.split(separator);
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

/// Parse a 1-based list position.
pub fn parse_position(raw: &str) -> Option<usize> {
    normalize_digits(raw.trim())
        .parse::<usize>()
        .ok()
        .filter(|value| *value > 0)
}

/// Parse a positive amount of points or coins.
pub fn parse_amount(raw: &str) -> Option<u64> {
    normalize_digits(raw.trim())
        .parse::<u64>()
        .ok()
        .filter(|value| *value > 0)
}

/// A PIN is exactly four digits; Persian digits are accepted.
pub fn parse_pin(raw: &str) -> Option<String> {
    let value = normalize_digits(raw.trim());
    if value.len() == 4 && value.chars().all(|ch| ch.is_ascii_digit()) {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{
        parse_amount, parse_any_date, parse_iso_date, parse_jalali_month, parse_pin,
        parse_position,
    };

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_iso_date("2024-03-20"), NaiveDate::from_ymd_opt(2024, 3, 20));
        assert_eq!(parse_iso_date("۲۰۲۴-۰۳-۲۰"), NaiveDate::from_ymd_opt(2024, 3, 20));
        assert!(parse_iso_date("2023-02-29").is_none());
        assert!(parse_iso_date("2024-13-01").is_none());
        assert!(parse_iso_date("2024-03").is_none());
        assert!(parse_iso_date("2024-03-20-1").is_none());
    }

    #[test]
    fn resolves_jalali_dates() {
        let nowruz = NaiveDate::from_ymd_opt(2024, 3, 20);
        assert_eq!(parse_any_date("1403/01/01"), nowruz);
        assert_eq!(parse_any_date("۱۴۰۳/۰۱/۰۱"), nowruz);
        assert_eq!(parse_any_date(" 2024-03-20 "), nowruz);
        assert!(parse_any_date("1402/12/30").is_none());
    }

    #[test]
    fn parses_jalali_months() {
        assert_eq!(parse_jalali_month("1403/7"), Some((1403, 7)));
        assert_eq!(parse_jalali_month("۱۴۰۳/۱۲"), Some((1403, 12)));
        assert!(parse_jalali_month("1403/13").is_none());
        assert!(parse_jalali_month("1403").is_none());
    }

    #[test]
    fn parses_positions_and_amounts() {
        assert_eq!(parse_position("3"), Some(3));
        assert_eq!(parse_position("۲"), Some(2));
        assert_eq!(parse_position("0"), None);
        assert_eq!(parse_amount("15"), Some(15));
        assert_eq!(parse_amount("-5"), None);
    }

    #[test]
    fn pins_are_four_digits() {
        assert_eq!(parse_pin("1234").as_deref(), Some("1234"));
        assert_eq!(parse_pin("۱۲۳۴").as_deref(), Some("1234"));
        assert!(parse_pin("123").is_none());
        assert!(parse_pin("12a4").is_none());
    }
}
