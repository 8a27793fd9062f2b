//! Conversions between the Gregorian and the Jalali (Persian solar) calendar.
//!
//! Gregorian dates are `chrono::NaiveDate`. Jalali leap years follow the
//! break-table method, valid for Jalali years -61 through 3177.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

use crate::formatting::to_persian_digits;

pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Weekday names, Saturday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
];

const BREAKS: [i64; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

struct YearInfo {
    /// Gregorian date of 1 Farvardin.
    first_day: NaiveDate,
    /// Years since the last leap year; 0 means this year is leap.
    leap: i64,
}

fn year_info(jy: i64) -> Option<YearInfo> {
    if jy < BREAKS[0] || jy >= BREAKS[BREAKS.len() - 1] {
        return None;
    }

    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    let first_day =
        NaiveDate::from_ymd_opt(i32::try_from(gy).ok()?, 3, u32::try_from(march).ok()?)?;
    Some(YearInfo { first_day, leap })
}

pub fn is_leap_year(jy: i32) -> bool {
    year_info(i64::from(jy)).is_some_and(|info| info.leap == 0)
}

pub fn month_length(jy: i32, jm: u32) -> u32 {
    match jm {
        1..=6 => 31,
        7..=11 => 30,
        _ if is_leap_year(jy) => 30,
        _ => 29,
    }
}

/// Jalali view of a Gregorian date.
pub trait ToJalali {
    /// `None` outside the supported year range.
    fn to_jalali(&self) -> Option<JalaliDate>;
}

impl ToJalali for NaiveDate {
    fn to_jalali(&self) -> Option<JalaliDate> {
        JalaliDate::from_gregorian(*self)
    }
}

impl JalaliDate {
    /// Validated constructor.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        year_info(i64::from(year))?;
        if !(1..=12).contains(&month) || day == 0 || day > month_length(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn from_gregorian(date: NaiveDate) -> Option<Self> {
        let mut jy = i64::from(date.year()) - 621;
        let info = year_info(jy)?;

        let mut k = (date - info.first_day).num_days();
        if k >= 0 {
            if k <= 185 {
                return Some(Self {
                    year: i32::try_from(jy).ok()?,
                    month: u32::try_from(1 + k / 31).ok()?,
                    day: u32::try_from(k % 31 + 1).ok()?,
                });
            }
            k -= 186;
        } else {
            jy -= 1;
            k += 179;
            if info.leap == 1 {
                k += 1;
            }
        }

        Some(Self {
            year: i32::try_from(jy).ok()?,
            month: u32::try_from(7 + k / 30).ok()?,
            day: u32::try_from(k % 30 + 1).ok()?,
        })
    }

    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        let info = year_info(i64::from(self.year))?;
        let jm = u64::from(self.month);
        let offset = (jm - 1) * 31 - jm / 7 * jm.saturating_sub(7) + u64::from(self.day) - 1;
        info.first_day.checked_add_days(Days::new(offset))
    }

    /// Column of this date in a Saturday-first week (0 = Saturday).
    pub fn weekday(&self) -> Option<u32> {
        self.to_gregorian()
            .map(|date| (date.weekday().num_days_from_sunday() + 1) % 7)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// The following month, rolling the year over after Esfand.
    pub fn next_month(&self) -> (i32, u32) {
        if self.month >= 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        }
    }

    pub fn previous_month(&self) -> (i32, u32) {
        if self.month <= 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        }
    }
}

impl fmt::Display for JalaliDate {
    /// Long Persian form, e.g. `۱ فروردین ۱۴۰۳`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            to_persian_digits(self.day),
            self.month_name(),
            to_persian_digits(self.year)
        )
    }
}

/// Weekday column (Saturday = 0) of the first day of a Jalali month.
pub fn first_weekday_of_month(jy: i32, jm: u32) -> Option<u32> {
    JalaliDate::new(jy, jm, 1)?.weekday()
}

/// Render a Gregorian ISO date as a long Jalali date.
pub fn format_jalali_date(iso: &str) -> Option<String> {
    let date = crate::parse::parse_iso_date(iso)?;
    JalaliDate::from_gregorian(date).map(|jalali| jalali.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};

    use super::{
        JalaliDate, ToJalali, first_weekday_of_month, format_jalali_date, is_leap_year,
        month_length,
    };

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn nowruz_dates() {
        assert_eq!(ymd(2024, 3, 20).to_jalali(), JalaliDate::new(1403, 1, 1));
        assert_eq!(ymd(2025, 3, 21).to_jalali(), JalaliDate::new(1404, 1, 1));
        assert_eq!(ymd(2025, 3, 20).to_jalali(), JalaliDate::new(1403, 12, 30));
    }

    #[test]
    fn converts_back_to_gregorian() {
        let j = JalaliDate::new(1403, 7, 1).unwrap();
        assert_eq!(j.to_gregorian(), Some(ymd(2024, 9, 22)));

        let j = JalaliDate::new(1402, 10, 11).unwrap();
        assert_eq!(j.to_gregorian(), Some(ymd(2024, 1, 1)));
    }

    #[test]
    fn round_trips_a_year_of_days() {
        let start = ymd(2023, 3, 1);
        for offset in 0..400 {
            let date = start + Days::new(offset);
            let jalali = date.to_jalali().unwrap();
            assert_eq!(jalali.to_gregorian(), Some(date), "{date}");
        }
    }

    #[test]
    fn leap_years_and_month_lengths() {
        assert!(is_leap_year(1399));
        assert!(is_leap_year(1403));
        assert!(!is_leap_year(1402));
        assert_eq!(month_length(1403, 1), 31);
        assert_eq!(month_length(1403, 7), 30);
        assert_eq!(month_length(1403, 12), 30);
        assert_eq!(month_length(1402, 12), 29);
        assert!(JalaliDate::new(1402, 12, 30).is_none());
    }

    #[test]
    fn weekday_columns_start_on_saturday() {
        // 1 Farvardin 1403 was a Wednesday.
        assert_eq!(first_weekday_of_month(1403, 1), Some(4));
        // 2024-01-06 was a Saturday.
        let saturday = ymd(2024, 1, 6).to_jalali().unwrap();
        assert_eq!(saturday.weekday(), Some(0));
    }

    #[test]
    fn long_persian_format() {
        assert_eq!(
            format_jalali_date("2024-03-20").as_deref(),
            Some("۱ فروردین ۱۴۰۳")
        );
        assert_eq!(format_jalali_date("2024-02-30"), None);
    }
}
