use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

/// Storage format for calendar days.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Return the current unix timestamp in seconds.
pub fn now_unix_secs() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

/// Local calendar date for `now` at the given UTC offset.
///
/// Offsets outside a day fall back to UTC.
pub fn local_today(now: u64, utc_offset_minutes: i64) -> NaiveDate {
    let offset = i32::try_from(utc_offset_minutes.saturating_mul(60))
        .ok()
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());
    let secs = i64::try_from(now).unwrap_or(i64::MAX);
    DateTime::from_timestamp(secs, 0)
        .unwrap_or_default()
        .with_timezone(&offset)
        .date_naive()
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{iso_date, local_today};

    #[test]
    fn today_follows_the_utc_offset() {
        // 2024-03-19 21:00 UTC is already Nowruz in Tehran.
        let now = 1_710_882_000;
        assert_eq!(local_today(now, 0), NaiveDate::from_ymd_opt(2024, 3, 19).unwrap());
        assert_eq!(local_today(now, 210), NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        assert_eq!(local_today(now, 100_000), local_today(now, 0));
    }

    #[test]
    fn iso_dates_are_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(iso_date(date), "2024-03-05");
    }
}
