use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Timelike, Utc};

/// Wall-clock source for the date and time stamps written to the store.
///
/// Stamps are taken at a fixed UTC offset rather than the host timezone so
/// records read the same no matter where the service happens to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetClock {
    offset: FixedOffset,
}

impl OffsetClock {
    /// Build a clock at a whole-hour offset from UTC.
    ///
    /// Out-of-range values are clamped to the valid `-23..=23` band.
    pub fn from_hours(hours: i32) -> Self {
        let clamped = hours.clamp(-23, 23);
        let offset = match FixedOffset::east_opt(clamped * 3600) {
            Some(offset) => offset,
            None => Utc.fix(),
        };
        Self { offset }
    }

    /// Current date and time in the clock's offset, truncated to whole
    /// seconds so stored times match their `HH:MM:SS` rendering.
    pub fn now(&self) -> NaiveDateTime {
        let now = Utc::now().with_timezone(&self.offset).naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }

    /// Current date in the clock's offset.
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Render a date stamp as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Render a time stamp as `HH:MM:SS`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_from_hours_clamps_out_of_range() {
        assert_eq!(OffsetClock::from_hours(99), OffsetClock::from_hours(23));
        assert_eq!(OffsetClock::from_hours(-99), OffsetClock::from_hours(-23));
    }

    #[test]
    fn test_now_tracks_utc_at_the_configured_offset() {
        let clock = OffsetClock::from_hours(-5);
        let diff = Utc::now().naive_utc() - clock.now();
        let drift = (diff - Duration::hours(5)).num_seconds().abs();
        assert!(drift <= 2, "clock drifted {drift}s from UTC-5");
    }

    #[test]
    fn test_now_truncates_to_whole_seconds() {
        let clock = OffsetClock::from_hours(0);
        assert_eq!(clock.now().nanosecond(), 0);
    }

    #[test]
    fn test_format_date_pads_with_zeroes() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "2024-03-07");
    }

    #[test]
    fn test_format_time_pads_with_zeroes() {
        let time = NaiveTime::from_hms_opt(5, 8, 9).unwrap();
        assert_eq!(format_time(time), "05:08:09");
    }
}
