use chrono::{Duration, FixedOffset, NaiveDateTime, Utc};

use crate::error::{Result, SolarError};
use crate::types::{CalendarTimestamp, TimezoneOffset};

/// Anything that can report the current wall-clock time.
pub trait ClockSource {
    fn now(&mut self) -> Result<CalendarTimestamp>;
}

/// Host clock, read in UTC and shifted to the configured offset so the
/// displayed time and the offset used for the Julian date agree.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(tz: TimezoneOffset) -> Result<Self> {
        let offset = FixedOffset::east_opt(tz.seconds())
            .ok_or(SolarError::InvalidTimezone(tz.hours()))?;
        Ok(Self { offset })
    }
}

impl ClockSource for SystemClock {
    fn now(&mut self) -> Result<CalendarTimestamp> {
        Ok(Utc::now().with_timezone(&self.offset).naive_local().into())
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarTimestamp);

impl ClockSource for FixedClock {
    fn now(&mut self) -> Result<CalendarTimestamp> {
        Ok(self.0)
    }
}

/// Starts at a given instant and advances by `step` on every read.
#[derive(Debug, Clone, Copy)]
pub struct SteppingClock {
    next: NaiveDateTime,
    step: Duration,
}

impl SteppingClock {
    pub fn new(start: NaiveDateTime, step: Duration) -> Self {
        Self { next: start, step }
    }
}

impl ClockSource for SteppingClock {
    fn now(&mut self) -> Result<CalendarTimestamp> {
        let current = self.next;
        self.next = current
            .checked_add_signed(self.step)
            .ok_or_else(|| SolarError::Clock(format!("clock overflow after {current}")))?;
        Ok(current.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Offset, TimeZone};

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 58)
            .unwrap()
    }

    #[test]
    fn stepping_clock_rolls_over_year() {
        let mut clock = SteppingClock::new(start(), Duration::seconds(1));
        let reads: Vec<_> = (0..3).map(|_| clock.now().unwrap()).collect();
        assert_eq!(reads[0].to_string(), "2024-12-31T23:59:58");
        assert_eq!(reads[1].to_string(), "2024-12-31T23:59:59");
        assert_eq!(reads[2].to_string(), "2025-01-01T00:00:00");
    }

    #[test]
    fn fixed_clock_repeats() {
        let ts = CalendarTimestamp::new(2024, 1, 16, 0, 46, 30).unwrap();
        let mut clock = FixedClock(ts);
        assert_eq!(clock.now().unwrap(), ts);
        assert_eq!(clock.now().unwrap(), ts);
    }

    #[test]
    fn system_clock_reads_valid_timestamp() {
        let mut clock = SystemClock::new(TimezoneOffset(-5.0)).unwrap();
        assert!(clock.now().unwrap().validate().is_ok());
    }

    #[test]
    fn zoned_wall_time_matches_offset_convention() {
        use chrono_tz::Europe::Berlin;

        // Berlin winter time runs one hour ahead of UTC.
        let local = Berlin.with_ymd_and_hms(2024, 1, 16, 1, 46, 30).unwrap();
        let offset = local.offset().fix().local_minus_utc() as f64 / 3600.0;
        let ts = CalendarTimestamp::from(local.naive_local());

        let utc = CalendarTimestamp::new(2024, 1, 16, 0, 46, 30).unwrap();
        let jd_local = crate::julian::julian_day(&ts, TimezoneOffset(offset));
        let jd_utc = crate::julian::julian_day(&utc, TimezoneOffset::GMT);
        assert!((jd_local - jd_utc).abs() < 1e-9);
    }
}
