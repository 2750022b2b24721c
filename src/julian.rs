use crate::types::{CalendarTimestamp, JulianCentury, TimezoneOffset};

pub const J2000: f64 = 2451545.0;
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Julian Date of a wall-clock timestamp.
///
/// January and February count as months 13 and 14 of the previous year.
/// Every integer part is truncated toward zero (`as i64`), not floored,
/// which only matters for negative years.
pub fn julian_day(ts: &CalendarTimestamp, tz: TimezoneOffset) -> f64 {
    let (mut year, mut month) = (ts.year as i64, ts.month as i64);
    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let a = (year as f64 / 100.0) as i64;
    let b = 2 - a + (a as f64 / 4.0) as i64;

    let day_number = (365.25 * (year + 4716) as f64) as i64
        + (30.6001 * (month + 1) as f64) as i64
        + ts.day as i64
        + b;
    let day_fraction = (ts.hour as f64 - tz.hours()
        + ts.minute as f64 / 60.0
        + ts.second as f64 / 3600.0)
        / 24.0;

    day_number as f64 - 1524.5 + day_fraction
}

pub fn julian_day_to_century(jd: f64) -> JulianCentury {
    (jd - J2000) / DAYS_PER_CENTURY
}

pub fn julian_century(ts: &CalendarTimestamp, tz: TimezoneOffset) -> JulianCentury {
    julian_day_to_century(julian_day(ts, tz))
}
