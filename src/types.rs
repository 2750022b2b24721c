use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Result, SolarError};

/// Centuries since 2000 January 1, 12:00 TT.
pub type JulianCentury = f64;

/// Wall-clock reading as delivered by a clock source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarTimestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarTimestamp {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self> {
        let ts = Self::new_unchecked(year, month, day, hour, minute, second);
        ts.validate()?;
        Ok(ts)
    }

    /// Builds a timestamp without range checks. Out-of-range fields flow
    /// through the pipeline unchanged and produce meaningless output.
    pub fn new_unchecked(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            return Err(SolarError::invalid_timestamp("month", self.month));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(SolarError::invalid_timestamp("day", self.day));
        }
        if self.hour > 23 {
            return Err(SolarError::invalid_timestamp("hour", self.hour));
        }
        if self.minute > 59 {
            return Err(SolarError::invalid_timestamp("minute", self.minute));
        }
        if self.second > 59 {
            return Err(SolarError::invalid_timestamp("second", self.second));
        }
        Ok(())
    }

    pub fn to_naive(&self) -> Result<NaiveDateTime> {
        self.validate()?;
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, self.second))
            .ok_or(SolarError::invalid_timestamp("year", self.year))
    }
}

impl From<NaiveDateTime> for CalendarTimestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }
}

impl fmt::Display for CalendarTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Fixed clock offset in hours.
///
/// The offset is subtracted from the local hour to get Universal Time
/// (`hour - tz`). A clock running ahead of Greenwich (UTC+2) is entered
/// as `2.0`, one running behind (UTC-5) as `-5.0`. Set it to `0.0` when
/// the clock already keeps GMT. Daylight saving is not handled.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct TimezoneOffset(pub f64);

impl TimezoneOffset {
    pub const GMT: TimezoneOffset = TimezoneOffset(0.0);

    pub fn new(hours: f64) -> Result<Self> {
        if !hours.is_finite() || hours.abs() > 14.0 {
            return Err(SolarError::InvalidTimezone(hours));
        }
        Ok(Self(hours))
    }

    pub fn hours(self) -> f64 {
        self.0
    }

    /// Offset in whole seconds, as chrono's `FixedOffset` wants it.
    pub fn seconds(self) -> i32 {
        (self.0 * 3600.0).round() as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub mean_longitude: f64,
    pub mean_anomaly: f64,
    pub eccentricity: f64,
    pub equation_of_center: f64,
    pub true_longitude: f64,
    pub true_anomaly: f64,
    pub obliquity: f64,
    pub sun_earth_distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn of(declination: f64) -> Self {
        if declination < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }
}

/// Which side of the mean sun the apparent sun sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarOffset {
    East,
    West,
}

impl SolarOffset {
    pub fn of(eot: f64) -> Self {
        if eot < 0.0 {
            SolarOffset::East
        } else {
            SolarOffset::West
        }
    }

    pub fn symbol(self) -> char {
        match self {
            SolarOffset::East => 'E',
            SolarOffset::West => 'W',
        }
    }
}

/// Unsigned degrees / arc minutes / arc seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AngleDms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl AngleDms {
    pub fn to_degrees(self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0
    }
}

/// Unsigned minutes / seconds of clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClockOffset {
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockOffset {
    pub fn total_seconds(self) -> u32 {
        self.minutes * 60 + self.seconds
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeclinationResult {
    pub decimal_degrees: f64,
    pub angle: AngleDms,
    pub sign: Hemisphere,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationOfTimeResult {
    pub decimal_degrees: f64,
    pub angle: AngleDms,
    pub clock: ClockOffset,
    pub sign: SolarOffset,
}

impl EquationOfTimeResult {
    /// Signed clock minutes (4 minutes per degree).
    pub fn minutes(&self) -> f64 {
        self.decimal_degrees * 4.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarReading {
    pub timestamp: CalendarTimestamp,
    pub tz_offset: TimezoneOffset,
    pub julian_date: f64,
    pub julian_century: JulianCentury,
    pub elements: OrbitalElements,
    pub declination: DeclinationResult,
    pub equation_of_time: EquationOfTimeResult,
}

/// One line of text anchored at a pixel position on the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: String,
    pub x: u8,
    pub y: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPayload {
    pub date: DisplayLine,
    pub time: DisplayLine,
    pub eot_clock: DisplayLine,
    pub eot_angle: DisplayLine,
    pub declination: DisplayLine,
}

impl DisplayPayload {
    pub fn lines(&self) -> [&DisplayLine; 5] {
        [
            &self.date,
            &self.time,
            &self.eot_clock,
            &self.eot_angle,
            &self.declination,
        ]
    }
}
