pub mod angles;
pub mod clock;
pub mod config;
pub mod display;
pub mod elements;
pub mod error;
pub mod format;
pub mod julian;
pub mod orchestrator;
pub mod types;

pub use angles::{
    compute_reading, declination_result, deg_to_rad, equation_of_time, equation_of_time_minutes,
    equation_of_time_result, normalize_angle, rad_to_deg, solar_declination, MINUTES_PER_DEGREE,
};

pub use clock::{ClockSource, FixedClock, SteppingClock, SystemClock};
pub use config::Config;
pub use display::{DisplaySink, RecordingDisplay, TerminalDisplay};

pub use elements::{
    compute_elements, eccentricity, equation_of_center, mean_anomaly, mean_longitude, obliquity,
    sun_earth_distance,
};

pub use error::{Result, SolarError};

pub use format::{
    date_line, declination_line, eot_angle_line, eot_clock_line, month_abbrev, render_payload,
    time_line, to_clock_minutes_seconds, to_dms, MONTHS,
};

pub use julian::{julian_century, julian_day, julian_day_to_century, J2000};
pub use orchestrator::Orchestrator;

pub use types::{
    AngleDms, CalendarTimestamp, ClockOffset, DeclinationResult, DisplayLine, DisplayPayload,
    EquationOfTimeResult, Hemisphere, JulianCentury, OrbitalElements, SolarOffset, SolarReading,
    TimezoneOffset,
};
