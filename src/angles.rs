use crate::elements::compute_elements;
use crate::format::{to_clock_minutes_seconds, to_dms};
use crate::julian::{julian_day, julian_day_to_century};
use crate::types::{
    CalendarTimestamp, DeclinationResult, EquationOfTimeResult, Hemisphere, SolarOffset,
    SolarReading, TimezoneOffset,
};

pub const MINUTES_PER_DEGREE: f64 = 4.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Declination in degrees from obliquity and true longitude (both degrees).
/// Negative is south of the celestial equator.
pub fn solar_declination(obliquity: f64, true_longitude: f64) -> f64 {
    let sin_dec = deg_to_rad(obliquity).sin() * deg_to_rad(true_longitude).sin();
    rad_to_deg(sin_dec.clamp(-1.0, 1.0).asin())
}

/// Equation of Time in degrees. Negative means the apparent sun trails
/// the mean sun (shown as East), positive that it leads (West).
pub fn equation_of_time(
    obliquity: f64,
    mean_longitude: f64,
    eccentricity: f64,
    mean_anomaly: f64,
) -> f64 {
    let y = deg_to_rad(obliquity / 2.0).tan().powi(2);
    let l0 = deg_to_rad(mean_longitude);
    let m = deg_to_rad(mean_anomaly);
    let e = eccentricity;

    let eot = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    rad_to_deg(eot)
}

pub fn equation_of_time_minutes(eot_degrees: f64) -> f64 {
    eot_degrees * MINUTES_PER_DEGREE
}

pub fn declination_result(declination: f64) -> DeclinationResult {
    DeclinationResult {
        decimal_degrees: declination,
        angle: to_dms(declination),
        sign: Hemisphere::of(declination),
    }
}

pub fn equation_of_time_result(eot: f64) -> EquationOfTimeResult {
    EquationOfTimeResult {
        decimal_degrees: eot,
        angle: to_dms(eot),
        clock: to_clock_minutes_seconds(eot),
        sign: SolarOffset::of(eot),
    }
}

/// Runs the whole pipeline for one instant.
pub fn compute_reading(ts: &CalendarTimestamp, tz: TimezoneOffset) -> SolarReading {
    let jd = julian_day(ts, tz);
    let jc = julian_day_to_century(jd);
    let el = compute_elements(jc);

    let declination = solar_declination(el.obliquity, el.true_longitude);
    let eot = equation_of_time(
        el.obliquity,
        el.mean_longitude,
        el.eccentricity,
        el.mean_anomaly,
    );

    SolarReading {
        timestamp: *ts,
        tz_offset: tz,
        julian_date: jd,
        julian_century: jc,
        elements: el,
        declination: declination_result(declination),
        equation_of_time: equation_of_time_result(eot),
    }
}
