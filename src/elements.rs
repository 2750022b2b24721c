//! Low-precision solar orbital elements as polynomials in Julian centuries
//! since J2000.0. Angles are in degrees at every public boundary.

use crate::angles::{deg_to_rad, normalize_angle};
use crate::types::{JulianCentury, OrbitalElements};

/// Geometric mean longitude of the Sun, in [0, 360).
pub fn mean_longitude(jc: JulianCentury) -> f64 {
    normalize_angle(280.46646 + 36000.76983 * jc + 0.0003032 * jc * jc)
}

/// Mean anomaly of the Sun, in [0, 360).
pub fn mean_anomaly(jc: JulianCentury) -> f64 {
    normalize_angle(357.52911 + 35999.05029 * jc - 0.0001537 * jc * jc)
}

/// Eccentricity of Earth's orbit.
pub fn eccentricity(jc: JulianCentury) -> f64 {
    0.016708634 - 0.000042037 * jc - 0.000000127 * jc * jc
}

pub fn equation_of_center(jc: JulianCentury, mean_anomaly: f64) -> f64 {
    let m = deg_to_rad(mean_anomaly);
    (1.914602 - 0.004817 * jc - 0.000014 * jc * jc) * m.sin()
        + (0.019993 - 0.000101 * jc) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin()
}

/// Sun-Earth distance in AU.
pub fn sun_earth_distance(eccentricity: f64, true_anomaly: f64) -> f64 {
    let e = eccentricity;
    1.000001018 * (1.0 - e * e) / (1.0 + e * deg_to_rad(true_anomaly).cos())
}

/// Mean obliquity of the ecliptic.
pub fn obliquity(jc: JulianCentury) -> f64 {
    let base = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;
    let t1 = 46.8150 / 3600.0;
    let t2 = 0.00059 / 3600.0;
    let t3 = 0.001813 / 3600.0;
    base - t1 * jc - t2 * jc.powi(2) + t3 * jc.powi(3)
}

pub fn compute_elements(jc: JulianCentury) -> OrbitalElements {
    let l0 = mean_longitude(jc);
    let m = mean_anomaly(jc);
    let e = eccentricity(jc);
    let c = equation_of_center(jc, m);
    let true_anomaly = m + c;

    OrbitalElements {
        mean_longitude: l0,
        mean_anomaly: m,
        eccentricity: e,
        equation_of_center: c,
        true_longitude: l0 + c,
        true_anomaly,
        obliquity: obliquity(jc),
        sun_earth_distance: sun_earth_distance(e, true_anomaly),
    }
}
