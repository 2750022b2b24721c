use solar_eot::angles::*;
use solar_eot::elements::*;
use solar_eot::julian::julian_century;
use solar_eot::types::{CalendarTimestamp, Hemisphere, SolarOffset, TimezoneOffset};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn noon(year: i32, month: u32, day: u32) -> CalendarTimestamp {
    CalendarTimestamp::new(year, month, day, 12, 0, 0).unwrap()
}

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (405.0, 45.0),
        (-180.0, 180.0),
        (8654.3, 14.3),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_normalize_angle_never_returns_360() {
    for &x in &[-1e-15, -1e-13, -f64::EPSILON, 720.0, -720.0] {
        let a = normalize_angle(x);
        assert!((0.0..360.0).contains(&a), "x={} -> {}", x, a);
    }
}

#[test]
fn test_deg_rad_conversions() {
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-12);
    assert_approx!(rad_to_deg(std::f64::consts::FRAC_PI_2), 90.0, 1e-12);
}

// ── Elements at J2000.0 ──

#[test]
fn test_elements_at_epoch() {
    let el = compute_elements(0.0);
    assert_approx!(el.mean_longitude, 280.46646, 1e-9);
    assert_approx!(el.mean_anomaly, 357.52911, 1e-9);
    assert_approx!(el.eccentricity, 0.016708634, 1e-12);
    assert_approx!(el.obliquity, 23.439291111, 1e-8);
    assert_approx!(el.equation_of_center, -0.0843015, 1e-6);
    assert_approx!(el.sun_earth_distance, 0.9833084, 1e-6);
}

#[test]
fn test_true_longitude_and_anomaly_share_center() {
    for i in -20..=20 {
        let jc = i as f64 * 0.05;
        let el = compute_elements(jc);
        assert_approx!(el.true_longitude - el.mean_longitude, el.equation_of_center, 1e-12);
        assert_approx!(el.true_anomaly - el.mean_anomaly, el.equation_of_center, 1e-12);
    }
}

#[test]
fn test_mean_angles_normalized() {
    for i in -400..=400 {
        let jc = i as f64 * 0.0137;
        let l0 = mean_longitude(jc);
        let m = mean_anomaly(jc);
        assert!((0.0..360.0).contains(&l0), "jc={} L0={}", jc, l0);
        assert!((0.0..360.0).contains(&m), "jc={} M={}", jc, m);
    }
}

#[test]
fn test_obliquity_decreasing_this_era() {
    assert!(obliquity(0.5) < obliquity(0.0));
    assert!(obliquity(0.0) < obliquity(-0.5));
}

#[test]
fn test_sun_earth_distance_perihelion_aphelion() {
    let e = eccentricity(0.24);
    assert_approx!(sun_earth_distance(e, 0.0), 1.000001018 * (1.0 - e), 1e-9);
    assert_approx!(sun_earth_distance(e, 180.0), 1.000001018 * (1.0 + e), 1e-9);
}

#[test]
fn test_sun_earth_distance_bounded_over_year() {
    for day in 1..=365 {
        let jc = julian_century(
            &CalendarTimestamp::new_unchecked(2024, 1, day, 0, 0, 0),
            TimezoneOffset::GMT,
        );
        let el = compute_elements(jc);
        assert!(
            (0.983..=1.017).contains(&el.sun_earth_distance),
            "day {}: R={}",
            day, el.sun_earth_distance
        );
    }
}

// ── SolarDeclination ──

#[test]
fn test_declination_solstices_equinoxes() {
    let tz = TimezoneOffset::GMT;
    let dec = |ts: CalendarTimestamp| {
        let el = compute_elements(julian_century(&ts, tz));
        solar_declination(el.obliquity, el.true_longitude)
    };
    assert_approx!(dec(noon(2024, 6, 21)), 23.4347, 0.001);
    assert_approx!(dec(noon(2024, 12, 21)), -23.4360, 0.001);
    assert_approx!(dec(noon(2024, 3, 20)), 0.0, 0.5);
    assert_approx!(dec(noon(2024, 9, 22)), 0.0, 0.5);
}

#[test]
fn test_declination_bounded_by_obliquity() {
    for i in -2000..=2000 {
        let jc = i as f64 * 0.000_731;
        let el = compute_elements(jc);
        let dec = solar_declination(el.obliquity, el.true_longitude);
        assert!(dec.abs() <= el.obliquity + 1e-9, "jc={} dec={}", jc, dec);
    }
}

#[test]
fn test_declination_extremes_at_ninety_degrees_longitude() {
    assert_approx!(solar_declination(23.44, 90.0), 23.44, 1e-9);
    assert_approx!(solar_declination(23.44, 270.0), -23.44, 1e-9);
    assert_approx!(solar_declination(23.44, 0.0), 0.0, 1e-12);
}

// ── EquationOfTime ──

fn eot_minutes(ts: CalendarTimestamp) -> f64 {
    compute_reading(&ts, TimezoneOffset::GMT)
        .equation_of_time
        .minutes()
}

#[test]
fn test_eot_november_maximum() {
    assert_approx!(eot_minutes(noon(2024, 11, 3)), 16.4, 0.5);
}

#[test]
fn test_eot_february_minimum() {
    assert_approx!(eot_minutes(noon(2024, 2, 11)), -14.2, 0.5);
}

#[test]
fn test_eot_annual_extremes() {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for day in 1..=366 {
        let ts = CalendarTimestamp::new_unchecked(2024, 1, day, 12, 0, 0);
        let m = eot_minutes(ts);
        min = min.min(m);
        max = max.max(m);
    }
    assert_approx!(max, 16.4, 0.5);
    assert_approx!(min, -14.2, 0.5);
}

#[test]
fn test_eot_sign_convention() {
    let nov = compute_reading(&noon(2024, 11, 3), TimezoneOffset::GMT);
    assert_eq!(nov.equation_of_time.sign, SolarOffset::West);
    let feb = compute_reading(&noon(2024, 2, 11), TimezoneOffset::GMT);
    assert_eq!(feb.equation_of_time.sign, SolarOffset::East);
    assert_eq!(SolarOffset::of(0.0), SolarOffset::West);
}

#[test]
fn test_eot_degrees_to_minutes() {
    assert_approx!(equation_of_time_minutes(2.5), 10.0, 1e-12);
    assert_approx!(equation_of_time_minutes(-1.0), -4.0, 1e-12);
}

#[test]
fn test_eot_zero_for_circular_untilted_orbit() {
    assert_approx!(equation_of_time(0.0, 123.0, 0.0, 45.0), 0.0, 1e-12);
}

// ── End to end ──

#[test]
fn test_regression_fixture() {
    let ts = CalendarTimestamp::new(2024, 1, 16, 0, 46, 30).unwrap();
    let r = compute_reading(&ts, TimezoneOffset::GMT);

    assert_approx!(r.julian_date, 2460325.5322917, 1e-6);
    assert_approx!(r.julian_century, 0.2403978725, 1e-9);
    assert_approx!(r.elements.mean_longitude, 294.97495, 1e-4);
    assert_approx!(r.elements.mean_anomaly, 11.62420, 1e-4);

    assert_approx!(r.declination.decimal_degrees, -21.0618, 1e-3);
    assert_eq!(r.declination.sign, Hemisphere::South);
    assert_eq!(
        (r.declination.angle.degrees, r.declination.angle.minutes, r.declination.angle.seconds),
        (21, 3, 42)
    );

    assert_approx!(r.equation_of_time.minutes(), -9.4158, 1e-3);
    assert_eq!(r.equation_of_time.sign, SolarOffset::East);
    assert_eq!(
        (r.equation_of_time.clock.minutes, r.equation_of_time.clock.seconds),
        (9, 24)
    );
    assert_eq!(
        (
            r.equation_of_time.angle.degrees,
            r.equation_of_time.angle.minutes,
            r.equation_of_time.angle.seconds
        ),
        (2, 21, 14)
    );
}

#[test]
fn test_timezone_shift_equals_clock_shift() {
    let local = CalendarTimestamp::new(2024, 1, 16, 5, 46, 30).unwrap();
    let utc = CalendarTimestamp::new(2024, 1, 16, 0, 46, 30).unwrap();
    let a = compute_reading(&local, TimezoneOffset(5.0));
    let b = compute_reading(&utc, TimezoneOffset::GMT);
    assert_approx!(a.julian_century, b.julian_century, 1e-12);
    assert_eq!(a.declination.angle, b.declination.angle);
}
