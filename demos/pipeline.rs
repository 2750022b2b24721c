use solar_eot::{compute_reading, render_payload, CalendarTimestamp, TimezoneOffset};

fn main() {
    let ts = CalendarTimestamp::new(2024, 1, 16, 0, 46, 30).unwrap();
    let tz = TimezoneOffset::GMT;

    let reading = compute_reading(&ts, tz);
    let el = &reading.elements;

    println!("=== Solar Reading ===");
    println!("Timestamp: {} (tz {:+.1} h)", ts, tz.hours());
    println!("Julian Date: {:.6}", reading.julian_date);
    println!("Julian Century: {:.10}", reading.julian_century);
    println!();
    println!("--- Orbital Elements ---");
    println!("Mean longitude: {:.6}°", el.mean_longitude);
    println!("Mean anomaly: {:.6}°", el.mean_anomaly);
    println!("Eccentricity: {:.9}", el.eccentricity);
    println!("Equation of center: {:.6}°", el.equation_of_center);
    println!("True longitude: {:.6}°", el.true_longitude);
    println!("True anomaly: {:.6}°", el.true_anomaly);
    println!("Obliquity: {:.6}°", el.obliquity);
    println!("Sun-Earth distance: {:.6} AU", el.sun_earth_distance);
    println!();
    println!("--- Results ---");
    println!("Declination: {:.4}°", reading.declination.decimal_degrees);
    println!(
        "Equation of Time: {:.4}° ({:.2} minutes)",
        reading.equation_of_time.decimal_degrees,
        reading.equation_of_time.minutes()
    );
    println!();
    println!("--- Display ---");
    for line in render_payload(&reading).lines() {
        println!("({:>2},{:>2}) {}", line.x, line.y, line.text);
    }
}
