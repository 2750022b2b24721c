use crate::angles::MINUTES_PER_DEGREE;
use crate::types::{
    AngleDms, CalendarTimestamp, ClockOffset, DisplayLine, DisplayPayload, Hemisphere,
    SolarOffset, SolarReading,
};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Splits the magnitude of `decimal_degrees` into whole degrees, arc
/// minutes and arc seconds. The sign is dropped; callers keep it.
pub fn to_dms(decimal_degrees: f64) -> AngleDms {
    let x = decimal_degrees.abs();
    let d = x.floor();
    let total_seconds = ((x - d) * 3600.0).floor() as u32;
    AngleDms {
        degrees: d as u32,
        minutes: total_seconds / 60,
        seconds: total_seconds % 60,
    }
}

/// Clock minutes and seconds the sun runs fast or slow.
pub fn to_clock_minutes_seconds(eot_degrees: f64) -> ClockOffset {
    let total_seconds = (eot_degrees.abs() * MINUTES_PER_DEGREE * 60.0).floor() as u32;
    ClockOffset {
        minutes: total_seconds / 60,
        seconds: total_seconds % 60,
    }
}

pub fn month_abbrev(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i as usize))
        .copied()
        .unwrap_or("???")
}

pub fn date_line(ts: &CalendarTimestamp) -> String {
    format!("{} {} {}", month_abbrev(ts.month), ts.day, ts.year)
}

pub fn time_line(ts: &CalendarTimestamp) -> String {
    format!("{}:{:02}:{:02}", ts.hour, ts.minute, ts.second)
}

pub fn eot_clock_line(clock: ClockOffset, sign: SolarOffset) -> String {
    format!(
        "EoT {:02}m {:02}s {}",
        clock.minutes,
        clock.seconds,
        sign.symbol()
    )
}

pub fn eot_angle_line(angle: AngleDms, sign: SolarOffset) -> String {
    format!(
        "EoT {:02} {:02}'{:02}\"{}",
        angle.degrees,
        angle.minutes,
        angle.seconds,
        sign.symbol()
    )
}

pub fn declination_line(angle: AngleDms, sign: Hemisphere) -> String {
    format!(
        "Dec {:02} {:02}'{:02}\"{}",
        angle.degrees,
        angle.minutes,
        angle.seconds,
        sign.symbol()
    )
}

fn line(text: String, x: u8, y: u8) -> DisplayLine {
    DisplayLine { text, x, y }
}

/// Lays the reading out for the 84x48 panel, one text row every 10 px.
pub fn render_payload(reading: &SolarReading) -> DisplayPayload {
    let ts = &reading.timestamp;
    let eot = &reading.equation_of_time;
    let dec = &reading.declination;

    DisplayPayload {
        date: line(date_line(ts), 9, 0),
        time: line(time_line(ts), 18, 10),
        eot_clock: line(eot_clock_line(eot.clock, eot.sign), 0, 20),
        eot_angle: line(eot_angle_line(eot.angle, eot.sign), 0, 30),
        declination: line(declination_line(dec.angle, dec.sign), 0, 40),
    }
}
