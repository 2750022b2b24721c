use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::angles::compute_reading;
use crate::clock::ClockSource;
use crate::config::Config;
use crate::display::DisplaySink;
use crate::error::Result;
use crate::format::render_payload;
use crate::types::{SolarReading, TimezoneOffset};

/// Reads the clock, computes, and pushes a frame to the display, once
/// per tick.
pub struct Orchestrator<C, D> {
    clock: C,
    display: D,
    tz: TimezoneOffset,
    interval: Duration,
    max_ticks: Option<u64>,
}

impl<C: ClockSource, D: DisplaySink> Orchestrator<C, D> {
    pub fn new(clock: C, display: D, config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            clock,
            display,
            tz: config.timezone()?,
            interval: config.tick_interval(),
            max_ticks: config.max_ticks,
        })
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_parts(self) -> (C, D) {
        (self.clock, self.display)
    }

    pub fn tick(&mut self) -> Result<SolarReading> {
        let ts = self.clock.now()?;
        ts.validate()?;

        let reading = compute_reading(&ts, self.tz);
        debug!(
            timestamp = %ts,
            julian_century = reading.julian_century,
            declination = reading.declination.decimal_degrees,
            eot_minutes = reading.equation_of_time.minutes(),
            "computed solar reading"
        );

        self.display.show(&render_payload(&reading))?;
        Ok(reading)
    }

    /// Ticks until `max_ticks` frames have been shown, or forever.
    ///
    /// Deadlines advance by a fixed interval from the first tick, so the
    /// time spent computing does not push later frames back. A tick that
    /// overruns its slot is followed immediately by the next one.
    pub fn run(&mut self) -> Result<u64> {
        info!(
            tz_offset = self.tz.hours(),
            interval_ms = self.interval.as_millis() as u64,
            max_ticks = ?self.max_ticks,
            "starting refresh loop"
        );

        let mut deadline = Instant::now();
        let mut ticks = 0u64;
        while self.max_ticks.map_or(true, |max| ticks < max) {
            self.tick()?;
            ticks += 1;

            if self.max_ticks == Some(ticks) {
                break;
            }

            deadline += self.interval;
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            } else {
                warn!(
                    behind_ms = (now - deadline).as_millis() as u64,
                    "tick overran its interval"
                );
                deadline = now;
            }
        }

        info!(ticks, "refresh loop finished");
        Ok(ticks)
    }
}
