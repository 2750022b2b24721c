use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolarError};
use crate::types::TimezoneOffset;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Hours subtracted from the clock reading to get UT. See [`TimezoneOffset`].
    pub tz_offset: f64,
    pub tick_interval_ms: u64,
    /// Stop after this many frames; run forever when unset.
    pub max_ticks: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tz_offset: 0.0,
            tick_interval_ms: 1000,
            max_ticks: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(|e| SolarError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SolarError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        TimezoneOffset::new(self.tz_offset)?;
        if self.tick_interval_ms == 0 {
            return Err(SolarError::Config("tick_interval_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn timezone(&self) -> Result<TimezoneOffset> {
        TimezoneOffset::new(self.tz_offset)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
