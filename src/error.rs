use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolarError>;

#[derive(Error, Debug)]
pub enum SolarError {
    #[error("invalid timestamp: {field} = {value}")]
    InvalidTimestamp { field: &'static str, value: i64 },

    #[error("timezone offset out of range: {0} h")]
    InvalidTimezone(f64),

    #[error("clock read failed: {0}")]
    Clock(String),

    #[error("display write failed: {0}")]
    Display(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl SolarError {
    pub(crate) fn invalid_timestamp(field: &'static str, value: impl Into<i64>) -> Self {
        SolarError::InvalidTimestamp {
            field,
            value: value.into(),
        }
    }
}
