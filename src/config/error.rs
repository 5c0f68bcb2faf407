use crate::config::bytes_policy::BytesPolicyParseError;

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    YearOrder { start_year: i32, end_year: i32 },
    InvalidYear(i32),
    NoRegions,
    BytesPolicy(BytesPolicyParseError),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::YearOrder {
                start_year,
                end_year,
            } => write!(
                f,
                "end_year ({}) must be later than start_year ({})",
                end_year, start_year
            ),
            ConfigError::InvalidYear(year) => write!(f, "No July 1st for year {}", year),
            ConfigError::NoRegions => write!(f, "At least one region is required"),
            ConfigError::BytesPolicy(e) => write!(f, "{}", e),
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::BytesPolicy(e) => Some(e),
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<BytesPolicyParseError> for ConfigError {
    fn from(err: BytesPolicyParseError) -> ConfigError {
        ConfigError::BytesPolicy(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}
