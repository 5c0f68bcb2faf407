use std::fmt;
use std::str::FromStr;

/// How the `bytes` column of the summary is filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BytesPolicy {
    /// Each row carries the total of its own combination.
    #[default]
    PerRow,
    /// Every row carries the total of the last successful combination,
    /// matching the historical summary files.
    LastValue,
}

impl FromStr for BytesPolicy {
    type Err = BytesPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per_row" => Ok(BytesPolicy::PerRow),
            "last_value" => Ok(BytesPolicy::LastValue),
            other => Err(BytesPolicyParseError(other.to_string())),
        }
    }
}

impl fmt::Display for BytesPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BytesPolicy::PerRow => write!(f, "per_row"),
            BytesPolicy::LastValue => write!(f, "last_value"),
        }
    }
}

#[derive(Debug)]
pub struct BytesPolicyParseError(String);

impl fmt::Display for BytesPolicyParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid bytes policy '{}', expected 'per_row' or 'last_value'",
            self.0
        )
    }
}

impl std::error::Error for BytesPolicyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_policies() {
        assert_eq!("per_row".parse::<BytesPolicy>().unwrap(), BytesPolicy::PerRow);
        assert_eq!(
            "last_value".parse::<BytesPolicy>().unwrap(),
            BytesPolicy::LastValue
        );
    }

    #[test]
    fn test_parse_unknown_policy() {
        let err = "sum".parse::<BytesPolicy>().unwrap_err();
        assert!(err.to_string().contains("'sum'"));
    }
}
