use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// Runs one catalogue search and reports whether it succeeded.
///
/// Implementations must write the matched features to the request's
/// `output_path` when they return [`QueryOutcome::Success`].
pub trait QueryRunner {
    fn run_query(&self, request: &QueryRequest) -> Result<QueryOutcome, QueryError>;

    /// Human-readable command line for log entries.
    fn describe(&self, request: &QueryRequest) -> String {
        request.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    Success,
    Failed { code: Option<i32> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFilter {
    StartDate(String),
    CompletionDate(String),
    ProductType(String),
    Name(String),
}

impl fmt::Display for QueryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryFilter::StartDate(v) => write!(f, "startDate={}", v),
            QueryFilter::CompletionDate(v) => write!(f, "completionDate={}", v),
            QueryFilter::ProductType(v) => write!(f, "productType={}", v),
            QueryFilter::Name(v) => write!(f, "name={}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub mission_id: String,
    pub filters: Vec<QueryFilter>,
    pub output_path: PathBuf,
}

impl QueryRequest {
    /// Arguments passed to the search client, in order.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["--sentinel".into(), self.mission_id.clone().into()];

        for filter in &self.filters {
            args.push("-q".into());
            args.push(filter.to_string().into());
        }

        args.push("--jsonfeaturesfile".into());
        args.push(self.output_path.clone().into_os_string());
        args
    }
}

impl fmt::Display for QueryRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self
            .args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        write!(f, "{}", args.join(" "))
    }
}

#[derive(Debug)]
pub enum QueryError {
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Spawn { program, source } => {
                write!(f, "Failed to start '{}': {}", program, source)
            }
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Spawn { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> QueryRequest {
        QueryRequest {
            mission_id: "2".to_string(),
            filters: vec![
                QueryFilter::StartDate("2016-07-01".to_string()),
                QueryFilter::CompletionDate("2017-07-01".to_string()),
                QueryFilter::ProductType("S2MSIL1C".to_string()),
                QueryFilter::Name("Asia".to_string()),
            ],
            output_path: PathBuf::from("/tmp/out.json"),
        }
    }

    #[test]
    fn test_args_order() {
        let args: Vec<String> = request()
            .args()
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect();

        assert_eq!(
            args,
            vec![
                "--sentinel",
                "2",
                "-q",
                "startDate=2016-07-01",
                "-q",
                "completionDate=2017-07-01",
                "-q",
                "productType=S2MSIL1C",
                "-q",
                "name=Asia",
                "--jsonfeaturesfile",
                "/tmp/out.json",
            ]
        );
    }

    #[test]
    fn test_display_joins_args() {
        let line = request().to_string();
        assert!(line.starts_with("--sentinel 2 -q startDate=2016-07-01"));
        assert!(line.ends_with("--jsonfeaturesfile /tmp/out.json"));
    }
}
