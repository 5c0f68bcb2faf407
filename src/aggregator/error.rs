use std::fmt;
use std::path::PathBuf;

use crate::features::FeatureError;
use crate::query::QueryError;

#[derive(Debug)]
pub enum AggregateError {
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    Query(QueryError),
    Features {
        path: PathBuf,
        source: FeatureError,
    },
    Report(csv::Error),
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::OutputDir { path, source } => {
                write!(
                    f,
                    "Cannot use output directory {}: {}",
                    path.display(),
                    source
                )
            }
            AggregateError::Query(e) => write!(f, "{}", e),
            AggregateError::Features { path, source } => {
                write!(f, "Invalid search results in {}: {}", path.display(), source)
            }
            AggregateError::Report(e) => write!(f, "Failed to write summary: {}", e),
        }
    }
}

impl std::error::Error for AggregateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AggregateError::OutputDir { source, .. } => Some(source),
            AggregateError::Query(e) => Some(e),
            AggregateError::Features { source, .. } => Some(source),
            AggregateError::Report(e) => Some(e),
        }
    }
}

impl From<QueryError> for AggregateError {
    fn from(err: QueryError) -> AggregateError {
        AggregateError::Query(err)
    }
}

impl From<csv::Error> for AggregateError {
    fn from(err: csv::Error) -> AggregateError {
        AggregateError::Report(err)
    }
}
