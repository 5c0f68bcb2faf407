use log::debug;
use std::process::Command;

use super::{QueryError, QueryOutcome, QueryRequest, QueryRunner};
use crate::catalog;

/// Runs the external SARA search client as a blocking child process.
#[derive(Debug, Clone)]
pub struct SearchCommand {
    program: String,
}

impl SearchCommand {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SearchCommand {
    fn default() -> Self {
        Self::new(catalog::SEARCH_PROGRAM)
    }
}

impl QueryRunner for SearchCommand {
    fn run_query(&self, request: &QueryRequest) -> Result<QueryOutcome, QueryError> {
        debug!("spawning {} with {} filters", self.program, request.filters.len());

        let status = Command::new(&self.program)
            .args(request.args())
            .status()
            .map_err(|source| QueryError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(QueryOutcome::Success)
        } else {
            Ok(QueryOutcome::Failed {
                code: status.code(),
            })
        }
    }

    fn describe(&self, request: &QueryRequest) -> String {
        format!("{} {}", self.program, request)
    }
}
