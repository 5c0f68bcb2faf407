pub mod search;
pub mod types;

pub use search::SearchCommand;
pub use types::{QueryError, QueryFilter, QueryOutcome, QueryRequest, QueryRunner};
