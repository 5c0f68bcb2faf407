pub mod batch_runner;
pub mod error;
pub mod table;

pub use batch_runner::{BatchAggregator, RunSummary, feature_file_name};
pub use error::AggregateError;
pub use table::{QueryRecord, ResultTable};
