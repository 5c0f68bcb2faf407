use chrono::Local;
use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::{AggregateError, QueryRecord, ResultTable};
use crate::config::{BytesPolicy, Combination, Config};
use crate::date_gen::{TimeWindow, WindowGenerator};
use crate::features::read_feature_collection;
use crate::query::{QueryFilter, QueryOutcome, QueryRequest, QueryRunner};
use crate::report;

/// Result of a complete run over the query grid.
#[derive(Debug)]
pub struct RunSummary {
    pub table: ResultTable,
    /// Number of cells for which a query was issued.
    pub attempted: usize,
    /// Cells skipped because the search client exited with an error.
    pub failed: usize,
    pub summary_path: PathBuf,
}

/// Queries every (window, region, combination) cell of the configured grid
/// and summarises the download sizes.
#[derive(Debug)]
pub struct BatchAggregator<R: QueryRunner> {
    config: Config,
    runner: R,
}

/// Name of the feature file written for one cell, e.g.
/// `sentinel-2-S2MSIL1C-Asia-2016-07-01-2017-07-01.json`.
pub fn feature_file_name(combination: &Combination, region: &str, window: &TimeWindow) -> String {
    format!(
        "sentinel-{}-{}-{}-{}-{}.json",
        combination.mission_id,
        combination.product_type,
        region,
        window.start_date(),
        window.end_date()
    )
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

impl<R: QueryRunner> BatchAggregator<R> {
    pub fn new(config: Config, runner: R) -> Self {
        BatchAggregator { config, runner }
    }

    pub fn run(&self, outdir: &Path) -> Result<RunSummary, AggregateError> {
        // The directory must accept new files before any query is issued
        fs::create_dir_all(outdir)
            .and_then(|_| tempfile::tempfile_in(outdir))
            .map_err(|source| AggregateError::OutputDir {
                path: outdir.to_path_buf(),
                source,
            })?;

        let windows = WindowGenerator::new(self.config.fiscal_years().clone()).generate_windows();
        let combinations: Vec<&Combination> = self.config.enabled_combinations().collect();
        info!(
            "Querying {} windows x {} regions x {} products into {}",
            windows.len(),
            self.config.regions().len(),
            combinations.len(),
            outdir.display()
        );

        let mut table = ResultTable::default();
        let mut attempted = 0;
        let mut failed = 0;

        for window in &windows {
            for region in self.config.regions() {
                for combination in &combinations {
                    attempted += 1;
                    match self.query_cell(outdir, window, region, combination)? {
                        Some(record) => table.push(record),
                        None => failed += 1,
                    }
                }
            }
        }

        if self.config.bytes_policy() == BytesPolicy::LastValue {
            table.broadcast_last_bytes();
        }

        let summary_path = report::write_summary(&table, outdir)?;
        info!(
            "Wrote {} rows to {} ({} of {} queries failed)",
            table.len(),
            summary_path.display(),
            failed,
            attempted
        );

        Ok(RunSummary {
            table,
            attempted,
            failed,
            summary_path,
        })
    }

    /// Runs the search for one cell. `Ok(None)` means the search client
    /// failed and the cell is skipped.
    fn query_cell(
        &self,
        outdir: &Path,
        window: &TimeWindow,
        region: &str,
        combination: &Combination,
    ) -> Result<Option<QueryRecord>, AggregateError> {
        let output_path = outdir.join(feature_file_name(combination, region, window));
        let request = QueryRequest {
            mission_id: combination.mission_id.clone(),
            filters: vec![
                QueryFilter::StartDate(window.start_date()),
                QueryFilter::CompletionDate(window.end_date()),
                QueryFilter::ProductType(combination.product_type.clone()),
                QueryFilter::Name(region.to_string()),
            ],
            output_path,
        };

        let command = self.runner.describe(&request);
        info!("executing command=[{}] time={}", command, timestamp());

        if let QueryOutcome::Failed { code } = self.runner.run_query(&request)? {
            let status = code.map_or_else(|| "killed by signal".to_string(), |c| c.to_string());
            error!(
                "Failed to execute command=[{}] status={} time={}",
                command,
                status,
                timestamp()
            );
            return Ok(None);
        }

        let collection = read_feature_collection(&request.output_path).map_err(|source| {
            AggregateError::Features {
                path: request.output_path.clone(),
                source,
            }
        })?;
        let bytes = collection.total_bytes();
        debug!(
            "{} features, {} bytes for {} {} {} {}",
            collection.features.len(),
            bytes,
            combination.product_type,
            region,
            window.start_date(),
            window.end_date()
        );

        Ok(Some(QueryRecord {
            region: region.to_string(),
            mission_id: combination.mission_id.clone(),
            product_type: combination.product_type.clone(),
            window: *window,
            bytes,
        }))
    }
}
