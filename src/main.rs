use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;

use region_stats::aggregator::BatchAggregator;
use region_stats::config::Config;
use region_stats::query::SearchCommand;

/// Query the Sentinel archive per fiscal year, region and product, and
/// summarise the result sizes into region-stats-S2.csv.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// The output directory in which to write the results.
    #[arg(long)]
    outdir: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = Config::default();
    let runner = SearchCommand::new(config.search_program());
    info!(
        "Starting region statistics with {} (bytes policy: {})",
        runner.program(),
        config.bytes_policy()
    );
    let aggregator = BatchAggregator::new(config, runner);

    let summary = aggregator.run(&args.outdir)?;

    println!(
        "{} of {} queries summarised in {}",
        summary.table.len(),
        summary.attempted,
        summary.summary_path.display()
    );

    Ok(())
}
