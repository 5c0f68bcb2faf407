//! Sentinel archive volume report.
//!
//! Runs the SARA catalogue search client for every fiscal year, region and
//! product in a [`config::Config`] and summarises the download sizes of the
//! matched products into `region-stats-S2.csv`.

pub mod aggregator;
pub mod catalog;
pub mod config;
pub mod date_gen;
pub mod features;
pub mod query;
pub mod report;
