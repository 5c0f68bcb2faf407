use chrono::{Datelike, Months, NaiveDate};

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::catalog::{self, CatalogEntry};

pub mod error;
pub use error::ConfigError;

pub mod bytes_policy;
pub use bytes_policy::{BytesPolicy, BytesPolicyParseError};

/// A (product type, Sentinel mission) pair to query.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Combination {
    pub product_type: String,
    pub mission_id: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Combination {
    pub fn new(product_type: &str, mission_id: &str) -> Self {
        Self {
            product_type: product_type.to_string(),
            mission_id: mission_id.to_string(),
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl From<&CatalogEntry> for Combination {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            product_type: entry.product_type.to_string(),
            mission_id: entry.mission_id.to_string(),
            enabled: entry.enabled,
        }
    }
}

/// Fiscal-year boundaries (July 1st) from `start_year` to `end_year`
/// inclusive. Iterating yields each boundary in turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalYears {
    start_date: NaiveDate,
    end_date: NaiveDate,
    next_date: Option<NaiveDate>,
}

impl FiscalYears {
    pub fn new(start_year: i32, end_year: i32) -> Result<Self, ConfigError> {
        if end_year <= start_year {
            return Err(ConfigError::YearOrder {
                start_year,
                end_year,
            });
        }

        let start_date = Self::july_first(start_year)?;
        Ok(Self {
            start_date,
            end_date: Self::july_first(end_year)?,
            next_date: Some(start_date),
        })
    }

    fn july_first(year: i32) -> Result<NaiveDate, ConfigError> {
        NaiveDate::from_ymd_opt(year, 7, 1).ok_or(ConfigError::InvalidYear(year))
    }

    pub fn start_year(&self) -> i32 {
        self.start_date.year()
    }

    pub fn end_year(&self) -> i32 {
        self.end_date.year()
    }

    fn increment_date(current_date: NaiveDate) -> Option<NaiveDate> {
        current_date.checked_add_months(Months::new(12))
    }
}

impl Iterator for FiscalYears {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current_date = self.next_date.filter(|date| *date <= self.end_date)?;
        self.next_date = Self::increment_date(current_date);
        Some(current_date)
    }
}

/// The query grid and how to run it.
#[derive(Debug, Clone)]
pub struct Config {
    fiscal_years: FiscalYears,
    regions: Vec<String>,
    combinations: Vec<Combination>,
    search_program: String,
    bytes_policy: BytesPolicy,
}

// Builds a Config from a JSON document, checking the year range, the region list and the
// bytes policy before anything is queried.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            start_year: i32,
            end_year: i32,
            regions: Vec<String>,
            combinations: Vec<Combination>,
            search_program: Option<String>,
            bytes_policy: Option<String>,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        let fiscal_years =
            FiscalYears::new(helper.start_year, helper.end_year).map_err(D::Error::custom)?;

        if helper.regions.is_empty() {
            return Err(D::Error::custom(ConfigError::NoRegions));
        }

        let bytes_policy = match helper.bytes_policy {
            Some(policy) => policy
                .parse::<BytesPolicy>()
                .map_err(|e| D::Error::custom(ConfigError::from(e)))?,
            None => BytesPolicy::default(),
        };

        Ok(Config {
            fiscal_years,
            regions: helper.regions,
            combinations: helper.combinations,
            search_program: helper
                .search_program
                .unwrap_or_else(|| catalog::SEARCH_PROGRAM.to_string()),
            bytes_policy,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        let start_date =
            NaiveDate::from_ymd_opt(catalog::FISCAL_START_YEAR, 7, 1).unwrap_or_default();
        let fiscal_years = FiscalYears {
            start_date,
            end_date: NaiveDate::from_ymd_opt(catalog::FISCAL_END_YEAR, 7, 1).unwrap_or_default(),
            next_date: Some(start_date),
        };

        Self {
            fiscal_years,
            regions: catalog::REGIONS.iter().map(|r| r.to_string()).collect(),
            combinations: catalog::PRODUCTS.iter().map(Combination::from).collect(),
            search_program: catalog::SEARCH_PROGRAM.to_string(),
            bytes_policy: BytesPolicy::default(),
        }
    }
}

impl Config {
    pub fn new(
        fiscal_years: FiscalYears,
        regions: Vec<String>,
        combinations: Vec<Combination>,
    ) -> Self {
        Self {
            fiscal_years,
            regions,
            combinations,
            search_program: catalog::SEARCH_PROGRAM.to_string(),
            bytes_policy: BytesPolicy::default(),
        }
    }

    pub fn with_search_program(mut self, program: &str) -> Self {
        self.search_program = program.to_string();
        self
    }

    pub fn with_bytes_policy(mut self, bytes_policy: BytesPolicy) -> Self {
        self.bytes_policy = bytes_policy;
        self
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn fiscal_years(&self) -> &FiscalYears {
        &self.fiscal_years
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    pub fn enabled_combinations(&self) -> impl Iterator<Item = &Combination> {
        self.combinations.iter().filter(|c| c.enabled)
    }

    pub fn search_program(&self) -> &str {
        &self.search_program
    }

    pub fn bytes_policy(&self) -> BytesPolicy {
        self.bytes_policy
    }
}
