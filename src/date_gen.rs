use chrono::NaiveDate;
use std::fmt;

use crate::config::FiscalYears;

/// A one-year query interval between two consecutive fiscal boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeWindow {
    pub fn start_date(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_date(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_date(), self.end_date())
    }
}

pub struct WindowGenerator {
    fiscal_years: FiscalYears,
}

impl WindowGenerator {
    pub fn new(fiscal_years: FiscalYears) -> Self {
        Self { fiscal_years }
    }

    pub fn generate_boundaries(&self) -> Vec<NaiveDate> {
        self.fiscal_years.clone().collect()
    }

    /// Pairs each boundary with the next one.
    pub fn generate_windows(&self) -> Vec<TimeWindow> {
        self.generate_boundaries()
            .windows(2)
            .map(|pair| TimeWindow {
                start: pair[0],
                end: pair[1],
            })
            .collect()
    }
}
