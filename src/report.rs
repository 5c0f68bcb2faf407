use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::aggregator::ResultTable;

pub const SUMMARY_FILE_NAME: &str = "region-stats-S2.csv";

/// The leading empty column holds the row index.
const HEADER: [&str; 7] = [
    "",
    "region",
    "sentinel_mission",
    "product",
    "start_date",
    "end_date",
    "bytes",
];

#[derive(Serialize)]
struct SummaryRow<'a> {
    index: usize,
    region: &'a str,
    sentinel_mission: &'a str,
    product: &'a str,
    start_date: String,
    end_date: String,
    bytes: u64,
}

/// Writes the summary table into `outdir` and returns the file path.
pub fn write_summary(table: &ResultTable, outdir: &Path) -> csv::Result<PathBuf> {
    let path = outdir.join(SUMMARY_FILE_NAME);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)?;

    writer.write_record(HEADER)?;
    for (index, record) in table.rows().iter().enumerate() {
        writer.serialize(SummaryRow {
            index,
            region: &record.region,
            sentinel_mission: &record.mission_id,
            product: &record.product_type,
            start_date: record.window.start_date(),
            end_date: record.window.end_date(),
            bytes: record.bytes,
        })?;
    }
    writer.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::QueryRecord;
    use crate::date_gen::TimeWindow;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn record(region: &str, product_type: &str, bytes: u64) -> QueryRecord {
        QueryRecord {
            region: region.to_string(),
            mission_id: "2".to_string(),
            product_type: product_type.to_string(),
            window: TimeWindow {
                start: NaiveDate::from_ymd_opt(2016, 7, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2017, 7, 1).unwrap(),
            },
            bytes,
        }
    }

    #[test]
    fn test_write_summary() {
        let dir = tempdir().unwrap();
        let mut table = ResultTable::default();
        table.push(record("Asia", "S2MSIL1C", 1000));
        table.push(record("Europe", "S2MSIL2A", 42));

        let path = write_summary(&table, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("region-stats-S2.csv"));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            ",region,sentinel_mission,product,start_date,end_date,bytes\n\
             0,Asia,2,S2MSIL1C,2016-07-01,2017-07-01,1000\n\
             1,Europe,2,S2MSIL2A,2016-07-01,2017-07-01,42\n"
        );
    }

    #[test]
    fn test_empty_table_writes_header() {
        let dir = tempdir().unwrap();

        let path = write_summary(&ResultTable::default(), dir.path()).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            ",region,sentinel_mission,product,start_date,end_date,bytes\n"
        );
    }
}
