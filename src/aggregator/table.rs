use crate::date_gen::TimeWindow;

/// One successfully queried (window, region, combination) cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    pub region: String,
    pub mission_id: String,
    pub product_type: String,
    pub window: TimeWindow,
    pub bytes: u64,
}

/// Rows in the order they were queried.
#[derive(Debug, Default, Clone)]
pub struct ResultTable {
    rows: Vec<QueryRecord>,
}

impl ResultTable {
    pub fn push(&mut self, record: QueryRecord) {
        self.rows.push(record);
    }

    pub fn rows(&self) -> &[QueryRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Overwrites every row's byte total with the one of the last row.
    pub fn broadcast_last_bytes(&mut self) {
        if let Some(last) = self.rows.last().map(|r| r.bytes) {
            for row in &mut self.rows {
                row.bytes = last;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(region: &str, bytes: u64) -> QueryRecord {
        QueryRecord {
            region: region.to_string(),
            mission_id: "2".to_string(),
            product_type: "S2MSIL1C".to_string(),
            window: TimeWindow {
                start: NaiveDate::from_ymd_opt(2015, 7, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2016, 7, 1).unwrap(),
            },
            bytes,
        }
    }

    #[test]
    fn test_broadcast_last_bytes() {
        let mut table = ResultTable::default();
        table.push(record("Asia", 10));
        table.push(record("Europe", 20));
        table.push(record("Africa", 30));

        table.broadcast_last_bytes();

        assert!(table.rows().iter().all(|r| r.bytes == 30));
        assert_eq!(table.rows()[0].region, "Asia");
    }

    #[test]
    fn test_broadcast_on_empty_table() {
        let mut table = ResultTable::default();
        table.broadcast_last_bytes();
        assert!(table.is_empty());
    }
}
