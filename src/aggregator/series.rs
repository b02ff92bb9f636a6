//! Per-method series assembly from sweep records.

use crate::parser::gas_report::MethodGas;
use crate::parser::schema::GasRecord;
use log::debug;
use std::collections::BTreeMap;

/// All measurements for one method, ordered by sweep size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSeries {
    /// Method name
    pub method: String,

    /// `(size, avg_gas)` points, ascending by size
    pub points: Vec<(u64, u64)>,
}

/// Tag scraped entries with the sweep size they were measured at
///
/// **Public** - called once per sweep size by the driver
pub fn tag_with_size(entries: Vec<MethodGas>, size: u64) -> Vec<GasRecord> {
    entries
        .into_iter()
        .map(|entry| GasRecord {
            method: entry.method,
            size,
            avg_gas: entry.avg_gas,
        })
        .collect()
}

/// Group sweep records into per-method series
///
/// **Public** - main entry point for aggregation
///
/// Methods come out in lexicographic order and points in ascending size
/// order, so repeated runs over the same data produce identical artifacts.
pub fn build_method_series(records: &[GasRecord]) -> Vec<MethodSeries> {
    let mut by_method: BTreeMap<&str, Vec<(u64, u64)>> = BTreeMap::new();

    for record in records {
        by_method
            .entry(record.method.as_str())
            .or_default()
            .push((record.size, record.avg_gas));
    }

    debug!(
        "Built series for {} methods from {} records",
        by_method.len(),
        records.len()
    );

    by_method
        .into_iter()
        .map(|(method, mut points)| {
            points.sort_unstable_by_key(|&(size, _)| size);
            MethodSeries {
                method: method.to_string(),
                points,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(method: &str, size: u64, avg_gas: u64) -> GasRecord {
        GasRecord {
            method: method.to_string(),
            size,
            avg_gas,
        }
    }

    #[test]
    fn test_tag_with_size() {
        let entries = vec![
            MethodGas {
                method: "mint".to_string(),
                avg_gas: 51000,
            },
            MethodGas {
                method: "burn".to_string(),
                avg_gas: 32000,
            },
        ];

        let records = tag_with_size(entries, 300);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], record("mint", 300, 51000));
        assert_eq!(records[1], record("burn", 300, 32000));
    }

    #[test]
    fn test_build_method_series_groups_and_orders() {
        let records = vec![
            record("mint", 200, 52000),
            record("burn", 100, 30000),
            record("mint", 100, 51000),
            record("burn", 200, 31000),
        ];

        let series = build_method_series(&records);

        assert_eq!(series.len(), 2);
        // Lexicographic method order
        assert_eq!(series[0].method, "burn");
        assert_eq!(series[1].method, "mint");
        // Ascending size order within a method
        assert_eq!(series[0].points, vec![(100, 30000), (200, 31000)]);
        assert_eq!(series[1].points, vec![(100, 51000), (200, 52000)]);
    }

    #[test]
    fn test_build_method_series_empty() {
        let series = build_method_series(&[]);
        assert!(series.is_empty());
    }
}
