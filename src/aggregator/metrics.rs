//! Summary statistics for a sweep.
//!
//! The per-method stats answer the question the sweep exists for:
//! how does each method's gas cost move as the batch size grows.

use super::series::MethodSeries;
use crate::parser::schema::{GasRecord, MethodStats, SweepReport};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use log::debug;

/// Calculate per-method statistics from assembled series
///
/// **Public** - main entry point for metrics calculation
pub fn calculate_method_stats(series: &[MethodSeries]) -> Vec<MethodStats> {
    debug!("Calculating stats for {} methods", series.len());

    series.iter().map(stats_for_series).collect()
}

/// Compute stats for a single method's series
///
/// **Private** - internal conversion
fn stats_for_series(series: &MethodSeries) -> MethodStats {
    let samples = series.points.len();
    let min_gas = series.points.iter().map(|&(_, gas)| gas).min().unwrap_or(0);
    let max_gas = series.points.iter().map(|&(_, gas)| gas).max().unwrap_or(0);

    let total: u64 = series.points.iter().map(|&(_, gas)| gas).sum();
    let mean_gas = total / samples.max(1) as u64;

    let growth_factor = if min_gas > 0 {
        max_gas as f64 / min_gas as f64
    } else {
        0.0
    };

    MethodStats {
        method: series.method.clone(),
        samples,
        min_gas,
        max_gas,
        mean_gas,
        growth_factor,
    }
}

/// One-line human summary of a method's stats
///
/// **Public** - for logging and --summary output
pub fn stats_line(stats: &MethodStats) -> String {
    format!(
        "{}: {} samples | min {} | max {} | mean {} | growth {:.2}x",
        stats.method,
        stats.samples,
        stats.min_gas,
        stats.max_gas,
        stats.mean_gas,
        stats.growth_factor
    )
}

/// Assemble the versioned sweep report
///
/// **Public** - used by the sweep command to create the JSON artifact
pub fn build_report(
    contract: &str,
    min_size: u64,
    max_size: u64,
    step: u64,
    records: &[GasRecord],
    methods: Vec<MethodStats>,
) -> SweepReport {
    use chrono::Utc;

    SweepReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        contract: contract.to_string(),
        min_size,
        max_size,
        step,
        record_count: records.len(),
        methods,
        generated_at: Utc::now().to_rfc3339(),
    }
}
