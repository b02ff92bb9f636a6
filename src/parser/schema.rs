//! Output schema definitions for sweep data.
//!
//! This module defines the rows written to the CSV artifact and the
//! structure of the optional JSON sweep report.
//! The report schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// One scraped measurement: a method's average gas at one sweep size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasRecord {
    /// Method name as printed in the gas-reporter table
    pub method: String,

    /// Sweep parameter (transaction batch size) the suite ran with
    pub size: u64,

    /// Average gas the reporter measured for this method
    pub avg_gas: u64,
}

/// Top-level sweep report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Contract the extraction pattern was anchored on
    pub contract: String,

    /// Smallest batch size in the sweep
    pub min_size: u64,

    /// Largest batch size in the sweep (inclusive)
    pub max_size: u64,

    /// Batch size increment
    pub step: u64,

    /// Total records scraped across the sweep
    pub record_count: usize,

    /// Per-method summary statistics
    pub methods: Vec<MethodStats>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Summary statistics for one method across the sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodStats {
    /// Method name
    pub method: String,

    /// Number of sweep points with a measurement
    pub samples: usize,

    /// Smallest average gas seen across the sweep
    pub min_gas: u64,

    /// Largest average gas seen across the sweep
    pub max_gas: u64,

    /// Mean of the per-size averages
    pub mean_gas: u64,

    /// max_gas / min_gas, how strongly the method's cost scales
    pub growth_factor: f64,
}
