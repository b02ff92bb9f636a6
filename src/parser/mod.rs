//! Gas-report scraping and schema definitions.
//!
//! This module handles:
//! - Scraping per-method gas entries from gas-reporter table lines
//! - Defining the record and report schema

pub mod gas_report;
pub mod schema;

// Re-export main types
pub use gas_report::{GasReportParser, MethodGas};
pub use schema::{GasRecord, MethodStats, SweepReport};
