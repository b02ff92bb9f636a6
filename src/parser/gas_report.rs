//! Gas-reporter table scraper.
//!
//! hardhat-gas-reporter prints a `·`-separated table at the end of a test
//! run, one row per contract method:
//!
//! ```text
//! |  NMFT  ·  commitBatch  ·  41203  ·  98452  ·  74827  ·  12  ·  -  |
//! ```
//!
//! The extraction pattern anchors on the contract column, captures the
//! method name, skips the min/max columns, and captures the average-gas
//! column. Everything else in the output is noise and contributes nothing.

use crate::utils::error::ParseError;
use log::{debug, warn};
use regex::Regex;

/// A scraped `(method, avg_gas)` pair, not yet tagged with a sweep size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodGas {
    /// Method name from the table row
    pub method: String,

    /// Average gas from the table row
    pub avg_gas: u64,
}

/// Line scraper for one contract's rows in the gas-reporter table
#[derive(Debug, Clone)]
pub struct GasReportParser {
    pattern: Regex,
}

impl GasReportParser {
    /// Build a scraper anchored on `contract`
    ///
    /// **Public** - constructed once per sweep
    ///
    /// # Errors
    /// * `ParseError::InvalidPattern` - the interpolated pattern failed to
    ///   compile (the contract name is regex-escaped, so this is unexpected)
    pub fn new(contract: &str) -> Result<Self, ParseError> {
        let pattern = Regex::new(&format!(
            r"\|\s+{}\s+·\s+(\w+)\s+·(?:[^·]+·){{2}}\s*(\d+)\s+·",
            regex::escape(contract)
        ))?;

        Ok(Self { pattern })
    }

    /// Scrape a single line
    ///
    /// Returns `None` for lines that are not a gas table row for our
    /// contract, and for rows whose gas column overflows u64 (skipped
    /// with a warning).
    pub fn parse_line(&self, line: &str) -> Option<MethodGas> {
        let caps = self.pattern.captures(line)?;

        let method = caps[1].to_string();
        let avg_gas = match caps[2].parse::<u64>() {
            Ok(gas) => gas,
            Err(e) => {
                warn!("Gas value out of range for {}: {}", method, e);
                return None;
            }
        };

        Some(MethodGas { method, avg_gas })
    }

    /// Scrape a full test-runner output
    ///
    /// **Public** - called once per sweep size with the captured stdout
    pub fn parse_output(&self, output: &str) -> Vec<MethodGas> {
        let entries: Vec<MethodGas> = output
            .lines()
            .filter_map(|line| self.parse_line(line))
            .collect();

        debug!("Scraped {} gas entries from runner output", entries.len());

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_ROW: &str =
        "|  NMFT  ·  commitBatch  ·  41203  ·  98452  ·   74827  ·  12  ·  -  |";

    #[test]
    fn test_parse_line_matches_table_row() {
        let parser = GasReportParser::new("NMFT").unwrap();
        let entry = parser.parse_line(TABLE_ROW).unwrap();

        assert_eq!(entry.method, "commitBatch");
        assert_eq!(entry.avg_gas, 74827);
    }

    #[test]
    fn test_parse_line_ignores_other_contracts() {
        let parser = GasReportParser::new("Escrow").unwrap();
        assert!(parser.parse_line(TABLE_ROW).is_none());
    }

    #[test]
    fn test_parse_line_ignores_prose() {
        let parser = GasReportParser::new("NMFT").unwrap();
        assert!(parser.parse_line("  42 passing (12s)").is_none());
        assert!(parser.parse_line("").is_none());
    }

    #[test]
    fn test_parse_output_collects_all_rows() {
        let output = format!(
            "Compiled 3 Solidity files\n{}\n|  NMFT  ·  submitProof  ·  9901  ·  12044  ·   10973  ·  12  ·  -  |\n  12 passing\n",
            TABLE_ROW
        );

        let parser = GasReportParser::new("NMFT").unwrap();
        let entries = parser.parse_output(&output);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].method, "commitBatch");
        assert_eq!(entries[1].method, "submitProof");
        assert_eq!(entries[1].avg_gas, 10973);
    }

    #[test]
    fn test_contract_name_is_escaped() {
        // A metacharacter in the contract name must not break the pattern
        let parser = GasReportParser::new("Token(V2)").unwrap();
        let row = "|  Token(V2)  ·  mint  ·  100  ·  200  ·   150  ·  3  ·  -  |";

        let entry = parser.parse_line(row).unwrap();
        assert_eq!(entry.method, "mint");
        assert_eq!(entry.avg_gas, 150);
    }

    #[test]
    fn test_overflowing_gas_value_is_skipped() {
        let parser = GasReportParser::new("NMFT").unwrap();
        let row = "|  NMFT  ·  mint  ·  1  ·  2  ·   99999999999999999999999999  ·  3  ·  -  |";

        assert!(parser.parse_line(row).is_none());
    }
}
