use crate::output::read_report;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a sweep report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid sweep report");
    println!("  Version:  {}", report.version);
    println!("  Contract: {}", report.contract);
    println!(
        "  Sizes:    {}..={} step {}",
        report.min_size, report.max_size, report.step
    );
    println!("  Records:  {}", report.record_count);
    println!("  Methods:  {}", report.methods.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Gas Sweep v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Gas usage sweeps and reporting for Hardhat contract test suites.");
}
