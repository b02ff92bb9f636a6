//! JSON sweep-report writer and reader.

use super::{ensure_parent_dirs, file_size, validate_output_path};
use crate::parser::schema::SweepReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a sweep report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - path cannot be created or is invalid
pub fn write_report(report: &SweepReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing sweep report to: {}", output_path.display());

    validate_output_path(output_path)?;
    ensure_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!(
        "Report written successfully ({} bytes)",
        file_size(output_path)
    );

    Ok(())
}

/// Read a sweep report from a JSON file
///
/// **Public** - used by the validate command and tests
pub fn read_report(input_path: impl AsRef<Path>) -> Result<SweepReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading sweep report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: SweepReport = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} methods",
        report.version,
        report.methods.len()
    );

    Ok(report)
}
