//! CSV results writer and reader.
//!
//! `gas_results.csv` is the primary artifact: a fixed
//! `method,size,avg_gas` header and one row per scraped measurement,
//! in sweep order.

use super::{ensure_parent_dirs, file_size, validate_output_path};
use crate::parser::schema::GasRecord;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write sweep records to a CSV file
///
/// **Public** - main entry point for CSV output
///
/// The header row comes from the record's field names, so the column
/// order is fixed at `method,size,avg_gas`.
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::CsvFailed` - record serialization error
/// * `OutputError::InvalidPath` - path cannot be created or is invalid
pub fn write_records(
    records: &[GasRecord],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!(
        "Writing {} records to: {}",
        records.len(),
        output_path.display()
    );

    validate_output_path(output_path)?;
    ensure_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Results written successfully ({} bytes)",
        file_size(output_path)
    );

    Ok(())
}

/// Read sweep records back from a CSV file
///
/// **Public** - used by the re-plot and validation paths
pub fn read_records(input_path: impl AsRef<Path>) -> Result<Vec<GasRecord>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading results from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    debug!("Loaded {} records", records.len());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_records() -> Vec<GasRecord> {
        vec![
            GasRecord {
                method: "commitBatch".to_string(),
                size: 100,
                avg_gas: 74827,
            },
            GasRecord {
                method: "submitProof".to_string(),
                size: 100,
                avg_gas: 10973,
            },
            GasRecord {
                method: "commitBatch".to_string(),
                size: 200,
                avg_gas: 91412,
            },
        ]
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("gas_results.csv");

        let records = sample_records();
        write_records(&records, &path).unwrap();

        let loaded = read_records(&path).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_header_row() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("gas_results.csv");

        write_records(&sample_records(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("method,size,avg_gas\n"));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/gas_results.csv");

        write_records(&sample_records(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_write_to_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_records(&sample_records(), temp_dir.path());

        assert!(result.is_err());
    }
}
