//! Output writers for sweep artifacts.
//!
//! This module handles writing data to disk:
//! - CSV results (the primary artifact)
//! - JSON sweep reports
//! - Chart images (PNG and SVG)

pub mod csv;
pub mod json;
pub mod plot;

// Re-export main functions
pub use csv::{read_records, write_records};
pub use json::{read_report, write_report};
pub use plot::{render_plot, PlotStyle};

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Reject empty paths and directory targets
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create missing parent directories for an output file
fn ensure_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// File size in bytes, 0 if unreadable
fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
