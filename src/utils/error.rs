//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while driving the external test runner
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("failed to launch {program}: {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Errors that can occur while scraping runner output
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid extraction pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("no gas entries matched anywhere in the sweep output")]
    NoMatches,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("CSV record error: {0}")]
    CsvFailed(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Empty data series")]
    EmptySeries,

    #[error("Chart rendering failed: {0}")]
    RenderFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
