//! Configuration and constants for the CLI.

/// Current sweep report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Environment variable the test suite reads for the batch size
pub const SIZE_ENV_VAR: &str = "BATCH_NUMBER";

// Sweep bounds (transaction batch sizes)
pub const DEFAULT_MIN_SIZE: u64 = 100;
pub const DEFAULT_MAX_SIZE: u64 = 1000;
pub const DEFAULT_STEP: u64 = 100;

/// Contract column the extraction pattern anchors on
pub const DEFAULT_CONTRACT: &str = "NMFT";

// Default output artifacts
pub const DEFAULT_CSV_OUTPUT: &str = "gas_results.csv";
pub const DEFAULT_PLOT_OUTPUT: &str = "gas_usage_plot.png";
pub const DEFAULT_REPLOT_OUTPUT: &str = "gas_usage_plot.svg";

/// Program used to launch the test toolchain
pub const DEFAULT_PROGRAM: &str = "npx";

/// Upper bound on sweep points, guards against a tiny --step over a huge range
pub const MAX_SWEEP_POINTS: u64 = 1000;
