//! Re-plot command implementation.
//!
//! Re-reads an existing results CSV and re-renders the chart with the
//! whitegrid SVG styling.

use crate::aggregator::build_method_series;
use crate::output::{read_records, render_plot, PlotStyle};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the plot command
#[derive(Debug, Clone)]
pub struct PlotArgs {
    /// Input results CSV
    pub input_csv: PathBuf,

    /// Output path for the SVG chart
    pub output_plot: PathBuf,
}

/// Execute the plot command
///
/// **Public** - main entry point called from main.rs
pub fn execute_plot(args: PlotArgs) -> Result<()> {
    info!("Re-plotting from: {}", args.input_csv.display());

    let records = read_records(&args.input_csv).context("Failed to read results CSV")?;
    if records.is_empty() {
        anyhow::bail!(
            "results file {} contains no records",
            args.input_csv.display()
        );
    }

    let series = build_method_series(&records);
    info!(
        "Loaded {} records across {} methods",
        records.len(),
        series.len()
    );

    render_plot(&series, &args.output_plot, PlotStyle::Svg).context("Failed to render chart")?;

    info!("✓ Chart written to: {}", args.output_plot.display());

    Ok(())
}
