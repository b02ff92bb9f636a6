//! Sweep command implementation.
//!
//! The sweep command:
//! 1. Runs the external suite once per batch size
//! 2. Scrapes per-method gas entries and tags them with the size
//! 3. Aggregates records into series and statistics
//! 4. Writes the CSV artifact
//! 5. Renders the chart
//! 6. Optionally writes the JSON report

use crate::aggregator::{
    build_method_series, build_report, calculate_method_stats, stats_line, tag_with_size,
};
use crate::output::{render_plot, write_records, write_report, PlotStyle};
use crate::parser::GasReportParser;
use crate::runner::{RunnerConfig, TestRunner};
use crate::utils::config::{
    DEFAULT_CONTRACT, DEFAULT_CSV_OUTPUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_PLOT_OUTPUT,
    DEFAULT_PROGRAM, DEFAULT_STEP, MAX_SWEEP_POINTS,
};
use crate::utils::error::ParseError;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the sweep command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SweepArgs {
    /// Smallest batch size in the sweep
    pub min_size: u64,

    /// Largest batch size in the sweep (inclusive)
    pub max_size: u64,

    /// Batch size increment
    pub step: u64,

    /// Test-name filter forwarded to the runner
    pub grep: Option<String>,

    /// Contract the extraction pattern anchors on
    pub contract: String,

    /// Output path for the results CSV
    pub output_csv: PathBuf,

    /// Output path for the PNG chart
    pub output_plot: PathBuf,

    /// Optional output path for the JSON sweep report
    pub output_report: Option<PathBuf>,

    /// Program used to launch the test toolchain
    pub program: String,

    /// Hardhat project directory (None = current directory)
    pub project_dir: Option<PathBuf>,

    /// Run `hardhat clean` before each test invocation
    pub clean: bool,

    /// Print a text summary to stdout
    pub print_summary: bool,
}

impl Default for SweepArgs {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            step: DEFAULT_STEP,
            grep: None,
            contract: DEFAULT_CONTRACT.to_string(),
            output_csv: PathBuf::from(DEFAULT_CSV_OUTPUT),
            output_plot: PathBuf::from(DEFAULT_PLOT_OUTPUT),
            output_report: None,
            program: DEFAULT_PROGRAM.to_string(),
            project_dir: None,
            clean: true,
            print_summary: false,
        }
    }
}

/// Execute the sweep command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Runner launch or non-zero exit (the first failure aborts the sweep)
/// * Zero gas entries across the whole sweep
/// * File write or chart rendering errors
pub fn execute_sweep(args: SweepArgs) -> Result<()> {
    let start_time = Instant::now();

    let sizes = sweep_sizes(args.min_size, args.max_size, args.step);

    info!(
        "Starting gas sweep: sizes {}..={} step {} ({} runs)",
        args.min_size,
        args.max_size,
        args.step,
        sizes.len()
    );

    let parser =
        GasReportParser::new(&args.contract).context("Failed to build extraction pattern")?;

    let runner = TestRunner::new(RunnerConfig {
        program: args.program.clone(),
        project_dir: args.project_dir.clone(),
        grep: args.grep.clone(),
        clean: args.clean,
    });

    // Step 1: run the suite once per size and scrape its output
    let mut records = Vec::new();
    for (run, &size) in sizes.iter().enumerate() {
        info!("Run {}/{}: batch size {}", run + 1, sizes.len(), size);

        let output = runner
            .run(size)
            .with_context(|| format!("Test run failed at batch size {}", size))?;

        let entries = parser.parse_output(&output);
        if entries.is_empty() {
            warn!("No gas entries matched at batch size {}", size);
        }

        records.extend(tag_with_size(entries, size));
    }

    if records.is_empty() {
        return Err(ParseError::NoMatches.into());
    }

    // Step 2: aggregate into series and statistics
    info!("Aggregating {} records...", records.len());
    let series = build_method_series(&records);
    let stats = calculate_method_stats(&series);
    for method_stats in &stats {
        debug!("{}", stats_line(method_stats));
    }

    // Step 3: write the CSV artifact
    write_records(&records, &args.output_csv).context("Failed to write results CSV")?;
    info!("✓ Results written to: {}", args.output_csv.display());

    // Step 4: render the chart
    render_plot(&series, &args.output_plot, PlotStyle::Png).context("Failed to render chart")?;
    info!("✓ Chart written to: {}", args.output_plot.display());

    // Step 5: optional JSON report
    if let Some(report_path) = &args.output_report {
        let report = build_report(
            &args.contract,
            args.min_size,
            args.max_size,
            args.step,
            &records,
            stats.clone(),
        );
        write_report(&report, report_path).context("Failed to write sweep report")?;
        info!("✓ Report written to: {}", report_path.display());
    }

    // Print text summary (if requested)
    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("SWEEP SUMMARY");
        println!("{}", "=".repeat(80));
        println!(
            "Sizes:   {}..={} step {}",
            args.min_size, args.max_size, args.step
        );
        println!("Records: {}", records.len());
        println!("Methods: {}", series.len());
        println!();
        for method_stats in &stats {
            println!("  {}", stats_line(method_stats));
        }
        println!("{}", "=".repeat(80));
    }

    info!(
        "Sweep completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Materialize the inclusive sweep range
///
/// **Public** - also used by tests; callers validate `step != 0` first
pub fn sweep_sizes(min: u64, max: u64, step: u64) -> Vec<u64> {
    debug_assert!(step > 0);
    (min..=max).step_by(step as usize).collect()
}

/// Validate sweep arguments
///
/// **Public** - called before execute_sweep, before any process is launched
pub fn validate_args(args: &SweepArgs) -> Result<()> {
    if args.step == 0 {
        anyhow::bail!("step must be greater than 0");
    }

    if args.min_size == 0 {
        anyhow::bail!("min batch size must be greater than 0");
    }

    if args.min_size > args.max_size {
        anyhow::bail!("min batch size must not exceed max batch size");
    }

    let points = (args.max_size - args.min_size) / args.step + 1;
    if points > MAX_SWEEP_POINTS {
        anyhow::bail!(
            "sweep has {} points, more than the maximum of {}",
            points,
            MAX_SWEEP_POINTS
        );
    }

    if args.contract.trim().is_empty() {
        anyhow::bail!("contract name cannot be empty");
    }

    if args.program.trim().is_empty() {
        anyhow::bail!("runner program cannot be empty");
    }

    Ok(())
}
