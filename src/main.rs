//! Gas Sweep CLI
//!
//! Sweeps a Hardhat test suite across transaction-batch sizes, scrapes
//! per-method gas usage from the gas-reporter table, and produces CSV
//! and chart artifacts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use gas_sweep::commands::{
    display_version, execute_plot, execute_sweep, validate_args, validate_report_file, PlotArgs,
    SweepArgs,
};
use gas_sweep::utils::config::{
    DEFAULT_CONTRACT, DEFAULT_CSV_OUTPUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_PLOT_OUTPUT,
    DEFAULT_PROGRAM, DEFAULT_REPLOT_OUTPUT, DEFAULT_STEP,
};

/// Gas Sweep - gas usage sweeps for Hardhat contract test suites
#[derive(Parser, Debug)]
#[command(name = "gas-sweep")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the sweep and produce CSV and chart artifacts
    Sweep {
        /// Test-name filter forwarded to the runner as --grep
        #[arg(short, long)]
        grep: Option<String>,

        /// Contract name the extraction pattern anchors on
        #[arg(short, long, default_value = DEFAULT_CONTRACT)]
        contract: String,

        /// Smallest batch size in the sweep
        #[arg(long, default_value_t = DEFAULT_MIN_SIZE)]
        min: u64,

        /// Largest batch size in the sweep (inclusive)
        #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
        max: u64,

        /// Batch size increment
        #[arg(long, default_value_t = DEFAULT_STEP)]
        step: u64,

        /// Output path for the results CSV
        #[arg(short, long, default_value = DEFAULT_CSV_OUTPUT)]
        output: PathBuf,

        /// Output path for the PNG chart
        #[arg(short, long, default_value = DEFAULT_PLOT_OUTPUT)]
        plot: PathBuf,

        /// Optional output path for a JSON sweep report
        #[arg(long)]
        report: Option<PathBuf>,

        /// Program used to launch the test toolchain
        #[arg(long, default_value = DEFAULT_PROGRAM)]
        program: String,

        /// Hardhat project directory (defaults to the current directory)
        #[arg(long)]
        project_dir: Option<PathBuf>,

        /// Skip `hardhat clean` before each run
        #[arg(long)]
        no_clean: bool,

        /// Print a text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Re-read a results CSV and re-render the chart with SVG styling
    Plot {
        /// Input results CSV
        #[arg(short, long, default_value = DEFAULT_CSV_OUTPUT)]
        input: PathBuf,

        /// Output path for the SVG chart
        #[arg(short, long, default_value = DEFAULT_REPLOT_OUTPUT)]
        output: PathBuf,
    },

    /// Validate a sweep report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Sweep {
            grep,
            contract,
            min,
            max,
            step,
            output,
            plot,
            report,
            program,
            project_dir,
            no_clean,
            summary,
        } => {
            let args = SweepArgs {
                min_size: min,
                max_size: max,
                step,
                grep,
                contract,
                output_csv: output,
                output_plot: plot,
                output_report: report,
                program,
                project_dir,
                clean: !no_clean,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute sweep
            execute_sweep(args)?;
        }

        Commands::Plot { input, output } => {
            execute_plot(PlotArgs {
                input_csv: input,
                output_plot: output,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
