//! Hardhat test-runner driver.
//!
//! Runs the suite as a blocking subprocess, one invocation per sweep size.
//! The suite reads the batch size from an environment variable; we capture
//! stdout for the scraper and fail fast on a non-zero exit status.

use crate::utils::config::{DEFAULT_PROGRAM, SIZE_ENV_VAR};
use crate::utils::error::RunnerError;
use log::{debug, info};
use std::path::PathBuf;
use std::process::{Command, Output};

/// Limit on the stderr tail carried in a failure error
const STDERR_TAIL_CHARS: usize = 400;

/// Configuration for the external test runner
///
/// **Public** - built by the sweep command from CLI args
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Program used to launch the toolchain (normally `npx`)
    pub program: String,

    /// Hardhat project directory (None = current directory)
    pub project_dir: Option<PathBuf>,

    /// Test-name filter forwarded as `--grep`
    pub grep: Option<String>,

    /// Run `hardhat clean` before each test invocation
    pub clean: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            project_dir: None,
            grep: None,
            clean: true,
        }
    }
}

/// Blocking driver for the external test suite
#[derive(Debug, Clone)]
pub struct TestRunner {
    config: RunnerConfig,
}

impl TestRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run the suite once with the given sweep size
    ///
    /// **Public** - called once per size by the sweep command
    ///
    /// # Returns
    /// The captured stdout of the test invocation
    ///
    /// # Errors
    /// * `RunnerError::LaunchFailed` - the program could not be spawned
    /// * `RunnerError::CommandFailed` - clean or test exited non-zero
    pub fn run(&self, size: u64) -> Result<String, RunnerError> {
        if self.config.clean {
            debug!("Cleaning build artifacts before run");
            self.invoke(&["hardhat", "clean"], None)?;
        }

        let mut args = vec!["hardhat", "test"];
        if let Some(grep) = &self.config.grep {
            args.push("--grep");
            args.push(grep);
        }

        info!("Running test suite with {}={}", SIZE_ENV_VAR, size);
        let output = self.invoke(&args, Some(size))?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Spawn one blocking invocation and check its exit status
    ///
    /// **Private** - internal helper for run
    fn invoke(&self, args: &[&str], size: Option<u64>) -> Result<Output, RunnerError> {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(args);

        if let Some(dir) = &self.config.project_dir {
            cmd.current_dir(dir);
        }

        if let Some(size) = size {
            cmd.env(SIZE_ENV_VAR, size.to_string());
        }

        let rendered = render_command(&self.config.program, args);
        debug!("Invoking: {}", rendered);

        let output = cmd.output().map_err(|source| RunnerError::LaunchFailed {
            program: self.config.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(RunnerError::CommandFailed {
                command: rendered,
                status: output.status,
                stderr: tail_of(&String::from_utf8_lossy(&output.stderr), STDERR_TAIL_CHARS),
            });
        }

        Ok(output)
    }
}

/// Render a command line for logs and error messages
///
/// **Private** - internal utility
fn render_command(program: &str, args: &[&str]) -> String {
    format!("{} {}", program, args.join(" "))
}

/// Last `limit` characters of a captured stream
///
/// **Private** - internal utility
fn tail_of(text: &str, limit: usize) -> String {
    let trimmed = text.trim();
    let count = trimmed.chars().count();

    if count <= limit {
        trimmed.to_string()
    } else {
        trimmed.chars().skip(count - limit).collect()
    }
}
