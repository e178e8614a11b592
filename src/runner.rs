//! Benchmark Process Runner
//!
//! Invokes the templated command once per size as a blocking child process.
//! Stdout is captured for parsing; stderr passes through to the terminal.
//! A failed invocation is a per-size diagnostic, not a sweep abort.

use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// Why a single benchmark invocation produced no output to parse.
#[derive(Debug, Error)]
pub enum RunError {
    /// The templated command had no tokens at all.
    #[error("empty command")]
    EmptyCommand,

    /// The program could not be started.
    #[error("failed to run {command}: {source}")]
    Spawn {
        /// Program name from the template.
        command: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The program ran but exited nonzero.
    #[error("{command} exited with {status}")]
    NonZeroExit {
        /// Program name from the template.
        command: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
    },
}

/// Run `argv` to completion and capture its stdout.
///
/// Blocks until the child exits. No timeout is enforced; a hung benchmark
/// hangs the sweep.
pub fn run_once(argv: &[String]) -> Result<String, RunError> {
    let (program, args) = argv.split_first().ok_or(RunError::EmptyCommand)?;
    tracing::debug!(command = %argv.join(" "), "running benchmark");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| RunError::Spawn {
            command: program.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(RunError::NonZeroExit {
            command: program.clone(),
            status: output.status,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
