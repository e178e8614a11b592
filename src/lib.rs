#![warn(missing_docs)]
//! # benchsweep
//!
//! Runs an external benchmark executable over a fixed sweep of input sizes,
//! parses bracketed `[name] value` metric lines from its stdout, and streams
//! a color-highlighted fixed-width comparison table.
//!
//! The command template is taken verbatim from the command line; every
//! occurrence of the `{N}` placeholder (including the `--n={N}` convention)
//! is replaced with the current size before each invocation:
//!
//! ```text
//! benchsweep ./sort --n {N} --runs 3
//! ```
//!
//! The benchmark is free to print anything; only lines matching the bracket
//! pattern contribute to the table. A run that exits nonzero produces an
//! inline diagnostic row and the sweep continues. Ctrl-C stops the sweep
//! cleanly after the current run.

pub mod parse;
pub mod runner;
pub mod sweep;
pub mod table;
pub mod template;

pub use parse::{parse_output, MetricRow, MetricValue};
pub use runner::{run_once, RunError};
pub use table::Table;

use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

/// Benchsweep CLI arguments
#[derive(Parser, Debug)]
#[command(name = "benchsweep")]
#[command(version, about = "Sweep a benchmark executable over input sizes and tabulate its metrics")]
pub struct Cli {
    /// Verbose output (per-run command logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable ANSI color in the table
    #[arg(long)]
    pub no_color: bool,

    /// Benchmark command template; must contain the `{N}` or `--n={N}` token
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Usage text for the no-placeholder path, trailing blank line included.
fn usage_text() -> String {
    concat!(
        "Usage:\n",
        "    benchsweep ./bench --n {N} ...\n",
        "where ... indicates pass-through parameters\n",
        "\n",
    )
    .to_string()
}

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

fn install_interrupt_handler() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if let Err(e) = ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst)) {
            tracing::warn!("could not install Ctrl-C handler: {}", e);
        }
    });
}

/// Run the benchsweep CLI. Main entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run the sweep with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    let filter = if cli.verbose {
        "benchsweep=debug"
    } else {
        "benchsweep=info"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // No placeholder in the template: print usage and do no work.
    if !template::has_placeholder(&cli.command) {
        print!("{}", usage_text());
        return Ok(());
    }

    println!(
        "Command example: {}",
        template::instantiate(&cli.command, 42).join(" ")
    );

    install_interrupt_handler();

    let mut stdout = std::io::stdout();
    let mut table = Table::with_color(!cli.no_color);

    for n in sweep::sizes() {
        if INTERRUPTED.load(Ordering::SeqCst) {
            break;
        }

        let argv = template::instantiate(&cli.command, n);
        let outcome = runner::run_once(&argv);

        // The child shares the terminal's process group, so an interrupt
        // kills it too; suppress the resulting spurious failure row.
        if INTERRUPTED.load(Ordering::SeqCst) {
            break;
        }

        let text = match outcome {
            Ok(output) => table.render_row(n, &parse_output(&output)),
            Err(e) => table.render_failure(n, &e.to_string()),
        };
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
    }

    if INTERRUPTED.load(Ordering::SeqCst) {
        println!("\r{}", "-- Stopped.".yellow());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_text_ends_with_blank_line() {
        let usage = usage_text();
        assert!(usage.starts_with("Usage:\n"));
        assert!(usage.contains("benchsweep ./bench --n {N} ...\n"));
        assert!(usage.ends_with("pass-through parameters\n\n"));
    }
}
