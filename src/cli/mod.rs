//! cli
//!
//! Command-line interface layer for Foxgate.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and environment overrides
//! - Run the check and map its outcome to an exit code
//! - Does NOT inspect the repository directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, builds a [`Context`],
//! and delegates to the check handler. Three exit codes separate the three
//! outcomes a caller can script against: pass, foxtrot detected, and
//! could-not-run.

pub mod args;
pub mod commands;

pub use args::Cli;

use std::path::PathBuf;
use std::process::ExitCode;

use crate::ui::output;

/// Exit code for a passed check.
pub const EXIT_PASS: u8 = 0;
/// Exit code for a detected foxtrot merge.
pub const EXIT_FOXTROT: u8 = 1;
/// Exit code when the check could not run at all.
pub const EXIT_ERROR: u8 = 2;

/// Execution context shared by command handlers.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Run as if started in this directory.
    pub cwd: Option<PathBuf>,
    /// Print resolution details before the check.
    pub debug: bool,
    /// Minimal output.
    pub quiet: bool,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. A passed check exits
/// [`EXIT_PASS`], a detected foxtrot merge exits [`EXIT_FOXTROT`], and any
/// error that prevents the check from running exits [`EXIT_ERROR`].
pub fn run() -> ExitCode {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    match commands::check(&ctx) {
        Ok(verdict) if verdict.is_pass() => ExitCode::from(EXIT_PASS),
        Ok(_) => ExitCode::from(EXIT_FOXTROT),
        Err(err) => {
            report_error(&err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Print an error and its chain of causes.
fn report_error(err: &anyhow::Error) {
    output::error(err);
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}
