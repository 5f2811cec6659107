//! Foxgate binary entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    foxgate::cli::run()
}
