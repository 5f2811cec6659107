//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory (env: `FOXGATE_CWD`)
//! - `--debug`: Print resolution details before the check (env: `FOXGATE_DEBUG`)
//! - `--quiet` / `-q`: Minimal output

use clap::builder::FalseyValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Foxgate - a pre-merge gate against foxtrot merges
#[derive(Parser, Debug)]
#[command(name = "foxgate")]
#[command(
    author,
    version,
    about,
    long_about = "Verify that the base branch was merged forward, not crossed.\n\n\
        Foxgate resolves the base branch (upstream tracking ref, then the remote's \
        default branch, then the current branch), snapshots its tip, and checks that \
        the tip lies on the first-parent history of HEAD. A base tip that only \
        entered history as the second parent of a merge is a foxtrot merge and \
        fails the check.",
    after_help = "\
EXIT CODES:
    0    check passed
    1    foxtrot merge detected
    2    the check could not run (bad repository, missing refs)

WORKFLOW EXAMPLES:
    # Gate a merge in CI
    foxgate

    # As a quiet pre-merge hook
    foxgate --quiet

    # See what the check resolved
    foxgate --debug

    # Check a repository elsewhere on disk
    foxgate --cwd /path/to/repo"
)]
pub struct Cli {
    /// Run as if foxgate was started in this directory
    #[arg(long, env = "FOXGATE_CWD")]
    pub cwd: Option<PathBuf>,

    /// Print the resolved base and its snapshotted tip before the check
    #[arg(long, env = "FOXGATE_DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
