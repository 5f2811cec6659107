//! Foxgate - a pre-merge gate against foxtrot merges
//!
//! A foxtrot merge is a merge whose second parent is the base branch's tip:
//! the base was pulled in as a side branch instead of carrying the
//! first-parent line. Foxgate detects this before a merge lands by checking
//! that the base tip lies on the first-parent history of HEAD.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, maps verdicts to
//!   exit codes)
//! - [`core`] - Base resolution, the first-parent walk, and the verdict
//! - [`git`] - Single interface for all Git operations
//! - [`ui`] - User-facing output utilities
//!
//! # Correctness Invariants
//!
//! 1. The repository is never mutated; every operation is a read
//! 2. The base tip is snapshotted once per run and the verdict refers to
//!    that snapshot
//! 3. A failed check is a verdict with its own exit code, never an error

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
