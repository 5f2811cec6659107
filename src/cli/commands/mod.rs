//! cli::commands
//!
//! Command handlers.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Opens the repository from the context's working directory
//! 2. Calls into [`crate::core`] to do the work
//! 3. Formats and displays output
//!
//! Handlers never mutate the repository.

mod check;

pub use check::check;
