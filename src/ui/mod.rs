//! ui
//!
//! User-facing output utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All user-visible output goes through this module to keep formatting and
//! verbosity handling consistent.

pub mod output;
