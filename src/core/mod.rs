//! core
//!
//! Core domain types and the check itself.
//!
//! # Modules
//!
//! - [`types`] - Strong types: BranchName, Oid
//! - [`resolve`] - Base branch resolution strategies
//! - [`chain`] - Bounded first-parent ancestry chains
//! - [`verify`] - The forward-merge check: snapshot, walk, verdict
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Everything here is deterministic and read-only

pub mod chain;
pub mod resolve;
pub mod types;
pub mod verify;
