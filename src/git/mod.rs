//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **only doorway** to Git. All repository reads flow
//! through this interface; no other module imports `git2`. Everything here
//! is read-only, since the check never mutates the repository it inspects.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - Ref resolution (HEAD, branch tips, upstream configuration)
//! - Branch listings, including symbolic entries such as `origin/HEAD`
//! - Parent and ancestry queries
//!
//! # Invariants
//!
//! - No other module calls git2 directly
//! - All operations return strong types (Oid, BranchName)
//!
//! # Example
//!
//! ```ignore
//! use foxgate::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let head = git.head_oid()?;
//! let branches = git.branch_listing()?;
//! ```

mod interface;

pub use interface::{BranchListing, CommitInfo, Git, GitError};
