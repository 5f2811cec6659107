//! core::resolve
//!
//! Base branch resolution.
//!
//! # Architecture
//!
//! The base branch is chosen by an ordered list of [`Strategy`] functions;
//! the first that applies wins. A strategy that does not apply to the
//! repository declines with `Ok(None)` instead of failing, so resolution
//! degrades smoothly from "well-configured clone" down to "lone local
//! repository with no remote at all".
//!
//! # Invariants
//!
//! - Strategies run in priority order: upstream tracking branch, then the
//!   remote's default branch, then the current branch
//! - A declined strategy never masks a real git failure; only genuine
//!   absence maps to `Ok(None)`

use std::fmt;

use thiserror::Error;

use crate::core::types::BranchName;
use crate::git::{Git, GitError};

// =======================================================================
// Types
// =======================================================================

/// Which strategy produced a resolved base branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseSource {
    /// The upstream tracking branch configured for the current branch.
    Upstream,
    /// The remote's default branch, read from a symbolic entry such as
    /// `origin/HEAD` in the branch listing.
    RemoteDefault,
    /// The current branch itself, when nothing better is configured.
    CurrentBranch,
}

impl fmt::Display for BaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BaseSource::Upstream => "upstream",
            BaseSource::RemoteDefault => "remote default",
            BaseSource::CurrentBranch => "current branch",
        };
        f.write_str(label)
    }
}

/// A base branch chosen for the check, with the strategy that produced it.
#[derive(Debug, Clone)]
pub struct ResolvedBase {
    /// Branch shorthand, e.g. `origin/main`.
    pub name: BranchName,
    /// Which strategy produced it.
    pub source: BaseSource,
}

/// Errors from base resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// HEAD is not on a branch and no remote default branch exists to fall
    /// back to.
    #[error("HEAD is not on a branch and no remote default branch was found")]
    DetachedHead,

    #[error(transparent)]
    Git(#[from] GitError),
}

// =======================================================================
// Strategies
// =======================================================================

/// One way of choosing a base branch. Returns `Ok(None)` when the strategy
/// does not apply to this repository.
type Strategy = fn(&Git) -> Result<Option<ResolvedBase>, ResolveError>;

/// Resolution strategies in priority order.
const STRATEGIES: [Strategy; 3] = [from_upstream, from_remote_default, from_current_branch];

/// The upstream tracking branch of the current branch.
fn from_upstream(git: &Git) -> Result<Option<ResolvedBase>, ResolveError> {
    let Some(current) = git.current_branch()? else {
        return Ok(None);
    };
    let Some(upstream) = git.upstream(&current)? else {
        return Ok(None);
    };
    Ok(Some(ResolvedBase {
        name: upstream,
        source: BaseSource::Upstream,
    }))
}

/// The remote's default branch. Branch listings report it as a symbolic
/// entry (`origin/HEAD -> origin/main`); the target is the base.
fn from_remote_default(git: &Git) -> Result<Option<ResolvedBase>, ResolveError> {
    let target = git
        .branch_listing()?
        .into_iter()
        .find_map(|entry| entry.symbolic_target);
    Ok(target.map(|name| ResolvedBase {
        name,
        source: BaseSource::RemoteDefault,
    }))
}

/// The current branch itself. Checking a branch against its own tip passes
/// vacuously, which is the intended behavior for repositories with no
/// upstream and no remote.
fn from_current_branch(git: &Git) -> Result<Option<ResolvedBase>, ResolveError> {
    Ok(git.current_branch()?.map(|name| ResolvedBase {
        name,
        source: BaseSource::CurrentBranch,
    }))
}

// =======================================================================
// Resolution
// =======================================================================

/// Choose the base branch for the check.
///
/// Tries, in order: the upstream tracking branch of the current branch, the
/// remote's default branch, and finally the current branch itself. Fails
/// only when every strategy declines, which requires HEAD to be off any
/// branch in a repository with no remote default.
pub fn resolve_base(git: &Git) -> Result<ResolvedBase, ResolveError> {
    for strategy in STRATEGIES {
        if let Some(base) = strategy(git)? {
            return Ok(base);
        }
    }
    Err(ResolveError::DetachedHead)
}
