//! core::verify
//!
//! The forward-merge check itself.
//!
//! # Architecture
//!
//! A run is two named steps:
//!
//! 1. [`snapshot_base`] resolves the base branch and pins its tip and the
//!    walk boundary
//! 2. [`verify_snapshot`] computes the bounded first-parent chain of HEAD
//!    and tests the pinned tip for membership
//!
//! [`verify`] composes the two. The split lets callers report what was
//! pinned before the walk runs.
//!
//! # Invariants
//!
//! - Never mutates the repository
//! - The snapshot is captured once per run; ref movement after the snapshot
//!   does not change the verdict the run reports
//! - A failed check is a [`Verdict::Fail`], not an error; errors mean the
//!   check could not run at all

use thiserror::Error;

use crate::core::chain::AncestryChain;
use crate::core::resolve::{resolve_base, ResolveError, ResolvedBase};
use crate::core::types::Oid;
use crate::git::{Git, GitError};

/// Errors from the forward-merge check.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Git(#[from] GitError),
}

/// Everything pinned at the start of a run.
#[derive(Debug, Clone)]
pub struct BaseSnapshot {
    /// The resolved base branch.
    pub base: ResolvedBase,
    /// The base tip at snapshot time.
    pub tip: Oid,
    /// First parent of the tip; `None` when the tip is a root commit.
    pub boundary: Option<Oid>,
}

/// Verdict of the check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The base tip lies on the first-parent chain of HEAD.
    Pass,
    /// The base tip is absent from the first-parent chain: either it was
    /// merged in as a side branch, or it was never merged at all.
    Fail {
        /// The snapshotted base tip that is missing from the chain.
        offending_tip: Oid,
    },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Outcome of a full run: what was pinned, and what the walk concluded.
#[derive(Debug)]
pub struct Outcome {
    pub snapshot: BaseSnapshot,
    pub verdict: Verdict,
}

/// Resolve the base branch and pin its tip and walk boundary.
pub fn snapshot_base(git: &Git) -> Result<BaseSnapshot, VerifyError> {
    let base = resolve_base(git)?;
    let tip = git.resolve_tip(&base.name)?;
    let boundary = git.first_parent(&tip)?;
    Ok(BaseSnapshot {
        base,
        tip,
        boundary,
    })
}

/// Test a pinned snapshot against the current HEAD.
///
/// Computes the first-parent chain of HEAD, bounded by the snapshot's
/// boundary, and passes iff the snapshotted tip is on it. Equivalent to
/// checking that the tip appears in
/// `git rev-list --first-parent <tip>^..HEAD`.
pub fn verify_snapshot(git: &Git, snapshot: &BaseSnapshot) -> Result<Verdict, VerifyError> {
    let head = git.head_oid()?;
    let chain = AncestryChain::compute(git, &head, snapshot.boundary.as_ref())?;
    if chain.contains(&snapshot.tip) {
        Ok(Verdict::Pass)
    } else {
        Ok(Verdict::Fail {
            offending_tip: snapshot.tip.clone(),
        })
    }
}

/// Run the whole check: snapshot, then verify.
pub fn verify(git: &Git) -> Result<Outcome, VerifyError> {
    let snapshot = snapshot_base(git)?;
    let verdict = verify_snapshot(git, &snapshot)?;
    Ok(Outcome { snapshot, verdict })
}
