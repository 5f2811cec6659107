//! core::chain
//!
//! Bounded first-parent ancestry chains.
//!
//! # Architecture
//!
//! [`AncestryChain::compute`] performs the walk at the heart of the check:
//! follow first-parent edges from a starting commit, and stop as soon as the
//! walk enters the full (any-edge) ancestry of a boundary commit. The chain
//! is the ordered list of commits visited before that point.
//!
//! The walk is equivalent to `git rev-list --first-parent boundary..start`:
//! ancestry is closed under parents, so the first commit found inside the
//! boundary's ancestry ends the walk.
//!
//! # Invariants
//!
//! - Commits appear newest-first, starting with `start` itself (unless
//!   `start` is already inside the boundary's ancestry)
//! - Each visited commit costs exactly one ancestry test, so the walk is
//!   linear in the depth of the chain
//! - Missing endpoints surface as [`GitError::ObjectNotFound`], never as a
//!   silently empty chain

use crate::core::types::Oid;
use crate::git::{Git, GitError};

/// The first-parent chain of commits reachable from a starting commit,
/// truncated where it enters the boundary's ancestry.
#[derive(Debug, Clone)]
pub struct AncestryChain {
    commits: Vec<Oid>,
}

impl AncestryChain {
    /// Walk first-parent edges from `start`, excluding every commit that is
    /// an ancestor (along any edge) of `boundary`.
    ///
    /// With no boundary the walk runs all the way to the root commit. A
    /// boundary equal to `start` produces an empty chain.
    pub fn compute(git: &Git, start: &Oid, boundary: Option<&Oid>) -> Result<Self, GitError> {
        git.require_commit(start)?;
        if let Some(boundary) = boundary {
            git.require_commit(boundary)?;
        }

        let mut commits = Vec::new();
        let mut cursor = Some(start.clone());
        while let Some(current) = cursor {
            if let Some(boundary) = boundary {
                if git.is_ancestor(&current, boundary)? {
                    break;
                }
            }
            let next = git.first_parent(&current)?;
            commits.push(current);
            cursor = next;
        }
        Ok(Self { commits })
    }

    /// Whether `oid` is on the chain.
    pub fn contains(&self, oid: &Oid) -> bool {
        self.commits.iter().any(|c| c == oid)
    }

    /// The chain's commits, newest first.
    pub fn commits(&self) -> &[Oid] {
        &self.commits
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(n: u8) -> Oid {
        Oid::new(format!("{:040x}", n)).unwrap()
    }

    mod membership {
        use super::*;

        #[test]
        fn contains_finds_members() {
            let chain = AncestryChain {
                commits: vec![oid(3), oid(2), oid(1)],
            };
            assert!(chain.contains(&oid(2)));
            assert!(!chain.contains(&oid(9)));
        }

        #[test]
        fn empty_chain_contains_nothing() {
            let chain = AncestryChain { commits: vec![] };
            assert!(chain.is_empty());
            assert_eq!(chain.len(), 0);
            assert!(!chain.contains(&oid(1)));
        }

        #[test]
        fn commits_preserve_order() {
            let chain = AncestryChain {
                commits: vec![oid(3), oid(2), oid(1)],
            };
            assert_eq!(chain.commits(), &[oid(3), oid(2), oid(1)]);
            assert_eq!(chain.len(), 3);
        }
    }
}
