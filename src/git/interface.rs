//! git::interface
//!
//! Git repository access implemented on top of git2.
//!
//! # Architecture
//!
//! All repository reads flow through [`Git`]. No other module touches git2
//! directly; callers work with the crate's own types ([`Oid`], [`BranchName`])
//! and get [`GitError`] values with enough context to report cleanly.
//!
//! # Responsibilities
//!
//! - Open a repository by discovery from a starting directory
//! - Resolve HEAD, branch tips, and upstream tracking configuration
//! - Enumerate branch listings, including symbolic entries such as
//!   `origin/HEAD`
//! - Answer parent and ancestry queries about commits
//!
//! # Invariants
//!
//! - Every method is read-only; nothing here mutates the repository
//! - Absent-but-legitimate lookups (no upstream configured, detached HEAD)
//!   return `Ok(None)`; lookups of things that are expected to exist return
//!   [`GitError::RefNotFound`] or [`GitError::ObjectNotFound`] when they do
//!   not
//!
//! # Example
//!
//! ```ignore
//! use foxgate::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let head = git.head_oid()?;
//! println!("HEAD is at {}", head.short(8));
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::{BranchName, Oid, TypeError};

// =======================================================================
// Errors
// =======================================================================

/// Errors from git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// No git repository was found at or above the given path.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path where discovery started.
        path: PathBuf,
    },

    /// The repository is bare and has no checked-out branch to verify.
    #[error("bare repository has no working tree")]
    BareRepo,

    /// A reference (branch, HEAD, remote-tracking ref) could not be found.
    #[error("reference not found: {refname}")]
    RefNotFound {
        /// The reference that was looked up.
        refname: String,
    },

    /// A commit object could not be found.
    #[error("commit not found: {oid}")]
    ObjectNotFound {
        /// The object id that was looked up.
        oid: String,
    },

    /// A string could not be parsed as an object id.
    #[error("invalid object id: {oid}")]
    InvalidOid {
        /// The rejected input.
        oid: String,
    },

    /// A reference name failed validation.
    #[error("invalid reference name: {message}")]
    InvalidRefName {
        /// Description of the rejected name.
        message: String,
    },

    /// Any other libgit2 failure, with context about what was attempted.
    #[error("git operation failed: {message}")]
    Internal {
        /// Description of the failure.
        message: String,
    },
}

impl GitError {
    /// Convert a git2 error into a `GitError`, attaching context about the
    /// operation that failed.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound => GitError::RefNotFound {
                refname: context.to_string(),
            },
            git2::ErrorCode::InvalidSpec => GitError::InvalidOid {
                oid: context.to_string(),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }
}

impl From<TypeError> for GitError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidBranchName(msg) => GitError::InvalidRefName { message: msg },
            TypeError::InvalidOid(msg) => GitError::InvalidOid { oid: msg },
        }
    }
}

// =======================================================================
// Types
// =======================================================================

/// Metadata about a single commit, used when reporting a failed check.
#[derive(Debug, Clone)]
pub struct CommitInfo {
    /// The commit's object id.
    pub oid: Oid,
    /// First line of the commit message.
    pub summary: String,
    /// Author timestamp.
    pub author_time: chrono::DateTime<chrono::Utc>,
}

/// One entry from the repository's branch listing.
///
/// Symbolic entries such as `origin/HEAD` carry the shorthand of the branch
/// they point at in `symbolic_target`; direct entries carry `None`.
#[derive(Debug, Clone)]
pub struct BranchListing {
    /// Branch shorthand, e.g. `main` or `origin/main`.
    pub name: BranchName,
    /// For symbolic entries, the shorthand of the target branch.
    pub symbolic_target: Option<BranchName>,
}

/// Strip the ref namespace from a full reference name, mirroring the
/// shorthand git prints in branch listings.
fn shorthand(refname: &str) -> &str {
    refname
        .strip_prefix("refs/remotes/")
        .or_else(|| refname.strip_prefix("refs/heads/"))
        .unwrap_or(refname)
}

// =======================================================================
// Git
// =======================================================================

/// Handle to an opened git repository.
pub struct Git {
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open the repository containing `path`, searching upward the way the
    /// git CLI does.
    ///
    /// Bare repositories are rejected; the check inspects the state of a
    /// working checkout.
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;
        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }
        Ok(Self { repo })
    }

    /// Resolve HEAD to a commit id.
    ///
    /// An unborn HEAD (fresh repository with no commits) reports
    /// [`GitError::RefNotFound`] for `HEAD`.
    pub fn head_oid(&self) -> Result<Oid, GitError> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
                return Err(GitError::RefNotFound {
                    refname: "HEAD".to_string(),
                })
            }
            Err(e) => return Err(GitError::from_git2(e, "HEAD")),
        };
        let commit = head
            .peel_to_commit()
            .map_err(|e| GitError::from_git2(e, "HEAD"))?;
        Ok(Oid::new(commit.id().to_string())?)
    }

    /// Name of the currently checked-out branch.
    ///
    /// Returns `Ok(None)` when HEAD is detached or unborn.
    pub fn current_branch(&self) -> Result<Option<BranchName>, GitError> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(GitError::from_git2(e, "HEAD")),
        };
        if !head.is_branch() {
            return Ok(None);
        }
        match head.shorthand() {
            Some(name) => Ok(Some(BranchName::new(name)?)),
            None => Ok(None),
        }
    }

    /// Shorthand of the upstream tracking branch configured for a local
    /// branch, e.g. `origin/main`.
    ///
    /// Returns `Ok(None)` when the branch has no upstream configured or the
    /// tracking ref does not exist locally.
    pub fn upstream(&self, branch: &BranchName) -> Result<Option<BranchName>, GitError> {
        let local = match self.repo.find_branch(branch.as_str(), git2::BranchType::Local) {
            Ok(b) => b,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                return Err(GitError::RefNotFound {
                    refname: branch.to_string(),
                })
            }
            Err(e) => return Err(GitError::from_git2(e, branch.as_str())),
        };
        match local.upstream() {
            Ok(up) => {
                let name = up
                    .name()
                    .map_err(|e| GitError::from_git2(e, branch.as_str()))?
                    .ok_or_else(|| GitError::Internal {
                        message: format!("upstream of {} has a non-UTF8 name", branch),
                    })?;
                Ok(Some(BranchName::new(name)?))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitError::from_git2(e, branch.as_str())),
        }
    }

    /// Enumerate every branch the repository knows about, local and
    /// remote-tracking alike.
    ///
    /// Symbolic entries such as `origin/HEAD` are reported with the
    /// shorthand of their target. Entries whose names are not valid UTF-8
    /// or fail branch-name validation are skipped rather than failing the
    /// whole listing.
    pub fn branch_listing(&self) -> Result<Vec<BranchListing>, GitError> {
        let branches = self.repo.branches(None).map_err(|e| GitError::Internal {
            message: format!("listing branches: {}", e.message()),
        })?;
        let mut listing = Vec::new();
        for entry in branches {
            let (branch, _) = entry.map_err(|e| GitError::Internal {
                message: format!("listing branches: {}", e.message()),
            })?;
            let Some(raw) = branch.name().ok().flatten() else {
                continue;
            };
            let Ok(name) = BranchName::new(raw) else {
                continue;
            };
            let symbolic_target =
                if matches!(branch.get().kind(), Some(git2::ReferenceType::Symbolic)) {
                    branch
                        .get()
                        .symbolic_target()
                        .map(shorthand)
                        .and_then(|target| BranchName::new(target).ok())
                } else {
                    None
                };
            listing.push(BranchListing {
                name,
                symbolic_target,
            });
        }
        Ok(listing)
    }

    /// Resolve a branch shorthand to the commit it points at.
    ///
    /// Accepts local names (`main`) and remote-tracking shorthands
    /// (`origin/main`), following symbolic references to their targets.
    pub fn resolve_tip(&self, name: &BranchName) -> Result<Oid, GitError> {
        let reference = match self.repo.resolve_reference_from_short_name(name.as_str()) {
            Ok(r) => r,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                return Err(GitError::RefNotFound {
                    refname: name.to_string(),
                })
            }
            Err(e) => return Err(GitError::from_git2(e, name.as_str())),
        };
        let commit = reference
            .peel_to_commit()
            .map_err(|e| GitError::from_git2(e, name.as_str()))?;
        Ok(Oid::new(commit.id().to_string())?)
    }

    /// All parents of a commit, in parent order.
    pub fn parents_of(&self, oid: &Oid) -> Result<Vec<Oid>, GitError> {
        let commit = self.find_commit(oid)?;
        let mut parents = Vec::with_capacity(commit.parent_count());
        for parent in commit.parent_ids() {
            parents.push(Oid::new(parent.to_string())?);
        }
        Ok(parents)
    }

    /// First parent of a commit, or `None` for a root commit.
    pub fn first_parent(&self, oid: &Oid) -> Result<Option<Oid>, GitError> {
        let commit = self.find_commit(oid)?;
        if commit.parent_count() == 0 {
            return Ok(None);
        }
        let parent = commit
            .parent_id(0)
            .map_err(|e| GitError::from_git2(e, oid.as_str()))?;
        Ok(Some(Oid::new(parent.to_string())?))
    }

    /// Whether `ancestor` is reachable from `descendant` along any parent
    /// edge. A commit is considered its own ancestor.
    pub fn is_ancestor(&self, ancestor: &Oid, descendant: &Oid) -> Result<bool, GitError> {
        if ancestor == descendant {
            return Ok(true);
        }
        let ancestor_oid = git2::Oid::from_str(ancestor.as_str())
            .map_err(|e| GitError::from_git2(e, ancestor.as_str()))?;
        let descendant_oid = git2::Oid::from_str(descendant.as_str())
            .map_err(|e| GitError::from_git2(e, descendant.as_str()))?;
        self.repo
            .graph_descendant_of(descendant_oid, ancestor_oid)
            .map_err(|e| GitError::Internal {
                message: format!(
                    "ancestry check {}..{}: {}",
                    ancestor.short(8),
                    descendant.short(8),
                    e.message()
                ),
            })
    }

    /// Verify that a commit exists, reporting [`GitError::ObjectNotFound`]
    /// when it does not.
    pub fn require_commit(&self, oid: &Oid) -> Result<(), GitError> {
        self.find_commit(oid).map(|_| ())
    }

    /// Metadata about a commit for reporting.
    pub fn commit_info(&self, oid: &Oid) -> Result<CommitInfo, GitError> {
        let commit = self.find_commit(oid)?;
        let author = commit.author();
        let author_time = chrono::DateTime::from_timestamp(author.when().seconds(), 0)
            .unwrap_or(chrono::DateTime::UNIX_EPOCH)
            .with_timezone(&chrono::Utc);
        Ok(CommitInfo {
            oid: oid.clone(),
            summary: commit.summary().unwrap_or("").to_string(),
            author_time,
        })
    }

    fn find_commit(&self, oid: &Oid) -> Result<git2::Commit<'_>, GitError> {
        let git_oid = git2::Oid::from_str(oid.as_str())
            .map_err(|e| GitError::from_git2(e, oid.as_str()))?;
        match self.repo.find_commit(git_oid) {
            Ok(commit) => Ok(commit),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Err(GitError::ObjectNotFound {
                oid: oid.to_string(),
            }),
            Err(e) => Err(GitError::from_git2(e, oid.as_str())),
        }
    }
}
