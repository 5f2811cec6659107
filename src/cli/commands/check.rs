//! check command - the forward-merge gate

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::types::{BranchName, Oid};
use crate::core::verify::{snapshot_base, verify_snapshot, Verdict};
use crate::git::Git;
use crate::ui::output::{self, Verbosity};

/// Run the forward-merge check against the repository in the context's
/// working directory.
///
/// Returns the verdict; a failed check is a normal return, not an error.
pub fn check(ctx: &Context) -> Result<Verdict> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let cwd = match ctx.cwd.clone() {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let git = Git::open(&cwd).context("Failed to open repository")?;

    let snapshot = snapshot_base(&git).context("Failed to resolve base branch")?;
    output::debug(
        format!(
            "base '{}' resolved from {} (tip {})",
            snapshot.base.name,
            snapshot.base.source,
            snapshot.tip.short(12)
        ),
        verbosity,
    );

    let verdict =
        verify_snapshot(&git, &snapshot).context("Failed to walk first-parent history")?;
    match &verdict {
        Verdict::Pass => {
            output::print(
                format!(
                    "ok: '{}' is contained in the first-parent history of HEAD",
                    snapshot.base.name
                ),
                verbosity,
            );
        }
        Verdict::Fail { offending_tip } => {
            output::failure(describe_failure(&git, &snapshot.base.name, offending_tip));
        }
    }
    Ok(verdict)
}

/// Build the remediation message for a failed check.
///
/// Commit details are decoration; if the lookup fails the message still
/// names the offending tip.
fn describe_failure(git: &Git, base: &BranchName, tip: &Oid) -> String {
    let mut msg = format!(
        "foxtrot merge blocked: '{}' is not in the first-parent history of HEAD",
        base
    );
    match git.commit_info(tip) {
        Ok(info) => {
            msg.push_str(&format!(
                "\n  offending commit: {} \"{}\" ({})",
                info.oid.short(12),
                info.summary,
                info.author_time.format("%Y-%m-%d")
            ));
        }
        Err(_) => {
            msg.push_str(&format!("\n  offending commit: {}", tip.short(12)));
        }
    }
    msg.push_str(&format!(
        "\n  hint: rebase onto '{}' so its tip stays on the first-parent line",
        base
    ));
    msg
}
