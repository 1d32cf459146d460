use chrono::Utc;
use log::{error, info};

use crate::context::AppContext;
use crate::domain::message::CommitMessageData;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutosaveOutcome {
    /// Working tree was clean; nothing staged or committed.
    NoChanges,
    /// Changes were detected but left untouched.
    DryRun,
    /// Changes were staged and committed.
    Committed,
}

/// Checks the working tree and, unless dry-run is active, stages and
/// commits whatever is pending. Stops at the first failing step.
pub async fn run(ctx: &AppContext) -> AppResult<AutosaveOutcome> {
    let status = match ctx.version_control.status().await {
        Ok(status) => status,
        Err(error) => {
            error!("git status failed: {error}");
            return Err(error);
        }
    };

    if !status.has_changes() {
        info!("no changes to commit: exiting");
        return Ok(AutosaveOutcome::NoChanges);
    }

    if ctx.config.dry_run {
        info!("skipping git-add in dry run");
        info!("skipping git-commit in dry run");
        return Ok(AutosaveOutcome::DryRun);
    }

    if let Err(error) = ctx.version_control.stage_all().await {
        error!("git add failed: {error}");
        return Err(error);
    }

    let message = CommitMessageData::at(Utc::now()).render();
    if let Err(error) = ctx.version_control.commit(&message).await {
        error!("no changes committed: {error}");
        return Err(error);
    }

    Ok(AutosaveOutcome::Committed)
}
