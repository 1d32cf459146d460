use async_trait::async_trait;

use crate::domain::status::WorktreeStatus;
use crate::error::AppResult;

/// The three version-control operations the runner needs, kept behind a
/// trait so the workflow can be exercised without spawning git.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Lists pending working-tree changes, one status line per path.
    async fn status(&self) -> AppResult<WorktreeStatus>;

    /// Stages every change in the working directory.
    async fn stage_all(&self) -> AppResult<()>;

    /// Commits the staged changes with the given message.
    async fn commit(&self, message: &str) -> AppResult<()>;
}
