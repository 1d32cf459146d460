use std::path::PathBuf;

use async_trait::async_trait;
use log::info;
use tokio::process::Command;

use crate::domain::status::WorktreeStatus;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

/// Runs the installed `git` binary with the working directory pinned to the
/// notes directory. The CLI is used rather than a git library so hooks,
/// commit signing, and local git config all apply as configured.
pub struct GitCli {
    notes_dir: PathBuf,
}

impl GitCli {
    pub fn new(notes_dir: PathBuf) -> Self {
        Self { notes_dir }
    }

    /// Runs one git subcommand to completion, echoing the command line and
    /// its combined output to the diagnostic stream whether or not it
    /// succeeds. Returns stdout on success.
    async fn run_git(&self, args: &[&str]) -> AppResult<String> {
        let rendered = format!("git {}", args.join(" "));
        info!("{rendered}");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.notes_dir)
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = format!("{stdout}{stderr}");
        info!("{}", combined.trim_end());

        if !output.status.success() {
            return Err(AppError::VersionControl(format!(
                "`{rendered}` failed ({}): {}",
                output.status,
                combined.trim()
            )));
        }

        Ok(stdout)
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn status(&self) -> AppResult<WorktreeStatus> {
        let stdout = self.run_git(&["status", "--porcelain"]).await?;
        Ok(WorktreeStatus::parse(&stdout))
    }

    async fn stage_all(&self) -> AppResult<()> {
        self.run_git(&["add", "."]).await?;
        Ok(())
    }

    async fn commit(&self, message: &str) -> AppResult<()> {
        self.run_git(&["commit", "--message", message]).await?;
        Ok(())
    }
}
