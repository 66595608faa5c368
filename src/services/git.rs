// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use tracing::{debug, warn};

use crate::domain::BranchName;
use crate::error::Result;
use crate::services::runner::CommandRunner;

/// The `git` operations the wizard needs, on top of a [`CommandRunner`].
pub struct GitService<R> {
    runner: R,
}

impl<R: CommandRunner> GitService<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        self.runner.run("git", args)
    }

    /// Raw `git status --porcelain` output, trimmed. Empty means clean.
    pub fn status_porcelain(&self) -> Result<String> {
        self.git(&["status", "--porcelain"])
    }

    pub fn stage_all(&self) -> Result<()> {
        self.git(&["add", "."])?;
        Ok(())
    }

    /// Current branch name; empty on a detached HEAD.
    pub fn current_branch(&self) -> Result<String> {
        let name = self.git(&["branch", "--show-current"])?;
        if name.is_empty() {
            warn!("detached HEAD detected");
        } else {
            debug!(branch = %name, "current branch");
        }
        Ok(name)
    }

    pub fn checkout_new_branch(&self, name: &BranchName) -> Result<()> {
        debug!(branch = %name, "creating and checking out new branch");
        self.git(&["checkout", "-b", name.as_str()])?;
        Ok(())
    }

    pub fn staged_files(&self) -> Result<Vec<String>> {
        let out = self.git(&["diff", "--cached", "--name-only"])?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    pub fn commit(&self, message: &str) -> Result<()> {
        self.git(&["commit", "-m", message])?;
        Ok(())
    }

    /// Push the current branch. Without a remote, git's own upstream
    /// configuration decides where it goes.
    pub fn push(&self, remote: Option<&str>) -> Result<()> {
        match remote {
            Some(remote) => self.git(&["push", remote, "HEAD"])?,
            None => self.git(&["push"])?,
        };
        Ok(())
    }
}
