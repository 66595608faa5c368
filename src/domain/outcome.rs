// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

/// Result of a single wizard step: carry on with a value, or stop here.
#[derive(Debug)]
pub enum Step<T> {
    Continue(T),
    Terminate(Outcome),
}

/// How a wizard run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Working tree was clean.
    NothingToCommit,
    StagingDeclined,
    /// User chose to abort on a protected branch. Staged changes stay staged.
    BranchGuardAborted,
    CommitDeclined,
    Published {
        branch: String,
        message: String,
        pushed: bool,
    },
    /// Commit or push failed after the user confirmed. Reported, not raised.
    PublishFailed {
        command: String,
        message: String,
    },
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PublishFailed { .. } => 1,
            _ => 0,
        }
    }
}
