// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use tracing::debug;

use crate::domain::{BranchName, GuardChoice, GuardDecision};
use crate::error::{Error, Result, ValidationError};
use crate::services::prompt::{Choice, Prompter, Validator};

/// Branches that get a warning before anything is committed to them.
pub const DEFAULT_PROTECTED_BRANCHES: &[&str] = &["main", "master"];

/// Decides what to do when the user is about to commit on a protected branch.
pub struct BranchGuard<'a> {
    protected: &'a [String],
}

impl<'a> BranchGuard<'a> {
    pub fn new(protected: &'a [String]) -> Self {
        Self { protected }
    }

    pub fn is_protected(&self, branch: &str) -> bool {
        self.protected.iter().any(|p| p == branch)
    }

    /// The choices offered on `branch`, safest first.
    pub fn choices(branch: &str) -> Vec<Choice<GuardChoice>> {
        vec![
            Choice::new("Abort commit (recommended)", GuardChoice::Abort),
            Choice::new("Create a new branch and switch", GuardChoice::CreateBranch),
            Choice::new(
                format!("Continue committing to {branch} (dangerous)"),
                GuardChoice::Continue,
            ),
        ]
    }

    /// Unprotected branches pass straight through without asking anything.
    pub fn decide<P: Prompter>(&self, branch: &str, prompter: &mut P) -> Result<GuardDecision> {
        if !self.is_protected(branch) {
            debug!(branch, "branch not protected");
            return Ok(GuardDecision::Continue);
        }

        let choice = prompter.select("What would you like to do?", &Self::choices(branch))?;
        debug!(branch, choice = choice.value(), "protected branch choice");

        let decision = match choice {
            GuardChoice::Abort => GuardDecision::Abort,
            GuardChoice::Continue => GuardDecision::Continue,
            GuardChoice::CreateBranch => {
                let validate: Validator<'_> = &|s: &str| BranchName::parse(s).map(|_| ());
                let name =
                    prompter.input("Enter a name for your new branch", None, Some(validate))?;
                GuardDecision::CreateBranch(BranchName::parse(&name).map_err(invalid_input)?)
            }
        };

        Ok(decision)
    }
}

// A prompter that hands back input its own validator rejected is broken.
fn invalid_input(e: ValidationError) -> Error {
    Error::Dialog(e.to_string())
}
