// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::IsTerminal;

use tracing::debug;

use crate::config::Config;
use crate::domain::{CommitSuggestion, CommitType, GuardDecision, Outcome, StatusEntry, Step};
use crate::error::{Error, Result};
use crate::services::{
    classifier::CommitClassifier,
    git::GitService,
    guard::BranchGuard,
    progress::{ProgressReporter, TerminalReporter},
    prompt::{DialoguerPrompter, Prompter},
    runner::{CommandRunner, ProcessRunner},
};

/// Unwrap a `Step`, or end the run with its outcome.
macro_rules! proceed {
    ($step:expr) => {
        match $step? {
            Step::Continue(value) => value,
            Step::Terminate(outcome) => return Ok(outcome),
        }
    };
}

pub struct App {
    config: Config,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        debug!(
            protected = ?config.protected_branches,
            remote = ?config.remote,
            push = config.push,
            "config loaded"
        );
        Ok(Self { config })
    }

    /// Run the wizard against the real terminal and the `git` on `PATH`.
    pub fn run(&self) -> Result<Outcome> {
        let is_interactive = std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
        if !is_interactive {
            return Err(Error::NotInteractive);
        }

        let git = GitService::new(ProcessRunner);
        let mut prompter = DialoguerPrompter;
        let mut reporter = TerminalReporter::new(self.config.clear_screen);

        Wizard::new(&self.config, git, &mut prompter, &mut reporter).run()
    }
}

/// The guided flow: status, stage, branch check, message, commit and push.
///
/// Every step either continues with the data the next one needs or ends the
/// run with an [`Outcome`]. Command failures before the commit are returned
/// as errors; a failing commit or push is reported and becomes
/// [`Outcome::PublishFailed`].
pub struct Wizard<'a, R, P, S> {
    config: &'a Config,
    git: GitService<R>,
    prompter: &'a mut P,
    reporter: &'a mut S,
}

impl<'a, R, P, S> Wizard<'a, R, P, S>
where
    R: CommandRunner,
    P: Prompter,
    S: ProgressReporter,
{
    pub fn new(
        config: &'a Config,
        git: GitService<R>,
        prompter: &'a mut P,
        reporter: &'a mut S,
    ) -> Self {
        Self {
            config,
            git,
            prompter,
            reporter,
        }
    }

    pub fn run(&mut self) -> Result<Outcome> {
        let outcome = self.steps()?;
        debug!(?outcome, "wizard finished");
        Ok(outcome)
    }

    fn steps(&mut self) -> Result<Outcome> {
        let changed = proceed!(self.check_changes());
        proceed!(self.confirm_staging(&changed));
        self.stage()?;
        let branch = proceed!(self.guard_branch());
        let (staged, suggestion) = self.suggest()?;
        let message = self.edit_message(suggestion)?;
        proceed!(self.confirm_commit(&staged, &message));
        self.publish(branch, message)
    }

    // ─── Steps ───

    fn check_changes(&mut self) -> Result<Step<Vec<StatusEntry>>> {
        self.reporter.clear();
        self.reporter.start("Checking for changes...");
        let status = self.git.status_porcelain()?;

        if status.is_empty() {
            self.reporter.succeed("Working tree clean");
            self.reporter
                .success("No changes to commit. Exiting SmartGit Assistant.");
            return Ok(Step::Terminate(Outcome::NothingToCommit));
        }

        let changed = StatusEntry::parse_all(&status);
        self.reporter
            .succeed(&format!("{} changed file(s) found", changed.len()));
        let items: Vec<String> = changed
            .iter()
            .map(|e| format!("{} {}", e.marker(), e.path))
            .collect();
        self.reporter.list("Files with changes:", &items);

        Ok(Step::Continue(changed))
    }

    fn confirm_staging(&mut self, changed: &[StatusEntry]) -> Result<Step<()>> {
        debug!(files = changed.len(), "asking to stage");
        if !self.prompter.confirm("Stage all changes?", true)? {
            self.reporter.error("Aborted staging. Exiting.");
            return Ok(Step::Terminate(Outcome::StagingDeclined));
        }
        Ok(Step::Continue(()))
    }

    fn stage(&mut self) -> Result<()> {
        self.reporter.clear();
        self.reporter.start("Staging changes...");
        self.git.stage_all()?;
        self.reporter.succeed("Changes staged successfully!");
        Ok(())
    }

    /// Returns the branch the commit will land on.
    fn guard_branch(&mut self) -> Result<Step<String>> {
        let branch = self.git.current_branch()?;
        let guard = BranchGuard::new(&self.config.protected_branches);
        let protected = guard.is_protected(&branch);

        if protected {
            self.reporter
                .warn(&format!("You are on the '{branch}' branch!"));
        }

        let decision = guard.decide(&branch, &mut *self.prompter)?;

        match decision {
            GuardDecision::Abort => {
                self.reporter.error(&format!(
                    "Commit aborted to protect '{branch}' branch. Your changes remain staged."
                ));
                Ok(Step::Terminate(Outcome::BranchGuardAborted))
            }
            GuardDecision::CreateBranch(name) => {
                self.reporter.start(&format!("Creating branch '{name}'..."));
                self.git.checkout_new_branch(&name)?;
                self.reporter
                    .succeed(&format!("Switched to new branch '{name}'!"));
                Ok(Step::Continue(name.to_string()))
            }
            GuardDecision::Continue => {
                if protected {
                    self.reporter
                        .warn(&format!("Continuing on '{branch}' as requested..."));
                }
                Ok(Step::Continue(branch))
            }
        }
    }

    fn suggest(&mut self) -> Result<(Vec<String>, CommitSuggestion)> {
        self.reporter.clear();
        let staged = self.git.staged_files()?;
        let suggestion = CommitClassifier::classify(&staged);
        self.reporter
            .highlight("Suggested commit message:", suggestion.as_str());
        Ok((staged, suggestion))
    }

    fn edit_message(&mut self, suggestion: CommitSuggestion) -> Result<String> {
        let message = self.prompter.input(
            "Edit commit message (or press Enter to accept)",
            Some(suggestion.as_str()),
            None,
        )?;

        if CommitType::from_message(&message).is_none() {
            debug!(message = %message, "commit message is not conventional");
            self.reporter.warn(&format!(
                "\"{message}\" does not follow the conventional commit format (type: subject)"
            ));
        }

        Ok(message)
    }

    fn confirm_commit(&mut self, staged: &[String], message: &str) -> Result<Step<()>> {
        self.reporter.clear();
        self.reporter.list("Files staged for commit:", staged);
        self.reporter.highlight("Final commit message:", message);

        let prompt = if self.config.push {
            "Ready to commit and push?"
        } else {
            "Ready to commit?"
        };

        if !self.prompter.confirm(prompt, true)? {
            self.reporter.error("Commit aborted by user.");
            return Ok(Step::Terminate(Outcome::CommitDeclined));
        }
        Ok(Step::Continue(()))
    }

    /// Commit and push. Failures here end the run quietly instead of raising.
    fn publish(&mut self, branch: String, message: String) -> Result<Outcome> {
        self.reporter.clear();
        self.reporter.start(if self.config.push {
            "Committing and pushing..."
        } else {
            "Committing..."
        });

        let result = self.git.commit(&message).and_then(|()| {
            if self.config.push {
                self.git.push(self.config.remote.as_deref())
            } else {
                Ok(())
            }
        });

        match result {
            Ok(()) => {
                let done = if self.config.push {
                    "Successfully committed and pushed!"
                } else {
                    "Successfully committed!"
                };
                self.reporter.succeed(done);
                if !self.config.push {
                    self.reporter
                        .info("Push is disabled in the configuration; the commit is local only.");
                }
                Ok(Outcome::Published {
                    branch,
                    message,
                    pushed: self.config.push,
                })
            }
            Err(Error::CommandExecution {
                command,
                message: reason,
            }) => {
                debug!(command = %command, "commit or push failed");
                self.reporter.fail("Failed to commit or push.");
                self.reporter.error(&format!("{command}\n{reason}"));
                Ok(Outcome::PublishFailed {
                    command,
                    message: reason,
                })
            }
            Err(other) => Err(other),
        }
    }
}
