// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Error running command: {command}\n{message}")]
    #[diagnostic(
        code(smartgit::command::failed),
        help("Check that git is installed and that you are inside a repository with a remote")
    )]
    CommandExecution { command: String, message: String },

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Not an interactive terminal")]
    #[diagnostic(
        code(smartgit::terminal::not_interactive),
        help("smartgit is a guided wizard; run it from a terminal")
    )]
    NotInteractive,

    #[error("Configuration error: {0}")]
    #[diagnostic(code(smartgit::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                Error::Cancelled
            }
            other => Error::Dialog(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Rejected user input. Prompts re-ask on this, it never leaves the prompter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Branch name cannot be empty.")]
    EmptyBranchName,
}
