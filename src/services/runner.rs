// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Runs an external command to completion and hands back its output.
pub trait CommandRunner {
    /// Run `program` with `args`, returning trimmed stdout.
    ///
    /// Spawn failures and non-zero exits become [`Error::CommandExecution`].
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        (**self).run(program, args)
    }
}

/// Render a command line the way a user would type it.
pub fn command_line(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
            line.push('"');
            line.push_str(&arg.replace('"', "\\\""));
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}

/// Blocking runner backed by `std::process::Command`. Arguments go straight
/// to the program, no shell is involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        debug!(program, ?args, "running command");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| Error::CommandExecution {
                command: command_line(program, args),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            // git commit reports "nothing to commit" on stdout
            let message = match stderr.trim() {
                "" => stdout.trim(),
                s => s,
            };
            let message = if message.is_empty() {
                format!("exited with {}", output.status)
            } else {
                message.to_string()
            };
            return Err(Error::CommandExecution {
                command: command_line(program, args),
                message,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
