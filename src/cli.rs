// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;

/// Runs as a guided wizard; the only options are about the tool itself.
#[derive(Parser, Debug, Default)]
#[command(name = "smartgit")]
#[command(version)]
#[command(
    about = "Guided git assistant: stage, check the branch, commit and push",
    long_about = None
)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
