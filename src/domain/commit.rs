// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Refactor,
    Docs,
    Test,
    Chore,
    Style,
    Perf,
    Build,
    Ci,
    Revert,
}

impl CommitType {
    pub const ALL: &'static [&'static str] = &[
        "feat", "fix", "refactor", "docs", "test", "chore", "style", "perf", "build", "ci",
        "revert",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Refactor => "refactor",
            Self::Docs => "docs",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Style => "style",
            Self::Perf => "perf",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Revert => "revert",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "feat" => Some(Self::Feat),
            "fix" => Some(Self::Fix),
            "refactor" => Some(Self::Refactor),
            "docs" => Some(Self::Docs),
            "test" => Some(Self::Test),
            "chore" => Some(Self::Chore),
            "style" => Some(Self::Style),
            "perf" => Some(Self::Perf),
            "build" => Some(Self::Build),
            "ci" => Some(Self::Ci),
            "revert" => Some(Self::Revert),
            _ => None,
        }
    }

    /// Type of a `type(scope)!: subject` header, if the message has one.
    pub fn from_message(message: &str) -> Option<Self> {
        let header = message.lines().next()?;
        let (prefix, subject) = header.split_once(':')?;
        if subject.trim().is_empty() {
            return None;
        }
        let prefix = prefix.trim_end_matches('!');
        let ty = match prefix.split_once('(') {
            Some((ty, scope)) if scope.ends_with(')') => ty,
            Some(_) => return None,
            None => prefix,
        };
        Self::parse(ty)
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the fixed messages the heuristic classifier can suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitSuggestion {
    EmptyCommit,
    Authentication,
    Documentation,
    Stylesheets,
    Tests,
    Feature,
    MultipleChanges,
    MinorUpdates,
}

impl CommitSuggestion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyCommit => "chore: empty commit (no changes?)",
            Self::Authentication => "feat: implement authentication system",
            Self::Documentation => "docs: update documentation",
            Self::Stylesheets => "style: update stylesheets",
            Self::Tests => "test: update/add tests",
            Self::Feature => "feat: implement new feature",
            Self::MultipleChanges => "chore: multiple changes across project",
            Self::MinorUpdates => "chore: minor updates",
        }
    }

    pub fn commit_type(&self) -> CommitType {
        match self {
            Self::Authentication | Self::Feature => CommitType::Feat,
            Self::Documentation => CommitType::Docs,
            Self::Stylesheets => CommitType::Style,
            Self::Tests => CommitType::Test,
            Self::EmptyCommit | Self::MultipleChanges | Self::MinorUpdates => CommitType::Chore,
        }
    }
}

impl fmt::Display for CommitSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
