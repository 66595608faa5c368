// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::CommitSuggestion;

static TEST_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(test|spec)\.(js|ts)$|test/").unwrap());

static SOURCE_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(js|ts|py|java|cpp)$").unwrap());

/// Rules in priority order. The first rule any file satisfies wins, so the
/// order here is part of the contract.
const PATH_RULES: &[(CommitSuggestion, fn(&str) -> bool)] = &[
    (CommitSuggestion::Authentication, is_auth),
    (CommitSuggestion::Documentation, is_docs),
    (CommitSuggestion::Stylesheets, is_stylesheet),
    (CommitSuggestion::Tests, is_test),
    (CommitSuggestion::Feature, is_source),
];

fn is_auth(path: &str) -> bool {
    path.contains("auth")
}

fn is_docs(path: &str) -> bool {
    path.contains("readme") || path.ends_with(".md")
}

fn is_stylesheet(path: &str) -> bool {
    path.ends_with(".css") || path.ends_with(".scss") || path.ends_with(".sass")
}

fn is_test(path: &str) -> bool {
    TEST_FILE.is_match(path)
}

fn is_source(path: &str) -> bool {
    SOURCE_FILE.is_match(path)
}

/// More files than this with no other signal counts as a sweeping change.
const MULTIPLE_CHANGES_THRESHOLD: usize = 5;

pub struct CommitClassifier;

impl CommitClassifier {
    /// Suggest a commit message for a set of changed paths.
    ///
    /// Total and pure: every input, including an empty one, maps to exactly
    /// one suggestion. Paths are matched case-insensitively.
    pub fn classify<S: AsRef<str>>(files: &[S]) -> CommitSuggestion {
        let suggestion = Self::evaluate(files);
        debug!(
            files = files.len(),
            kind = %suggestion.commit_type(),
            suggestion = %suggestion,
            "classified changes"
        );
        suggestion
    }

    fn evaluate<S: AsRef<str>>(files: &[S]) -> CommitSuggestion {
        if files.is_empty() {
            return CommitSuggestion::EmptyCommit;
        }

        let paths: Vec<String> = files.iter().map(|f| f.as_ref().to_lowercase()).collect();

        for (suggestion, matches) in PATH_RULES {
            if paths.iter().any(|p| matches(p.as_str())) {
                return *suggestion;
            }
        }

        if files.len() > MULTIPLE_CHANGES_THRESHOLD {
            CommitSuggestion::MultipleChanges
        } else {
            CommitSuggestion::MinorUpdates
        }
    }
}
