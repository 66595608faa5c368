// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use proptest::prelude::*;

use smartgit::domain::{CommitSuggestion, CommitType};
use smartgit::services::classifier::CommitClassifier;

fn classify(files: &[&str]) -> &'static str {
    CommitClassifier::classify(files).as_str()
}

// ─── One test per rule ───────────────────────────────────────────────────────

#[test]
fn empty_list_is_empty_commit() {
    let files: [&str; 0] = [];
    assert_eq!(classify(&files), "chore: empty commit (no changes?)");
}

#[test]
fn auth_path_is_authentication_feature() {
    assert_eq!(
        classify(&["src/authService.ts"]),
        "feat: implement authentication system"
    );
}

#[test]
fn readme_is_docs() {
    assert_eq!(classify(&["README.md"]), "docs: update documentation");
}

#[test]
fn readme_without_extension_is_docs() {
    assert_eq!(classify(&["docs/readme"]), "docs: update documentation");
}

#[test]
fn markdown_is_docs() {
    assert_eq!(classify(&["CHANGELOG.md"]), "docs: update documentation");
}

#[test]
fn scss_is_style() {
    assert_eq!(classify(&["styles/app.scss"]), "style: update stylesheets");
}

#[test]
fn css_and_sass_are_style() {
    assert_eq!(classify(&["web/site.css"]), "style: update stylesheets");
    assert_eq!(classify(&["web/theme.sass"]), "style: update stylesheets");
}

#[test]
fn test_file_suffix_is_test() {
    assert_eq!(classify(&["src/util.test.js"]), "test: update/add tests");
    assert_eq!(classify(&["src/util.spec.ts"]), "test: update/add tests");
}

#[test]
fn test_directory_is_test() {
    assert_eq!(classify(&["test/fixtures.json"]), "test: update/add tests");
    assert_eq!(classify(&["pkg/test/helpers.rb"]), "test: update/add tests");
}

#[test]
fn test_dir_matches_anywhere_in_the_path() {
    for file in ["latest/notes.txt", "e2etest/data.json", "unittest/fixture.txt"] {
        assert_eq!(
            classify(&[file]),
            "test: update/add tests",
            "expected {file} to count as a test"
        );
    }
}

#[test]
fn source_files_are_feature() {
    for file in ["a.js", "b.ts", "c.py", "d.java", "e.cpp"] {
        assert_eq!(
            classify(&[file]),
            "feat: implement new feature",
            "expected {file} to count as source"
        );
    }
}

#[test]
fn six_unmatched_files_is_multiple_changes() {
    assert_eq!(
        classify(&["a.txt", "b.txt", "c.txt", "d.txt", "e.txt", "f.txt"]),
        "chore: multiple changes across project"
    );
}

#[test]
fn five_unmatched_files_is_minor() {
    assert_eq!(
        classify(&["a.txt", "b.txt", "c.txt", "d.txt", "e.txt"]),
        "chore: minor updates"
    );
}

#[test]
fn single_unmatched_file_is_minor() {
    assert_eq!(classify(&["notes.txt"]), "chore: minor updates");
}

// ─── Rule ordering ───────────────────────────────────────────────────────────

#[test]
fn auth_beats_source() {
    assert_eq!(
        classify(&["src/authService.ts"]),
        CommitSuggestion::Authentication.as_str()
    );
}

#[test]
fn auth_beats_docs_across_files() {
    assert_eq!(
        classify(&["README.md", "src/oauth.rs"]),
        "feat: implement authentication system"
    );
}

#[test]
fn docs_beat_style() {
    assert_eq!(
        classify(&["app.css", "guide.md"]),
        "docs: update documentation"
    );
}

#[test]
fn style_beats_tests() {
    assert_eq!(
        classify(&["src/button.test.js", "src/button.css"]),
        "style: update stylesheets"
    );
}

#[test]
fn tests_beat_source() {
    assert_eq!(
        classify(&["src/lib.js", "src/lib.test.js"]),
        "test: update/add tests"
    );
}

#[test]
fn source_beats_file_count() {
    assert_eq!(
        classify(&["a.js", "b.py", "c.java", "d.cpp", "e.txt", "f.txt"]),
        "feat: implement new feature"
    );
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(
        classify(&["src/AUTH/Login.rs"]),
        "feat: implement authentication system"
    );
    assert_eq!(classify(&["NOTES.MD"]), "docs: update documentation");
    assert_eq!(classify(&["Main.JAVA"]), "feat: implement new feature");
}

#[test]
fn accepts_owned_strings() {
    let files = vec![String::from("README.md")];
    assert_eq!(
        CommitClassifier::classify(&files),
        CommitSuggestion::Documentation
    );
}

// ─── Suggestion metadata ─────────────────────────────────────────────────────

#[test]
fn every_suggestion_starts_with_its_type() {
    let all = [
        CommitSuggestion::EmptyCommit,
        CommitSuggestion::Authentication,
        CommitSuggestion::Documentation,
        CommitSuggestion::Stylesheets,
        CommitSuggestion::Tests,
        CommitSuggestion::Feature,
        CommitSuggestion::MultipleChanges,
        CommitSuggestion::MinorUpdates,
    ];
    for suggestion in all {
        assert_eq!(
            CommitType::from_message(suggestion.as_str()),
            Some(suggestion.commit_type()),
            "{suggestion} does not parse back to its type"
        );
        assert_eq!(suggestion.to_string(), suggestion.as_str());
    }
}

// ─── Purity ──────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn classify_is_deterministic(files in prop::collection::vec("[a-zA-Z0-9_./-]{0,24}", 0..12)) {
        let first = CommitClassifier::classify(&files);
        let second = CommitClassifier::classify(&files);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn classify_ignores_file_order(files in prop::collection::vec("[a-zA-Z0-9_./-]{0,24}", 0..12)) {
        let mut reversed = files.clone();
        reversed.reverse();
        prop_assert_eq!(
            CommitClassifier::classify(&files),
            CommitClassifier::classify(&reversed)
        );
    }
}
