// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;
use smartgit::services::classifier::CommitClassifier;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let files: Vec<&str> = s.split('\n').collect();
        let first = CommitClassifier::classify(&files);
        assert_eq!(first, CommitClassifier::classify(&files));
    }
});
