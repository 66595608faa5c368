// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

/// One line of `git status --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// XY status code, e.g. `M `, `??`, `R `.
    pub code: String,
    pub path: String,
}

impl StatusEntry {
    /// Parse a porcelain line: two status characters, then the path.
    ///
    /// Returns `None` for lines that carry no path. Renames keep the
    /// destination path.
    pub fn parse(line: &str) -> Option<Self> {
        let code = line.get(..2)?;
        let mut path = line.get(2..)?.trim();
        if let Some((_, new)) = path.split_once(" -> ") {
            path = new.trim();
        }
        if path.is_empty() {
            return None;
        }
        Some(Self {
            code: code.to_string(),
            path: path.to_string(),
        })
    }

    /// Parse every line of a porcelain listing, skipping blank ones.
    pub fn parse_all(output: &str) -> Vec<Self> {
        output.lines().filter_map(Self::parse).collect()
    }

    /// Short marker for display, e.g. `[M]`, `[??]`.
    pub fn marker(&self) -> String {
        format!("[{}]", self.code.trim())
    }
}
