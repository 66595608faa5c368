// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::services::guard::DEFAULT_PROTECTED_BRANCHES;

/// Name of the optional per-repository config file.
pub const PROJECT_CONFIG_FILE: &str = ".smartgit.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Branches that trigger the protected-branch prompt
    #[serde(default = "default_protected_branches")]
    pub protected_branches: Vec<String>,

    /// Push target. `None` runs a plain `git push`.
    #[serde(default)]
    pub remote: Option<String>,

    /// Push after committing (default: true)
    #[serde(default = "default_true")]
    pub push: bool,

    /// Clear the terminal between wizard steps (default: true)
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

fn default_protected_branches() -> Vec<String> {
    DEFAULT_PROTECTED_BRANCHES
        .iter()
        .map(|b| b.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protected_branches: default_protected_branches(),
            remote: None,
            push: true,
            clear_screen: true,
        }
    }
}

impl Config {
    /// Load with priority: ENV > user config > project config > defaults
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd, Self::config_path().as_deref())
    }

    /// Load using an explicit project directory and user config file.
    pub fn load_from(project_dir: &Path, user_config: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let project_config = project_dir.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            figment = figment.merge(Toml::file(&project_config));
        }

        if let Some(path) = user_config
            && path.exists()
        {
            figment = figment.merge(Toml::file(path));
        }

        // SMARTGIT_REMOTE, SMARTGIT_PUSH, SMARTGIT_PROTECTED_BRANCHES='["main"]', ...
        figment = figment.merge(Env::prefixed("SMARTGIT_"));

        let config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "smartgit").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.protected_branches.iter().any(|b| b.trim().is_empty()) {
            return Err(Error::Config(
                "protected_branches cannot contain empty names".into(),
            ));
        }

        if let Some(ref remote) = self.remote {
            if remote.is_empty() {
                return Err(Error::Config("remote cannot be empty".into()));
            }
            if remote.contains(char::is_whitespace) {
                return Err(Error::Config(format!(
                    "remote must not contain whitespace, got '{remote}'"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_blank_protected_branch() {
        let config = Config {
            protected_branches: vec!["main".into(), " ".into()],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_remote_with_whitespace() {
        let config = Config {
            remote: Some("origin main".into()),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let config = Config {
            remote: Some(String::new()),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
