// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use dialoguer::{Confirm, Input, Select};

use crate::error::{Error, Result, ValidationError};

/// A labelled option in a [`Prompter::select`] list.
#[derive(Debug, Clone)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Checks a line of input. A rejected answer is asked again.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), ValidationError>;

/// Asks the user questions.
pub trait Prompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    fn select<T: Clone>(&mut self, message: &str, choices: &[Choice<T>]) -> Result<T>;

    /// Read a line of text. Pressing Enter on an empty line takes `default`.
    /// When a validator is given, input is re-requested until it passes.
    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: Option<Validator<'_>>,
    ) -> Result<String>;
}

/// Terminal prompts via `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()?)
    }

    fn select<T: Clone>(&mut self, message: &str, choices: &[Choice<T>]) -> Result<T> {
        if choices.is_empty() {
            return Err(Error::Dialog(format!("no choices for '{message}'")));
        }

        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        let selection = Select::new()
            .with_prompt(message)
            .items(&labels)
            .default(0)
            .interact()?;

        Ok(choices[selection].value.clone())
    }

    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: Option<Validator<'_>>,
    ) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(message);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        if let Some(validate) = validator {
            // let the validator see empty lines so it can explain the rejection
            input = input
                .allow_empty(true)
                .validate_with(move |s: &String| validate(s.as_str()));
        }
        Ok(input.interact_text()?)
    }
}
