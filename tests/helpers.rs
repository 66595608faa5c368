// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use smartgit::error::{Error, Result};
use smartgit::services::progress::ProgressReporter;
use smartgit::services::prompt::{Choice, Prompter, Validator};
use smartgit::services::runner::{CommandRunner, command_line};

/// Runner that answers from a table keyed by command line and records calls.
/// Commands with no entry succeed with empty output.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeRunner {
    responses: HashMap<String, std::result::Result<String, String>>,
    calls: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, command: &str, stdout: &str) -> Self {
        self.responses
            .insert(command.to_string(), Ok(stdout.to_string()));
        self
    }

    pub fn fail(mut self, command: &str, stderr: &str) -> Self {
        self.responses
            .insert(command.to_string(), Err(stderr.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn ran(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command)
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let line = command_line(program, args);
        self.calls.borrow_mut().push(line.clone());
        match self.responses.get(&line) {
            Some(Ok(out)) => Ok(out.trim().to_string()),
            Some(Err(msg)) => Err(Error::CommandExecution {
                command: line,
                message: msg.clone(),
            }),
            None => Ok(String::new()),
        }
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Answer {
    Confirm(bool),
    Select(usize),
    Input(&'static str),
}

/// Prompter that replays canned answers in order and records what was asked.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
    pub rejected: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, message: &str) -> Answer {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {message}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        match self.next(message) {
            Answer::Confirm(b) => Ok(b),
            other => panic!("expected confirm answer for {message:?}, got {other:?}"),
        }
    }

    fn select<T: Clone>(&mut self, message: &str, choices: &[Choice<T>]) -> Result<T> {
        match self.next(message) {
            Answer::Select(i) => Ok(choices[i].value.clone()),
            other => panic!("expected select answer for {message:?}, got {other:?}"),
        }
    }

    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: Option<Validator<'_>>,
    ) -> Result<String> {
        loop {
            let typed = match self.next(message) {
                Answer::Input(s) => s.to_string(),
                other => panic!("expected input answer for {message:?}, got {other:?}"),
            };
            let value = match default {
                Some(d) if typed.is_empty() => d.to_string(),
                _ => typed,
            };
            if let Some(validate) = validator
                && let Err(e) = validate(value.as_str())
            {
                self.rejected.push(e.to_string());
                continue;
            }
            return Ok(value);
        }
    }
}

/// Reporter that keeps every call as a `kind: message` line.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Vec<String>,
}

#[allow(dead_code)]
impl RecordingReporter {
    pub fn contains(&self, needle: &str) -> bool {
        self.events.iter().any(|e| e.contains(needle))
    }
}

impl ProgressReporter for RecordingReporter {
    fn clear(&mut self) {
        self.events.push("clear".into());
    }

    fn start(&mut self, msg: &str) {
        self.events.push(format!("start: {msg}"));
    }

    fn succeed(&mut self, msg: &str) {
        self.events.push(format!("succeed: {msg}"));
    }

    fn fail(&mut self, msg: &str) {
        self.events.push(format!("fail: {msg}"));
    }

    fn success(&mut self, msg: &str) {
        self.events.push(format!("success: {msg}"));
    }

    fn info(&mut self, msg: &str) {
        self.events.push(format!("info: {msg}"));
    }

    fn warn(&mut self, msg: &str) {
        self.events.push(format!("warn: {msg}"));
    }

    fn error(&mut self, msg: &str) {
        self.events.push(format!("error: {msg}"));
    }

    fn list(&mut self, title: &str, items: &[String]) {
        self.events.push(format!("list: {title} {}", items.join(", ")));
    }

    fn highlight(&mut self, title: &str, body: &str) {
        self.events.push(format!("highlight: {title} {body}"));
    }
}
