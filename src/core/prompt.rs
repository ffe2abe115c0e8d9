//! Data-driven interactive questions.
//!
//! A flow is a slice of [`Question`] definitions asked in order by [`ask`].
//! Each question may carry a validator (re-asked until it passes) and a
//! condition evaluated against the answers given so far; questions whose
//! condition is false are skipped.
//!
//! The terminal is reached through the [`Prompter`] trait. [`TerminalPrompter`]
//! uses `dialoguer`; [`ScriptedPrompter`] replays canned answers.

use crate::core::error::{Result, SidebarError};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use std::collections::{BTreeMap, VecDeque};

pub type Validator = Box<dyn Fn(&str) -> std::result::Result<(), String>>;

/// Inclusion predicate over previous answers
pub type Condition = fn(&Answers) -> bool;

pub enum QuestionKind {
    Input { default: String },
    MultiSelect { items: Vec<String>, defaults: Vec<bool> },
    Confirm { default: bool },
}

pub struct Question {
    pub key: &'static str,
    pub prompt: String,
    pub kind: QuestionKind,
    pub validate: Option<Validator>,
    pub when: Option<Condition>,
}

impl Question {
    pub fn input(key: &'static str, prompt: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(
            key,
            prompt,
            QuestionKind::Input {
                default: default.into(),
            },
        )
    }

    pub fn multi_select(
        key: &'static str,
        prompt: impl Into<String>,
        items: Vec<String>,
        defaults: Vec<bool>,
    ) -> Self {
        Self::new(key, prompt, QuestionKind::MultiSelect { items, defaults })
    }

    pub fn confirm(key: &'static str, prompt: impl Into<String>, default: bool) -> Self {
        Self::new(key, prompt, QuestionKind::Confirm { default })
    }

    fn new(key: &'static str, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            key,
            prompt: prompt.into(),
            kind,
            validate: None,
            when: None,
        }
    }

    pub fn with_validator<F>(mut self, validate: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<(), String> + 'static,
    {
        self.validate = Some(Box::new(validate));
        self
    }

    pub fn when(mut self, condition: Condition) -> Self {
        self.when = Some(condition);
        self
    }

    fn is_included(&self, answers: &Answers) -> bool {
        self.when.map_or(true, |condition| condition(answers))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Selection(Vec<usize>),
    Flag(bool),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Answers(BTreeMap<&'static str, Answer>);

impl Answers {
    pub fn insert(&mut self, key: &'static str, answer: Answer) {
        self.0.insert(key, answer);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(Answer::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn selection(&self, key: &str) -> Option<&[usize]> {
        match self.0.get(key) {
            Some(Answer::Selection(selection)) => Some(selection.as_slice()),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.0.get(key) {
            Some(Answer::Flag(flag)) => Some(*flag),
            _ => None,
        }
    }
}

pub trait Prompter {
    /// Ask for text until `validate` accepts it
    fn input(
        &mut self,
        prompt: &str,
        default: &str,
        validate: &dyn Fn(&str) -> std::result::Result<(), String>,
    ) -> Result<String>;

    fn multi_select(&mut self, prompt: &str, items: &[String], defaults: &[bool])
        -> Result<Vec<usize>>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Ask every included question in order, recording answers by key
pub fn ask(questions: &[Question], prompter: &mut dyn Prompter, answers: &mut Answers) -> Result<()> {
    for question in questions {
        if !question.is_included(answers) {
            log::debug!("Skipping question '{}'", question.key);
            continue;
        }

        let answer = match &question.kind {
            QuestionKind::Input { default } => {
                let accept_all = |_: &str| -> std::result::Result<(), String> { Ok(()) };
                let validate: &dyn Fn(&str) -> std::result::Result<(), String> =
                    match &question.validate {
                        Some(validate) => &**validate,
                        None => &accept_all,
                    };
                Answer::Text(prompter.input(&question.prompt, default, validate)?)
            }
            QuestionKind::MultiSelect { items, defaults } => {
                Answer::Selection(prompter.multi_select(&question.prompt, items, defaults)?)
            }
            QuestionKind::Confirm { default } => {
                Answer::Flag(prompter.confirm(&question.prompt, *default)?)
            }
        };

        log::debug!("Answered '{}': {:?}", question.key, answer);
        answers.insert(question.key, answer);
    }

    Ok(())
}

/// Prompter for a real terminal
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn input(
        &mut self,
        prompt: &str,
        default: &str,
        validate: &dyn Fn(&str) -> std::result::Result<(), String>,
    ) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|value: &String| validate(value));

        if !default.is_empty() {
            input = input.default(default.to_string());
        }

        Ok(input.interact_text()?)
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>> {
        let selection = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact()?;
        Ok(selection)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}

/// Prompter replaying canned answers, for tests and non-terminal callers.
///
/// Text inputs that fail validation are recorded in [`rejections`] and the
/// next scripted answer is tried, the way a user would retype. An empty text
/// answer takes the question's default.
///
/// [`rejections`]: ScriptedPrompter::rejections
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: VecDeque<Answer>,
    rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(script: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            script: script.into_iter().collect(),
            rejections: Vec::new(),
        }
    }

    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn next(&mut self, prompt: &str) -> Result<Answer> {
        self.script.pop_front().ok_or_else(|| {
            SidebarError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("no scripted answer left for '{prompt}'"),
            ))
        })
    }

    fn mismatch(prompt: &str, answer: &Answer) -> SidebarError {
        SidebarError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("scripted answer {answer:?} does not fit '{prompt}'"),
        ))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(
        &mut self,
        prompt: &str,
        default: &str,
        validate: &dyn Fn(&str) -> std::result::Result<(), String>,
    ) -> Result<String> {
        loop {
            let text = match self.next(prompt)? {
                Answer::Text(text) if text.is_empty() => default.to_string(),
                Answer::Text(text) => text,
                other => return Err(Self::mismatch(prompt, &other)),
            };

            match validate(&text) {
                Ok(()) => return Ok(text),
                Err(message) => self.rejections.push(message),
            }
        }
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        _items: &[String],
        _defaults: &[bool],
    ) -> Result<Vec<usize>> {
        match self.next(prompt)? {
            Answer::Selection(selection) => Ok(selection),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt)? {
            Answer::Flag(flag) => Ok(flag),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }
}
