//! Question/answer session over an extracted placeholder sequence
//!
//! The interview owns the immutable sequence and walks it one occurrence at
//! a time. Currency answers are normalized at submission, and a rejected
//! answer leaves the cursor and every prior answer in place, so the caller
//! re-prompts for just that occurrence.

use std::fmt;

use crate::blanks::currency::{normalize_currency, CurrencyError};
use crate::blanks::filling::AnswerMap;
use crate::blanks::placeholders::Placeholder;
use crate::blanks::prompts::question_for;

#[derive(Debug, Clone, PartialEq)]
pub enum AnswerError {
    /// The answer was blank after trimming.
    Empty,
    /// A currency answer did not parse as a number.
    InvalidAmount(String),
    /// Every occurrence has already been answered.
    Complete,
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerError::Empty => write!(f, "answer is empty"),
            AnswerError::InvalidAmount(raw) => {
                write!(f, "not a valid currency amount: '{raw}'")
            }
            AnswerError::Complete => write!(f, "all placeholders are already answered"),
        }
    }
}

impl std::error::Error for AnswerError {}

impl From<CurrencyError> for AnswerError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::InvalidAmount(raw) => AnswerError::InvalidAmount(raw),
        }
    }
}

/// One pass over the placeholder sequence, collecting an answer per
/// occurrence index.
#[derive(Debug, Clone)]
pub struct Interview {
    placeholders: Vec<Placeholder>,
    answers: AnswerMap,
    cursor: usize,
}

impl Interview {
    pub fn new(placeholders: Vec<Placeholder>) -> Self {
        Self {
            placeholders,
            answers: AnswerMap::new(),
            cursor: 0,
        }
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// The placeholder currently awaiting an answer.
    pub fn current(&self) -> Option<&Placeholder> {
        self.placeholders.get(self.cursor)
    }

    /// The question for the current placeholder.
    pub fn question(&self) -> Option<String> {
        self.current().map(question_for)
    }

    /// `"3/7"`-style progress indicator for the current question.
    pub fn progress(&self) -> String {
        let total = self.placeholders.len();
        format!("{}/{}", (self.cursor + 1).min(total), total)
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.placeholders.len()
    }

    /// Record an answer for the current occurrence and advance.
    ///
    /// Currency answers are normalized before storing; normalization is
    /// idempotent, so the filler accepts the stored form unchanged.
    pub fn submit(&mut self, answer: &str) -> Result<(), AnswerError> {
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            return Err(AnswerError::Empty);
        }
        let placeholder = self.current().ok_or(AnswerError::Complete)?;
        let value = if placeholder.kind.is_currency() {
            normalize_currency(trimmed)?
        } else {
            trimmed.to_string()
        };
        self.answers.insert(self.cursor, value);
        self.cursor += 1;
        Ok(())
    }

    /// Answers collected so far, keyed by occurrence index.
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn into_answers(self) -> AnswerMap {
        self.answers
    }

    /// Drop all answers and start over from the first occurrence.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.cursor = 0;
    }
}
