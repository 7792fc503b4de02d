//! Paragraph element
//!
//! A paragraph holds a sequence of runs, each a span of text with an optional
//! named character style. Display text is the concatenation of every run's
//! text. Rewriting a paragraph collapses it to a single run that keeps the
//! first run's style; run boundaries inside a rewritten paragraph are not
//! preserved.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A styled span of text inside a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl Run {
    pub fn new(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: String) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: String) -> Self {
        Self {
            runs: vec![Run::new(text)],
        }
    }

    pub fn from_runs(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// The paragraph's display text, concatenated across runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Replace the paragraph's display text as a unit.
    ///
    /// The result is a single run carrying the first existing run's style.
    pub fn set_text(&mut self, text: &str) {
        let style = self.runs.first().and_then(|run| run.style.clone());
        self.runs = vec![Run {
            text: text.to_string(),
            style,
        }];
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
