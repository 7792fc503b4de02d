//! Placeholder records
//!
//! A placeholder is one physical occurrence of a bracketed token:
//! - `literal`: the exact matched substring, delimiters included. All
//!   occurrences sharing a literal are filled from the same answer pool,
//!   consumed in order.
//! - `display_name`: human-readable label used for question prompting.
//! - `kind`: text or currency.
//! - `context`: surrounding text window kept for disambiguation and prompts.
//!
//! A placeholder's position in the extracted sequence is its occurrence
//! index, the addressing unit shared by the interview loop and the filler.
//! Two placeholders with the same literal are distinct entries at different
//! indices. Records are never mutated once extracted; indices are final.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderKind {
    Text,
    Currency,
}

impl PlaceholderKind {
    pub fn is_currency(self) -> bool {
        self == PlaceholderKind::Currency
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderKind::Text => write!(f, "text"),
            PlaceholderKind::Currency => write!(f, "currency"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    pub literal: String,
    pub display_name: String,
    pub kind: PlaceholderKind,
    pub context: String,
}

impl Placeholder {
    pub fn new(
        literal: String,
        display_name: String,
        kind: PlaceholderKind,
        context: String,
    ) -> Self {
        Self {
            literal,
            display_name,
            kind,
            context,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}: {})", self.literal, self.kind, self.display_name)
    }
}
