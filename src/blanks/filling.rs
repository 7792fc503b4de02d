//! Positional document filling
//!
//! Rewrites a document by substituting collected answers into placeholder
//! positions:
//! - `answers`: validation and per-literal pool construction
//! - `pool`: ordered replacement queues, consumed front-first
//! - `filler`: the region re-walk that performs the substitutions
//!
//! The fill trusts that the document still matches the content the
//! placeholder sequence was extracted from; keeping it unchanged in between
//! is the caller's responsibility.

pub mod answers;
pub mod filler;
pub mod pool;

pub use filler::fill;
pub use pool::ReplacementPool;

use std::collections::BTreeMap;
use std::fmt;

use crate::blanks::currency::CurrencyError;

/// Map from occurrence index to raw answer value. Iteration is ascending by
/// index, which is what keeps per-literal pools in occurrence order.
pub type AnswerMap = BTreeMap<usize, String>;

/// Errors raised while validating answers against the placeholder sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum FillError {
    /// A currency answer did not parse as a number.
    InvalidAmount(String),
    /// An answer referenced an occurrence index outside the sequence.
    UnknownIndex { index: usize, len: usize },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillError::InvalidAmount(raw) => {
                write!(f, "not a valid currency amount: '{raw}'")
            }
            FillError::UnknownIndex { index, len } => {
                write!(
                    f,
                    "answer index {index} is out of bounds for a sequence of {len} placeholders"
                )
            }
        }
    }
}

impl std::error::Error for FillError {}

impl From<CurrencyError> for FillError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::InvalidAmount(raw) => FillError::InvalidAmount(raw),
        }
    }
}
