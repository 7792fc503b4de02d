//! Answer validation and pool construction
//!
//! Answers address placeholders by occurrence index. Validation runs before
//! any text is rewritten: an out-of-range index aborts the whole fill, and
//! currency values are re-normalized here whether or not the caller already
//! normalized them (both forms normalize to the same string).

use crate::blanks::currency::normalize_currency;
use crate::blanks::placeholders::Placeholder;

use super::pool::ReplacementPool;
use super::{AnswerMap, FillError};

/// Validate answers against the placeholder sequence and group them into
/// per-literal pools in ascending occurrence-index order.
pub fn build_pool(
    placeholders: &[Placeholder],
    answers: &AnswerMap,
) -> Result<ReplacementPool, FillError> {
    let mut pool = ReplacementPool::new();
    for (&index, raw) in answers {
        let placeholder = placeholders.get(index).ok_or(FillError::UnknownIndex {
            index,
            len: placeholders.len(),
        })?;
        let value = if placeholder.kind.is_currency() {
            normalize_currency(raw)?
        } else {
            raw.clone()
        };
        pool.push(&placeholder.literal, value);
    }
    Ok(pool)
}
