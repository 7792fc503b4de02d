//! The fill walk
//!
//! Re-visits the document's regions in the same canonical order extraction
//! used and substitutes pooled values into the first remaining occurrence of
//! each active literal. The input document is never mutated; any rewritten
//! paragraph in the returned copy collapses to a single run.

use crate::blanks::ast::Document;
use crate::blanks::placeholders::Placeholder;

use super::answers::build_pool;
use super::pool::ReplacementPool;
use super::{AnswerMap, FillError};

/// Fill a document's placeholders with the supplied answers.
///
/// `placeholders` must be the sequence extracted from this same document
/// content; the fill trusts traversal order to align occurrences and cannot
/// detect a document that changed in between.
///
/// A literal with more answers than physical occurrences leaves the surplus
/// values unused; occurrences beyond the supplied answers are left as-is.
pub fn fill(
    document: &Document,
    placeholders: &[Placeholder],
    answers: &AnswerMap,
) -> Result<Document, FillError> {
    let mut pool = build_pool(placeholders, answers)?;
    let mut filled = document.clone();
    for paragraph in filled.paragraphs_mut() {
        if pool.is_empty() {
            break;
        }
        let text = paragraph.text();
        if let Some(rewritten) = substitute(&text, &mut pool) {
            paragraph.set_text(&rewritten);
        }
    }
    Ok(filled)
}

/// Substitute pooled values into one paragraph's text. Returns the new text
/// only if something changed.
fn substitute(text: &str, pool: &mut ReplacementPool) -> Option<String> {
    let mut rewritten = text.to_string();
    let mut changed = false;
    for literal in pool.active_literals() {
        // resume each scan after the substituted value, so a value that
        // itself contains the literal is never consumed as an occurrence
        let mut search_from = 0;
        while pool.has(&literal) {
            let at = match rewritten[search_from..].find(&literal) {
                Some(offset) => search_from + offset,
                None => break,
            };
            let value = match pool.pop(&literal) {
                Some(value) => value,
                None => break,
            };
            rewritten.replace_range(at..at + literal.len(), &value);
            search_from = at + value.len();
            changed = true;
        }
    }
    changed.then_some(rewritten)
}
