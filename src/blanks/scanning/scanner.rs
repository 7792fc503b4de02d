//! The extraction walk
//!
//! Visits every text region in canonical order and produces the ordered
//! placeholder sequence. The walk is deterministic: region order composed
//! with left-to-right match order inside each paragraph. Running it twice
//! over the same content yields the same sequence, so an occurrence index is
//! a stable address for answering.
//!
//! The seen-literals map lives for exactly one call and spans all regions,
//! so a literal repeated across, say, a body paragraph and a header is still
//! recognized as a duplicate.

use std::collections::HashMap;

use crate::blanks::ast::Document;
use crate::blanks::placeholders::{Placeholder, PlaceholderKind};

use super::labeling::{self, GENERIC_CURRENCY_LABEL};
use super::patterns;

/// Characters of surrounding text kept on each side of a match.
const CONTEXT_RADIUS: usize = 50;

/// Extract the ordered placeholder sequence from a document.
///
/// Text tokens that clean down to an empty label are discarded; currency
/// tokens always survive, labeled per [`super::labeling`]. Malformed bracket
/// text is simply not matched, so extraction itself cannot fail.
pub fn extract(document: &Document) -> Vec<Placeholder> {
    let mut placeholders = Vec::new();
    let mut seen: HashMap<String, Vec<String>> = HashMap::new();

    for paragraph in document.paragraphs() {
        scan_paragraph(&paragraph.text(), &mut seen, &mut placeholders);
    }

    placeholders
}

fn scan_paragraph(
    text: &str,
    seen: &mut HashMap<String, Vec<String>>,
    out: &mut Vec<Placeholder>,
) {
    for raw in patterns::find_tokens(text) {
        let cleaned = labeling::clean_label(&raw.inner);
        let anonymous = raw.currency && cleaned.is_empty();

        if !raw.currency && cleaned.is_empty() {
            continue;
        }

        let context = patterns::context_window(text, raw.start, raw.end, CONTEXT_RADIUS);

        let contexts = seen.entry(raw.literal.clone()).or_default();
        contexts.push(context.clone());
        let occurrence = contexts.len();

        let display_name = if anonymous {
            match labeling::infer_currency_label(&context) {
                Some(inferred) => inferred.to_string(),
                None if occurrence > 1 => {
                    labeling::numbered_label(GENERIC_CURRENCY_LABEL, occurrence)
                }
                None => GENERIC_CURRENCY_LABEL.to_string(),
            }
        } else {
            cleaned
        };

        let kind = if raw.currency {
            PlaceholderKind::Currency
        } else {
            PlaceholderKind::Text
        };
        out.push(Placeholder::new(raw.literal, display_name, kind, context));
    }
}
