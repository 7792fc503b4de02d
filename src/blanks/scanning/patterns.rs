//! Placeholder token patterns
//!
//! Two bracket conventions are recognized: `[ ... ]` for text tokens and
//! `$[ ... ]` for currency tokens. A token runs to the first closing bracket;
//! nesting is not supported. Matching is a single left-to-right pass, so
//! occurrence order within a paragraph is position order, and the currency
//! form wins wherever it applies because its match starts one character
//! earlier, at the dollar sign.

use once_cell::sync::Lazy;
use regex::Regex;

/// Combined token pattern: optional `$` prefix, then a bracketed span up to
/// the first `]`.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$?\[[^\]]+\]").unwrap());

/// A raw pattern match inside one paragraph's text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMatch {
    /// Exact matched substring, delimiters (and `$` prefix) included.
    pub literal: String,
    /// Bracket-inner text, delimiters excluded.
    pub inner: String,
    /// Byte offset of the match start in the paragraph text.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// Whether the currency-prefixed convention matched.
    pub currency: bool,
}

/// Scan one paragraph's text for placeholder tokens, left to right.
pub fn find_tokens(text: &str) -> Vec<RawMatch> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|found| {
            let literal = found.as_str().to_string();
            let currency = literal.starts_with('$');
            let inner_start = if currency { 2 } else { 1 };
            let inner = literal[inner_start..literal.len() - 1].to_string();
            RawMatch {
                literal,
                inner,
                start: found.start(),
                end: found.end(),
                currency,
            }
        })
        .collect()
}

/// Up to `radius` characters of surrounding text on each side of the match
/// span `start..end`, clamped to the text and to char boundaries, trimmed.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> String {
    let mut from = start;
    for _ in 0..radius {
        match text[..from].chars().next_back() {
            Some(ch) => from -= ch.len_utf8(),
            None => break,
        }
    }
    let mut to = end;
    for _ in 0..radius {
        match text[to..].chars().next() {
            Some(ch) => to += ch.len_utf8(),
            None => break,
        }
    }
    text[from..to].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_bracket_token() {
        let matches = find_tokens("The [Company Name] agrees.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].literal, "[Company Name]");
        assert_eq!(matches[0].inner, "Company Name");
        assert!(!matches[0].currency);
    }

    #[test]
    fn test_currency_prefix_wins_over_plain_bracket() {
        let matches = find_tokens("pay $[Purchase Amount] now");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].literal, "$[Purchase Amount]");
        assert_eq!(matches[0].inner, "Purchase Amount");
        assert!(matches[0].currency);
    }

    #[test]
    fn test_left_to_right_order_with_mixed_kinds() {
        let matches = find_tokens("$[_____] owed by [Company Name] to [Investor Name]");
        let literals: Vec<&str> = matches.iter().map(|m| m.literal.as_str()).collect();
        assert_eq!(
            literals,
            vec!["$[_____]", "[Company Name]", "[Investor Name]"]
        );
    }

    #[test]
    fn test_first_closing_bracket_terminates() {
        let matches = find_tokens("[Outer [Inner] tail]");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].literal, "[Outer [Inner]");
    }

    #[test]
    fn test_unmatched_brackets_are_not_tokens() {
        assert!(find_tokens("no closing [ bracket here").is_empty());
        assert!(find_tokens("no opening ] bracket here").is_empty());
        assert!(find_tokens("empty [] brackets").is_empty());
    }

    #[test]
    fn test_context_window_clamps_and_trims() {
        let text = "short [Name] tail";
        let window = context_window(text, 6, 12, 50);
        assert_eq!(window, "short [Name] tail");
    }

    #[test]
    fn test_context_window_respects_radius() {
        let text = "aaaaaaaaaa[X]bbbbbbbbbb";
        let window = context_window(text, 10, 13, 3);
        assert_eq!(window, "aaa[X]bbb");
    }

    #[test]
    fn test_context_window_multibyte_safe() {
        let text = "ééééé[Name]ûûûûû";
        let matches = find_tokens(text);
        let window = context_window(text, matches[0].start, matches[0].end, 3);
        assert_eq!(window, "ééé[Name]ûûû");
    }
}
