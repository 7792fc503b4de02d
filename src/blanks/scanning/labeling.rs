//! Display-name derivation
//!
//! A token's label starts from its cleaned bracket-inner text. Currency
//! tokens whose brackets hold nothing but filler get the generic label, then
//! a keyword pass over the surrounding context, then an occurrence number if
//! a duplicate stays anonymous.

/// Label given to currency tokens whose bracket text is pure filler.
pub const GENERIC_CURRENCY_LABEL: &str = "Amount";

/// Context phrases mapped to inferred labels, tried in order, first hit wins.
const CURRENCY_KEYWORDS: &[(&str, &str)] = &[
    ("purchase amount", "Purchase Amount"),
    ("valuation cap", "Post-Money Valuation Cap"),
    ("post-money", "Post-Money Valuation Cap"),
    ("investment", "Investment Amount"),
];

/// Strip filler underscores from both ends, then surrounding whitespace.
pub fn clean_label(inner: &str) -> String {
    inner.trim_matches('_').trim().to_string()
}

/// Infer a label for an anonymous currency token from its context window.
///
/// Case-insensitive substring containment against a fixed phrase table; no
/// further language understanding is attempted.
pub fn infer_currency_label(context: &str) -> Option<&'static str> {
    let lowered = context.to_lowercase();
    CURRENCY_KEYWORDS
        .iter()
        .find(|(phrase, _)| lowered.contains(*phrase))
        .map(|(_, label)| *label)
}

/// Disambiguate a still-anonymous duplicate by its occurrence number.
pub fn numbered_label(base: &str, occurrence: usize) -> String {
    format!("{base} (#{occurrence})")
}
