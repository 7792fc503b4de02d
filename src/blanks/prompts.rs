//! Conversational question generation
//!
//! Well-known display names map to pre-written questions; anything else gets
//! a generated prompt based on the placeholder kind. Pure lookup, no side
//! effects.

use crate::blanks::placeholders::{Placeholder, PlaceholderKind};

/// Pre-written questions for well-known display names.
const QUESTIONS: &[(&str, &str)] = &[
    ("Company Name", "What's the name of the company?"),
    ("Investor Name", "Who is the investor?"),
    (
        "Date of Safe",
        "What date was the SAFE agreement signed? (e.g., January 1, 2024)",
    ),
    (
        "State of Incorporation",
        "In which state is the company incorporated? (e.g., Delaware)",
    ),
    (
        "Governing Law Jurisdiction",
        "Which state's laws should govern this agreement?",
    ),
    (
        "Amount",
        "What is the amount? (Enter amount in dollars, e.g., 1000000)",
    ),
    (
        "Purchase Amount",
        "What is the purchase amount for this investment? (Enter amount in dollars, e.g., 1000000)",
    ),
    (
        "Post-Money Valuation Cap",
        "What is the post-money valuation cap? (Enter amount in dollars, e.g., 10000000)",
    ),
];

/// The question to ask for a placeholder.
pub fn question_for(placeholder: &Placeholder) -> String {
    let name = placeholder.display_name.as_str();
    if let Some((_, question)) = QUESTIONS.iter().find(|(known, _)| *known == name) {
        return (*question).to_string();
    }
    match placeholder.kind {
        PlaceholderKind::Currency => {
            format!("What is the {name}? (Enter amount in dollars, e.g., 1000000)")
        }
        PlaceholderKind::Text => format!("Please provide: {name}"),
    }
}
