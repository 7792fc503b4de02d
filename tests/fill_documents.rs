//! Filling over whole documents
//!
//! Covers positional substitution, duplicate handling, surplus policy, run
//! collapsing, and the round-trip property over the sample agreement.

use blanks::blanks::currency::normalize_currency;
use blanks::blanks::filling::{fill, AnswerMap, FillError};
use blanks::blanks::placeholders::PlaceholderKind;
use blanks::blanks::scanning::extract;
use blanks::blanks::testing::{doc, sample_agreement};

fn answers(values: &[(usize, &str)]) -> AnswerMap {
    values
        .iter()
        .map(|(index, value)| (*index, (*value).to_string()))
        .collect()
}

#[test]
fn test_duplicate_literal_receives_distinct_values() {
    // the same literal in two paragraphs, answered differently per occurrence
    let document = doc()
        .paragraph("First: [Investor Name].")
        .paragraph("Second: [Investor Name].")
        .build();
    let placeholders = extract(&document);
    let filled = fill(
        &document,
        &placeholders,
        &answers(&[(0, "Jane"), (1, "Jane Smith")]),
    )
    .unwrap();

    assert_eq!(filled.body[0].text(), "First: Jane.");
    assert_eq!(filled.body[1].text(), "Second: Jane Smith.");
}

#[test]
fn test_original_document_is_not_mutated() {
    let document = doc().paragraph("[Company Name] agrees.").build();
    let placeholders = extract(&document);
    let _ = fill(&document, &placeholders, &answers(&[(0, "Acme")])).unwrap();

    assert_eq!(document.body[0].text(), "[Company Name] agrees.");
}

#[test]
fn test_no_answers_leaves_document_unchanged() {
    let document = sample_agreement();
    let placeholders = extract(&document);
    let filled = fill(&document, &placeholders, &AnswerMap::new()).unwrap();

    assert_eq!(filled, document);
}

#[test]
fn test_same_literal_twice_in_one_paragraph() {
    let document = doc()
        .paragraph("[Party Name] and [Party Name] hereby agree.")
        .build();
    let placeholders = extract(&document);
    assert_eq!(placeholders.len(), 2);

    let filled = fill(
        &document,
        &placeholders,
        &answers(&[(0, "Acme"), (1, "Jane Smith")]),
    )
    .unwrap();
    assert_eq!(filled.body[0].text(), "Acme and Jane Smith hereby agree.");
}

#[test]
fn test_unanswered_occurrences_are_left_in_place() {
    let document = doc()
        .paragraph("[Witness Name] here, [Witness Name] there, [Witness Name] everywhere.")
        .build();
    let placeholders = extract(&document);
    assert_eq!(placeholders.len(), 3);

    let filled = fill(
        &document,
        &placeholders,
        &answers(&[(0, "Ada"), (1, "Grace")]),
    )
    .unwrap();
    assert_eq!(
        filled.body[0].text(),
        "Ada here, Grace there, [Witness Name] everywhere."
    );
}

#[test]
fn test_surplus_answers_are_silently_unused() {
    // a sequence extracted from richer content than the document being
    // filled: the extra pooled value has no occurrence to land in
    let two_occurrences = doc()
        .paragraph("[Company Name] first")
        .paragraph("[Company Name] second")
        .build();
    let placeholders = extract(&two_occurrences);

    let one_occurrence = doc().paragraph("[Company Name] only").build();
    let filled = fill(
        &one_occurrence,
        &placeholders,
        &answers(&[(0, "Acme"), (1, "Globex")]),
    )
    .unwrap();

    assert_eq!(filled.body[0].text(), "Acme only");
}

#[test]
fn test_currency_answer_normalized_into_document() {
    let document = doc()
        .paragraph("The purchase amount of $[_____________] is payable.")
        .build();
    let placeholders = extract(&document);
    assert_eq!(placeholders[0].kind, PlaceholderKind::Currency);

    let filled = fill(&document, &placeholders, &answers(&[(0, "1,000,000")])).unwrap();
    assert_eq!(
        filled.body[0].text(),
        "The purchase amount of $1,000,000 is payable."
    );
}

#[test]
fn test_invalid_currency_answer_aborts_fill() {
    let document = doc().paragraph("pay $[_____] now").build();
    let placeholders = extract(&document);

    let err = fill(&document, &placeholders, &answers(&[(0, "abc")])).unwrap_err();
    assert_eq!(err, FillError::InvalidAmount("abc".to_string()));
}

#[test]
fn test_unknown_index_aborts_fill() {
    let document = doc().paragraph("[Company Name]").build();
    let placeholders = extract(&document);

    let err = fill(&document, &placeholders, &answers(&[(7, "Acme")])).unwrap_err();
    assert_eq!(err, FillError::UnknownIndex { index: 7, len: 1 });
}

#[test]
fn test_rewritten_paragraph_collapses_runs() {
    let document = doc()
        .runs(&[("The [Com", Some("bold")), ("pany Name] agrees", None)])
        .build();
    let placeholders = extract(&document);
    let filled = fill(&document, &placeholders, &answers(&[(0, "Acme")])).unwrap();

    assert_eq!(filled.body[0].runs.len(), 1);
    assert_eq!(filled.body[0].text(), "The Acme agrees");
    assert_eq!(filled.body[0].runs[0].style.as_deref(), Some("bold"));
}

#[test]
fn test_untouched_paragraphs_keep_their_runs() {
    let document = doc()
        .runs(&[("no tokens ", Some("bold")), ("in here", None)])
        .paragraph("[Company Name]")
        .build();
    let placeholders = extract(&document);
    let filled = fill(&document, &placeholders, &answers(&[(0, "Acme")])).unwrap();

    assert_eq!(filled.body[0].runs.len(), 2);
}

#[test]
fn test_fill_reaches_every_region() {
    let document = sample_agreement();
    let placeholders = extract(&document);
    let filled = fill(
        &document,
        &placeholders,
        &answers(&[
            (0, "Acme Technologies Inc."),
            (1, "Delaware"),
            (2, "Jane Smith"),
            (3, "1000000"),
            (4, "10000000"),
            (5, "Jane Smith"),
            (6, "January 15, 2024"),
            (7, "Acme Technologies Inc."),
            (8, "Delaware"),
        ]),
    )
    .unwrap();

    let text = filled.full_text();
    assert!(text.contains("$1,000,000"));
    assert!(text.contains("$10,000,000"));
    assert!(filled.tables[0].rows[1].cells[1].paragraphs[0]
        .text()
        .contains("January 15, 2024"));
    assert_eq!(
        filled.sections[0].header[0].text(),
        "Safe Financing - Acme Technologies Inc."
    );
    assert_eq!(
        filled.sections[0].footer[0].text(),
        "Governed by the laws of Delaware"
    );
    assert!(!text.contains('['));
}

#[test]
fn test_round_trip_markers_land_in_their_positions() {
    // answer every occurrence with a distinct marker; each must appear
    // exactly once and no literal may survive
    let document = sample_agreement();
    let placeholders = extract(&document);

    let mut marker_values = AnswerMap::new();
    for (index, placeholder) in placeholders.iter().enumerate() {
        let value = match placeholder.kind {
            PlaceholderKind::Currency => format!("{}", 1_000_001 + index),
            PlaceholderKind::Text => format!("MARKER-{index}"),
        };
        marker_values.insert(index, value);
    }

    let filled = fill(&document, &placeholders, &marker_values).unwrap();
    let text = filled.full_text();

    for (index, placeholder) in placeholders.iter().enumerate() {
        let expected = match placeholder.kind {
            PlaceholderKind::Currency => {
                normalize_currency(&(1_000_001 + index).to_string()).unwrap()
            }
            PlaceholderKind::Text => format!("MARKER-{index}"),
        };
        assert_eq!(
            text.matches(&expected).count(),
            1,
            "marker for occurrence {index} should appear exactly once"
        );
        assert!(
            !text.contains(&placeholder.literal),
            "literal {} should be fully consumed",
            placeholder.literal
        );
    }
}
