//! Document element
//!
//! The document is the root of the region tree: body paragraphs, tables, and
//! sections (each carrying a header and a footer). All placeholder processing
//! walks these regions through the canonical traversal in
//! [`crate::blanks::ast::traversal`]; nothing else may define a region order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paragraph::Paragraph;
use super::section::Section;
use super::table::Table;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub body: Vec<Paragraph>,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(body: Vec<Paragraph>) -> Self {
        Self {
            body,
            ..Self::default()
        }
    }

    /// Number of text-bearing paragraphs across all regions.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Every paragraph's text in traversal order, newline-joined.
    pub fn full_text(&self) -> String {
        self.paragraphs()
            .map(|para| para.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document({} body paragraphs, {} tables, {} sections)",
            self.body.len(),
            self.tables.len(),
            self.sections.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blanks::ast::elements::table::{Cell, Row};

    #[test]
    fn test_document_creation() {
        let doc = Document::with_body(vec![
            Paragraph::from_text("Para 1".to_string()),
            Paragraph::from_text("Para 2".to_string()),
        ]);
        assert_eq!(doc.body.len(), 2);
        assert_eq!(doc.paragraph_count(), 2);
    }

    #[test]
    fn test_full_text_spans_regions() {
        let mut doc = Document::with_body(vec![Paragraph::from_text("body".to_string())]);
        doc.tables.push(Table::new(vec![Row::new(vec![Cell::from_text(
            "cell".to_string(),
        )])]));
        doc.sections.push(
            Section::new()
                .with_header(vec![Paragraph::from_text("header".to_string())])
                .with_footer(vec![Paragraph::from_text("footer".to_string())]),
        );
        assert_eq!(doc.full_text(), "body\ncell\nheader\nfooter");
    }

    #[test]
    fn test_json_round_trip() {
        let doc = Document::with_body(vec![Paragraph::from_text(
            "The [Company Name] agrees.".to_string(),
        )]);
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_minimal_artifact_defaults_empty_regions() {
        let doc: Document = serde_json::from_str(r#"{"body": []}"#).unwrap();
        assert!(doc.tables.is_empty());
        assert!(doc.sections.is_empty());
    }
}
