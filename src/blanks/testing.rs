//! Test support
//!
//! Tests build documents through the fluent [`DocumentBuilder`] instead of
//! hand-assembling node types, and share one canonical financing-agreement
//! fixture so expected sequences live in a single place.

use crate::blanks::ast::{Cell, Document, Paragraph, Row, Run, Section, Table};

/// Start building a document.
pub fn doc() -> DocumentBuilder {
    DocumentBuilder::default()
}

#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Append a body paragraph with a single unstyled run.
    pub fn paragraph(mut self, text: &str) -> Self {
        self.document.body.push(Paragraph::from_text(text.to_string()));
        self
    }

    /// Append a body paragraph split into styled runs.
    pub fn runs(mut self, runs: &[(&str, Option<&str>)]) -> Self {
        let runs = runs
            .iter()
            .map(|(text, style)| match style {
                Some(style) => Run::styled((*text).to_string(), (*style).to_string()),
                None => Run::new((*text).to_string()),
            })
            .collect();
        self.document.body.push(Paragraph::from_runs(runs));
        self
    }

    /// Append a table from a grid of cell texts; each cell holds one
    /// paragraph.
    pub fn table(mut self, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|cells| {
                Row::new(
                    cells
                        .iter()
                        .map(|text| Cell::from_text((*text).to_string()))
                        .collect(),
                )
            })
            .collect();
        self.document.tables.push(Table::new(rows));
        self
    }

    /// Append a section with the given header and footer paragraph texts.
    pub fn section(mut self, header: &[&str], footer: &[&str]) -> Self {
        let to_paragraphs = |texts: &[&str]| {
            texts
                .iter()
                .map(|text| Paragraph::from_text((*text).to_string()))
                .collect()
        };
        self.document.sections.push(
            Section::new()
                .with_header(to_paragraphs(header))
                .with_footer(to_paragraphs(footer)),
        );
        self
    }

    pub fn build(self) -> Document {
        self.document
    }
}

/// A miniature financing agreement exercising every region kind and both
/// bracket conventions, including duplicate literals.
///
/// Expected extraction order:
/// 0. `[Company Name]` (body)
/// 1. `[State of Incorporation]` (body)
/// 2. `[Investor Name]` (body)
/// 3. `$[_____________]` labeled `Purchase Amount` from context (body)
/// 4. `$[_____________]` labeled `Post-Money Valuation Cap` from context (body)
/// 5. `[Investor Name]` (table)
/// 6. `[Date of Safe]` (table)
/// 7. `[Company Name]` (header)
/// 8. `[Governing Law Jurisdiction]` (footer)
pub fn sample_agreement() -> Document {
    doc()
        .paragraph("THIS AGREEMENT is made by [Company Name], a [State of Incorporation] corporation.")
        .paragraph("The investor [Investor Name] pays the purchase amount of $[_____________] today.")
        .paragraph("The post-money valuation cap is $[_____________].")
        .table(&[
            &["Signature", "[Investor Name]"],
            &["Date", "[Date of Safe]"],
        ])
        .section(
            &["Safe Financing - [Company Name]"],
            &["Governed by the laws of [Governing Law Jurisdiction]"],
        )
        .build()
}
