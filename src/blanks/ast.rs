//! Structured document model
//!
//! A document is a tree of text-bearing regions: body paragraphs, tables of
//! rows and cells, and per-section header and footer paragraph lists.
//! Paragraph text is carried by styled runs; placeholder scanning always
//! operates on a paragraph's concatenated text, since a token may span run
//! boundaries.

pub mod elements;
pub mod traversal;

pub use elements::{Cell, Document, Paragraph, Row, Run, Section, Table};
