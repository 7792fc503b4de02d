//! Section element
//!
//! A section contributes a header and a footer, each a list of paragraphs.

use serde::{Deserialize, Serialize};

use super::paragraph::Paragraph;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub header: Vec<Paragraph>,
    #[serde(default)]
    pub footer: Vec<Paragraph>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, header: Vec<Paragraph>) -> Self {
        self.header = header;
        self
    }

    pub fn with_footer(mut self, footer: Vec<Paragraph>) -> Self {
        self.footer = footer;
        self
    }
}
