//! Canonical region traversal
//!
//! Extraction and filling must visit text regions in the identical order or
//! occurrence indices stop lining up with document positions. This module is
//! the only place that order is written down:
//!
//! 1. body paragraphs, in document order
//! 2. table cell paragraphs, table order, row-major, cell-major
//! 3. header paragraphs of every section, in section order
//! 4. footer paragraphs of every section, in section order
//!
//! Both accessors below must agree; `test_mutable_traversal_matches_shared`
//! pins that down.

use super::elements::{Document, Paragraph};

impl Document {
    /// All text-bearing paragraphs in canonical region order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        let tables = self
            .tables
            .iter()
            .flat_map(|table| table.rows.iter())
            .flat_map(|row| row.cells.iter())
            .flat_map(|cell| cell.paragraphs.iter());
        let headers = self.sections.iter().flat_map(|section| section.header.iter());
        let footers = self.sections.iter().flat_map(|section| section.footer.iter());
        self.body.iter().chain(tables).chain(headers).chain(footers)
    }

    /// Mutable variant of [`Document::paragraphs`], same order.
    pub fn paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> {
        let mut ordered: Vec<&mut Paragraph> = Vec::new();
        ordered.extend(self.body.iter_mut());
        for table in &mut self.tables {
            for row in &mut table.rows {
                for cell in &mut row.cells {
                    ordered.extend(cell.paragraphs.iter_mut());
                }
            }
        }
        // headers of every section come before any footer; collect footers
        // on the side during the single pass over sections
        let mut footers: Vec<&mut Paragraph> = Vec::new();
        for section in &mut self.sections {
            ordered.extend(section.header.iter_mut());
            footers.extend(section.footer.iter_mut());
        }
        ordered.extend(footers);
        ordered.into_iter()
    }
}
