//! # blanks
//!
//! Placeholder extraction and positional filling for structured documents.
//!
//! A template document carries bracketed placeholder tokens (`[Company Name]`
//! for text, `$[_____]` for currency amounts) spread across body paragraphs,
//! table cells, headers, and footers. The extractor walks every text region in
//! a fixed order and produces an ordered placeholder sequence; a caller
//! collects one answer per occurrence; the filler walks the same order again
//! and substitutes each answer into the position it was extracted from, so a
//! token that appears several times can receive a different value at each
//! occurrence.
//!
//! ```rust,ignore
//! use blanks::blanks::filling::{self, AnswerMap};
//! use blanks::blanks::scanning;
//!
//! let placeholders = scanning::extract(&document);
//! let mut answers = AnswerMap::new();
//! answers.insert(0, "Acme Technologies Inc.".to_string());
//! let filled = filling::fill(&document, &placeholders, &answers)?;
//! ```

pub mod blanks;
