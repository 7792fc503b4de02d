//! Document node types

pub mod document;
pub mod paragraph;
pub mod section;
pub mod table;

pub use document::Document;
pub use paragraph::{Paragraph, Run};
pub use section::Section;
pub use table::{Cell, Row, Table};
