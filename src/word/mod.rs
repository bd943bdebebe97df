//! Paragraph and run building for Word documents.
//!
//! This module provides the mutation API over the element store: the
//! paragraph formatting cascade, run-level formatting, field-code emission,
//! and the formatting vocabularies they share.

pub mod field;
pub mod format;
pub mod paragraph;
pub mod run;

// Re-export the builder types
pub use paragraph::Paragraph;
pub use run::Run;

// Re-export formatting vocabularies
pub use field::FieldCharType;
pub use format::{PageNumberFormat, ParagraphAlignment, UnderlineStyle};
