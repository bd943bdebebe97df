//! Longan - A Rust library for building WordprocessingML paragraph markup
//!
//! This library builds and mutates the in-memory element tree of a single
//! Word paragraph and the text runs it contains, maintaining the validity of
//! the schema-ordered tree while exposing an idempotent, chainable mutation
//! API, and emits the finished fragment as markup.
//!
//! # Features
//!
//! - **Schema-ordered element store**: property elements are created lazily
//!   on first access and always land in their schema-correct position among
//!   their siblings, never duplicated
//! - **Formatting cascade**: formatting an empty paragraph targets the
//!   paragraph mark so text appended later inherits it; formatting a
//!   paragraph that already has runs cascades to every run instead
//! - **Field codes**: page number and page count fields emitted as the exact
//!   begin/instruction/separate/result/end run sequence renderers recognize
//! - **Fragment markup**: serialize any subtree without owning a document
//!
//! # Example - Building a formatted paragraph
//!
//! ```no_run
//! use longan::element::{Element, ElementKind};
//! use longan::word::{Paragraph, ParagraphAlignment};
//!
//! let mut node = Element::new(ElementKind::Paragraph);
//! let mut paragraph = Paragraph::new(&mut node);
//!
//! paragraph
//!     .set_alignment(ParagraphAlignment::Center)
//!     .bold()
//!     .append("Chapter One");
//!
//! println!("{}", paragraph.to_xml());
//! ```
//!
//! # Example - Page numbers in a footer paragraph
//!
//! ```no_run
//! use longan::element::{Element, ElementKind};
//! use longan::word::{PageNumberFormat, Paragraph};
//!
//! let mut node = Element::new(ElementKind::Paragraph);
//! let mut footer = Paragraph::new(&mut node);
//!
//! footer.append("Page ");
//! footer.append_page_number(PageNumberFormat::Normal);
//! footer.append(" of ");
//! footer.append_page_count(PageNumberFormat::Normal);
//! ```
//!
//! # Example - Font size validation
//!
//! ```no_run
//! use longan::element::{Element, ElementKind};
//! use longan::word::Paragraph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut node = Element::new(ElementKind::Paragraph);
//! let mut paragraph = Paragraph::new(&mut node);
//!
//! // Sizes are half-points: 32.5 is 16.25pt.
//! paragraph.font_size(32.5)?;
//! assert!(paragraph.font_size(32.3).is_err());
//! # Ok(())
//! # }
//! ```

/// The schema-ordered element store
///
/// This module provides the in-memory tree the builder mutates: typed
/// elements, the get-or-create accessor, schema-ordered insertion, and
/// markup emission.
pub mod element;

/// Unified error types
pub mod error;

/// Paragraph and run building
///
/// This module provides the mutation API: the paragraph formatting cascade,
/// run-level formatting, and field-code emission.
pub mod word;

// Re-export commonly used types for convenience
pub use element::{Attr, Element, ElementKind};
pub use error::{Error, Result};

// Re-export the builder API
pub use word::{
    FieldCharType, PageNumberFormat, Paragraph, ParagraphAlignment, Run, UnderlineStyle,
};
