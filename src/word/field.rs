//! Field-code sequences for computed content.
//!
//! A field is a fixed five-run protocol a consuming renderer evaluates:
//! begin delimiter, literal instruction, separate delimiter, cached result,
//! end delimiter. The builder contributes only the structural markers; the
//! renderer computes the actual value and replaces the cached "1".
use std::fmt;

use crate::element::{Attr, Element, ElementKind};

use super::format::PageNumberFormat;

/// Field delimiter character types, in the order a consumer expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldCharType {
    /// Marks the start of the field.
    Begin = 0,
    /// Separates the instruction from the cached result.
    Separate = 1,
    /// Marks the end of the field.
    End = 2,
}

impl FieldCharType {
    /// Convert the delimiter type to its `w:fldCharType` attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::Separate => "separate",
            Self::End => "end",
        }
    }

    /// Parse a delimiter type from its `w:fldCharType` attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "begin" => Some(Self::Begin),
            "separate" => Some(Self::Separate),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for FieldCharType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Begin => write!(f, "Begin"),
            Self::Separate => write!(f, "Separate"),
            Self::End => write!(f, "End"),
        }
    }
}

/// Instruction literal for a PAGE field. Leading and trailing spaces are part
/// of the instruction and must survive whitespace handling.
pub(crate) const fn page_number_instruction(format: PageNumberFormat) -> &'static str {
    match format {
        PageNumberFormat::Normal => r" PAGE   \* MERGEFORMAT ",
        PageNumberFormat::Roman => r" PAGE  \* ROMAN  \* MERGEFORMAT ",
    }
}

/// Instruction literal for a NUMPAGES field.
pub(crate) const fn page_count_instruction(format: PageNumberFormat) -> &'static str {
    match format {
        PageNumberFormat::Normal => r" NUMPAGES   \* MERGEFORMAT ",
        PageNumberFormat::Roman => r" NUMPAGES  \* ROMAN  \* MERGEFORMAT ",
    }
}

/// Append the five-run field sequence carrying `instruction` to a paragraph.
///
/// Field runs are plain runs: they are never seeded with the paragraph-mark
/// formatting snapshot. The cached result and the end delimiter both carry
/// `w:noProof` so proofing tools skip the placeholder.
pub(crate) fn append_field_runs(paragraph: &mut Element, instruction: &str) {
    paragraph
        .append_child(Element::new(ElementKind::Run))
        .get_or_create(ElementKind::FieldChar)
        .set_attr(Attr::FieldCharType, FieldCharType::Begin.to_xml());

    paragraph
        .append_child(Element::new(ElementKind::Run))
        .get_or_create(ElementKind::FieldCode)
        .set_attr(Attr::Space, "preserve")
        .set_text(instruction);

    paragraph
        .append_child(Element::new(ElementKind::Run))
        .get_or_create(ElementKind::FieldChar)
        .set_attr(Attr::FieldCharType, FieldCharType::Separate.to_xml());

    let result = paragraph.append_child(Element::new(ElementKind::Run));
    result
        .get_or_create(ElementKind::RunProperties)
        .get_or_create(ElementKind::NoProof);
    result
        .append_child(Element::new(ElementKind::Text))
        .set_text("1");

    let end = paragraph.append_child(Element::new(ElementKind::Run));
    end.get_or_create(ElementKind::RunProperties)
        .get_or_create(ElementKind::NoProof);
    end.get_or_create(ElementKind::FieldChar)
        .set_attr(Attr::FieldCharType, FieldCharType::End.to_xml());
}
