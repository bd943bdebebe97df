//! Schema-ordered child placement.
//!
//! ECMA-376 fixes the sequence of property children under `w:p`, `w:pPr`,
//! `w:r`, and `w:rPr`. Instead of per-setter prepend/append choices, one rank
//! table records where each ranked child belongs and a single routine picks
//! the insertion index from it. Content children (runs, text, drawings) are
//! unranked and always append.
use super::{Element, ElementKind};

/// Position of `child` in `parent`'s fixed schema sequence, or `None` for
/// unordered content.
pub(crate) fn child_rank(parent: ElementKind, child: ElementKind) -> Option<u8> {
    use ElementKind::*;
    match (parent, child) {
        (Paragraph, ParagraphProperties) => Some(0),
        (ParagraphProperties, ParagraphStyleId) => Some(0),
        (ParagraphProperties, Indentation) => Some(1),
        (ParagraphProperties, Justification) => Some(2),
        (ParagraphProperties, ParagraphMarkRunProperties) => Some(3),
        (Run, RunProperties) => Some(0),
        (RunProperties | ParagraphMarkRunProperties, c) => run_property_rank(c),
        _ => None,
    }
}

/// The `w:rPr` sequence, restricted to the kinds this builder creates. The
/// same order applies to the paragraph-mark variant.
fn run_property_rank(child: ElementKind) -> Option<u8> {
    use ElementKind::*;
    match child {
        RunStyle => Some(0),
        RunFonts => Some(1),
        Bold => Some(2),
        Italic => Some(3),
        NoProof => Some(4),
        FontSize => Some(5),
        FontSizeComplexScript => Some(6),
        Underline => Some(7),
        _ => None,
    }
}

/// Index at which a new `child` of `parent` keeps ranked siblings in schema
/// order: before the first sibling of greater rank, where unranked counts as
/// greater than everything.
pub(crate) fn insertion_index(
    parent: ElementKind,
    children: &[Element],
    child: ElementKind,
) -> usize {
    match child_rank(parent, child) {
        Some(rank) => children
            .iter()
            .position(|existing| match child_rank(parent, existing.kind()) {
                Some(r) => r > rank,
                None => true,
            })
            .unwrap_or(children.len()),
        None => children.len(),
    }
}
