//! Typed vocabularies for the WordprocessingML elements and attributes that
//! Longan builds.
//!
//! The element store is deliberately closed over the element kinds the
//! paragraph builder produces: a closed enum keeps child lookup and schema
//! ordering total functions with no string comparison on hot paths.
use std::fmt;

/// The WordprocessingML element kinds known to the builder.
///
/// Each kind maps to exactly one qualified tag name via [`ElementKind::tag`].
/// `ParagraphMarkRunProperties` and `RunProperties` share the `w:rPr` tag but
/// are distinct schema identities: the former lives under `w:pPr` and carries
/// the paragraph-mark defaults, the latter lives under `w:r`.
///
/// # Examples
///
/// ```rust,no_run
/// use longan::element::ElementKind;
///
/// assert_eq!(ElementKind::Paragraph.tag(), "w:p");
/// assert_eq!(ElementKind::Bold.tag(), "w:b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Paragraph (`w:p`).
    Paragraph,
    /// Paragraph properties (`w:pPr`), first child of its paragraph.
    ParagraphProperties,
    /// Paragraph style reference (`w:pStyle`).
    ParagraphStyleId,
    /// Paragraph indentation (`w:ind`).
    Indentation,
    /// Paragraph justification (`w:jc`).
    Justification,
    /// Run properties of the paragraph mark (`w:rPr` under `w:pPr`).
    ParagraphMarkRunProperties,
    /// Text run (`w:r`).
    Run,
    /// Run properties (`w:rPr` under `w:r`).
    RunProperties,
    /// Run style reference (`w:rStyle`).
    RunStyle,
    /// Run fonts (`w:rFonts`).
    RunFonts,
    /// Bold toggle (`w:b`).
    Bold,
    /// Italic toggle (`w:i`).
    Italic,
    /// Proofing suppression (`w:noProof`).
    NoProof,
    /// Font size in half-points (`w:sz`).
    FontSize,
    /// Complex-script font size (`w:szCs`).
    FontSizeComplexScript,
    /// Underline (`w:u`).
    Underline,
    /// Literal text (`w:t`).
    Text,
    /// Field delimiter character (`w:fldChar`).
    FieldChar,
    /// Field instruction text (`w:instrText`).
    FieldCode,
    /// Inline drawing container (`w:drawing`).
    Drawing,
}

impl ElementKind {
    /// Qualified tag name used when the element is written out as markup.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Paragraph => "w:p",
            Self::ParagraphProperties => "w:pPr",
            Self::ParagraphStyleId => "w:pStyle",
            Self::Indentation => "w:ind",
            Self::Justification => "w:jc",
            Self::ParagraphMarkRunProperties => "w:rPr",
            Self::Run => "w:r",
            Self::RunProperties => "w:rPr",
            Self::RunStyle => "w:rStyle",
            Self::RunFonts => "w:rFonts",
            Self::Bold => "w:b",
            Self::Italic => "w:i",
            Self::NoProof => "w:noProof",
            Self::FontSize => "w:sz",
            Self::FontSizeComplexScript => "w:szCs",
            Self::Underline => "w:u",
            Self::Text => "w:t",
            Self::FieldChar => "w:fldChar",
            Self::FieldCode => "w:instrText",
            Self::Drawing => "w:drawing",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Attribute names carried by the elements in [`ElementKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    /// Generic single-value attribute (`w:val`).
    Val,
    /// Indentation before the paragraph (`w:left`).
    Left,
    /// First-line indentation (`w:firstLine`).
    FirstLine,
    /// Hanging indentation (`w:hanging`).
    Hanging,
    /// ASCII font slot (`w:ascii`).
    Ascii,
    /// High ANSI font slot (`w:hAnsi`).
    HighAnsi,
    /// Complex-script font slot (`w:cs`).
    ComplexScript,
    /// East Asian font slot (`w:eastAsia`).
    EastAsia,
    /// Field character type (`w:fldCharType`).
    FieldCharType,
    /// Whitespace handling (`xml:space`).
    Space,
}

impl Attr {
    /// Qualified attribute name used when the element is written out.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Val => "w:val",
            Self::Left => "w:left",
            Self::FirstLine => "w:firstLine",
            Self::Hanging => "w:hanging",
            Self::Ascii => "w:ascii",
            Self::HighAnsi => "w:hAnsi",
            Self::ComplexScript => "w:cs",
            Self::EastAsia => "w:eastAsia",
            Self::FieldCharType => "w:fldCharType",
            Self::Space => "xml:space",
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_rpr_tag() {
        assert_eq!(ElementKind::ParagraphMarkRunProperties.tag(), "w:rPr");
        assert_eq!(ElementKind::RunProperties.tag(), "w:rPr");
        assert_ne!(
            ElementKind::ParagraphMarkRunProperties,
            ElementKind::RunProperties
        );
    }

    #[test]
    fn test_display_writes_tag() {
        assert_eq!(ElementKind::Justification.to_string(), "w:jc");
        assert_eq!(Attr::FieldCharType.to_string(), "w:fldCharType");
    }
}
