//! Shared formatting vocabularies for paragraphs and runs.
use std::fmt;

/// Paragraph alignment options.
///
/// # Examples
///
/// ```rust,no_run
/// use longan::word::ParagraphAlignment;
///
/// let alignment = ParagraphAlignment::Justify;
/// assert_eq!(alignment.to_xml(), "both");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ParagraphAlignment {
    /// Left-aligned (the document default).
    Left = 0,
    /// Centered.
    Center = 1,
    /// Right-aligned.
    Right = 2,
    /// Justified to both margins.
    Justify = 3,
}

impl ParagraphAlignment {
    /// Convert the alignment to its `w:jc` attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }

    /// Parse an alignment from its `w:jc` attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "both" => Some(Self::Justify),
            _ => None,
        }
    }
}

impl Default for ParagraphAlignment {
    #[inline]
    fn default() -> Self {
        Self::Left
    }
}

impl fmt::Display for ParagraphAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "Left"),
            Self::Center => write!(f, "Center"),
            Self::Right => write!(f, "Right"),
            Self::Justify => write!(f, "Justify"),
        }
    }
}

/// Underline styles for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnderlineStyle {
    /// Single line.
    Single = 0,
    /// Double line.
    Double = 1,
    /// Thick line.
    Thick = 2,
    /// Dotted line.
    Dotted = 3,
    /// Dashed line.
    Dashed = 4,
    /// Dot-dash pattern.
    DotDash = 5,
    /// Dot-dot-dash pattern.
    DotDotDash = 6,
    /// Wavy line.
    Wave = 7,
}

impl UnderlineStyle {
    /// Convert the underline style to its `w:u` attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Thick => "thick",
            Self::Dotted => "dotted",
            Self::Dashed => "dash",
            Self::DotDash => "dotDash",
            Self::DotDotDash => "dotDotDash",
            Self::Wave => "wave",
        }
    }

    /// Parse an underline style from its `w:u` attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            "thick" => Some(Self::Thick),
            "dotted" => Some(Self::Dotted),
            "dash" => Some(Self::Dashed),
            "dotDash" => Some(Self::DotDash),
            "dotDotDash" => Some(Self::DotDotDash),
            "wave" => Some(Self::Wave),
            _ => None,
        }
    }
}

impl Default for UnderlineStyle {
    #[inline]
    fn default() -> Self {
        Self::Single
    }
}

impl fmt::Display for UnderlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "Single"),
            Self::Double => write!(f, "Double"),
            Self::Thick => write!(f, "Thick"),
            Self::Dotted => write!(f, "Dotted"),
            Self::Dashed => write!(f, "Dashed"),
            Self::DotDash => write!(f, "DotDash"),
            Self::DotDotDash => write!(f, "DotDotDash"),
            Self::Wave => write!(f, "Wave"),
        }
    }
}

/// Display format for page-number and page-count fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PageNumberFormat {
    /// Decimal numbers (1, 2, 3, ...).
    Normal = 0,
    /// Roman numerals (I, II, III, ...).
    Roman = 1,
}

impl Default for PageNumberFormat {
    #[inline]
    fn default() -> Self {
        Self::Normal
    }
}

impl fmt::Display for PageNumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Roman => write!(f, "Roman"),
        }
    }
}
