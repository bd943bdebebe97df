//! Run-level formatting.
//!
//! A [`Run`] is a non-owning view over one `w:r` element. Formatting setters
//! are chainable and idempotent: each one resolves its property element
//! through get-or-create and overwrites the value in place.
use crate::element::{Attr, Element, ElementKind};
use crate::error::{Error, Result};

use super::format::UnderlineStyle;

/// Validate a font size in half-points.
///
/// The value must be a whole or half number (checked first) and lie in
/// `0 < size <= 1638`. Setters call this before touching any tree state.
pub(crate) fn check_font_size(size: f64) -> Result<()> {
    let doubled = size * 2.0;
    if doubled.fract() != 0.0 {
        return Err(Error::InvalidFontSize(size));
    }
    if !(size > 0.0 && size <= 1638.0) {
        return Err(Error::FontSizeOutOfRange(size));
    }
    Ok(())
}

/// Canonical string form of a validated font size: `32` for whole values,
/// `32.5` for half values.
pub(crate) fn format_font_size(size: f64) -> String {
    let doubled = (size * 2.0) as i64;
    let mut buf = itoa::Buffer::new();
    if doubled % 2 == 0 {
        buf.format(doubled / 2).to_string()
    } else {
        format!("{}.5", doubled / 2)
    }
}

/// A mutable view over one text run.
///
/// Runs contain text and character formatting. The view has no identity of
/// its own: two `Run` values over the same element are interchangeable.
#[derive(Debug)]
pub struct Run<'a> {
    element: &'a mut Element,
}

impl<'a> Run<'a> {
    /// Wrap a `w:r` element.
    pub fn new(element: &'a mut Element) -> Self {
        debug_assert_eq!(element.kind(), ElementKind::Run, "Run wraps a w:r node");
        Self { element }
    }

    fn properties(&mut self) -> &mut Element {
        self.element.get_or_create(ElementKind::RunProperties)
    }

    /// Make the run text bold.
    pub fn bold(&mut self) -> &mut Self {
        self.properties()
            .get_or_create(ElementKind::Bold)
            .set_attr(Attr::Val, "true");
        self
    }

    /// Make the run text italic.
    pub fn italic(&mut self) -> &mut Self {
        self.properties()
            .get_or_create(ElementKind::Italic)
            .set_attr(Attr::Val, "true");
        self
    }

    /// Underline the run text with the given style.
    pub fn underline(&mut self, style: UnderlineStyle) -> &mut Self {
        self.properties()
            .get_or_create(ElementKind::Underline)
            .set_attr(Attr::Val, style.to_xml());
        self
    }

    /// Apply a font family to all four font slots of the run.
    pub fn font_family(&mut self, name: &str) -> &mut Self {
        self.properties()
            .get_or_create(ElementKind::RunFonts)
            .set_attr(Attr::Ascii, name)
            .set_attr(Attr::HighAnsi, name)
            .set_attr(Attr::ComplexScript, name)
            .set_attr(Attr::EastAsia, name);
        self
    }

    /// Apply a font size in half-points, e.g. 40 is 20pt.
    ///
    /// Sets both `w:sz` and its complex-script counterpart. Fails without
    /// mutating the run if the size is not a whole or half number in
    /// `0 < size <= 1638`.
    pub fn font_size(&mut self, size: f64) -> Result<&mut Self> {
        check_font_size(size)?;
        let value = format_font_size(size);
        let properties = self.properties();
        properties
            .get_or_create(ElementKind::FontSize)
            .set_attr(Attr::Val, value.as_str());
        properties
            .get_or_create(ElementKind::FontSizeComplexScript)
            .set_attr(Attr::Val, value);
        Ok(self)
    }

    /// Set the character style reference for the run.
    pub fn set_style(&mut self, style_id: &str) -> &mut Self {
        self.properties()
            .get_or_create(ElementKind::RunStyle)
            .set_attr(Attr::Val, style_id);
        self
    }

    /// Append literal text to the run, preserving surrounding whitespace.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.element
            .append_child(Element::new(ElementKind::Text))
            .set_attr(Attr::Space, "preserve")
            .set_text(text);
        self
    }

    /// All literal text in the run, concatenated in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in self.element.children_of(ElementKind::Text) {
            if let Some(text) = child.text() {
                out.push_str(text);
            }
        }
        out
    }

    /// Whether the run is bold.
    ///
    /// A `w:b` element present without `w:val` counts as true, as do the
    /// values `true` and `1`.
    pub fn is_bold(&self) -> bool {
        self.bool_property(ElementKind::Bold)
    }

    /// Whether the run is italic. Same tri-state rules as [`Run::is_bold`].
    pub fn is_italic(&self) -> bool {
        self.bool_property(ElementKind::Italic)
    }

    /// The run's underline style, if set to a recognized value.
    pub fn underline_style(&self) -> Option<UnderlineStyle> {
        self.element
            .first_of(ElementKind::RunProperties)
            .and_then(|props| props.first_of(ElementKind::Underline))
            .and_then(|u| u.attr(Attr::Val))
            .and_then(UnderlineStyle::from_xml)
    }

    /// The run's font size in half-points, if set to a numeric value.
    pub fn font_size_value(&self) -> Option<f64> {
        self.element
            .first_of(ElementKind::RunProperties)
            .and_then(|props| props.first_of(ElementKind::FontSize))
            .and_then(|sz| sz.attr(Attr::Val))
            .and_then(|value| fast_float2::parse(value).ok())
    }

    /// The run's character style reference, if set.
    pub fn style_id(&self) -> Option<&str> {
        self.element
            .first_of(ElementKind::RunProperties)
            .and_then(|props| props.first_of(ElementKind::RunStyle))
            .and_then(|style| style.attr(Attr::Val))
    }

    fn bool_property(&self, kind: ElementKind) -> bool {
        self.element
            .first_of(ElementKind::RunProperties)
            .and_then(|props| props.first_of(kind))
            .map(|el| match el.attr(Attr::Val) {
                Some(value) => value == "true" || value == "1",
                None => true,
            })
            .unwrap_or(false)
    }
}
