//! The mutable element node and its typed child accessors.
use smallvec::SmallVec;

use super::schema;
use super::{Attr, ElementKind};

/// One node of the in-memory WordprocessingML tree.
///
/// An element carries its [`ElementKind`], an insertion-ordered attribute
/// list, optional literal text content, and child elements. Equality is deep
/// tree-state equality, which is what idempotence tests compare.
///
/// Property child access goes through [`Element::get_or_create`]: every
/// setter in the crate is "get-or-create, then mutate the result", so a
/// parent never accumulates more than one child of a ranked kind.
///
/// # Examples
///
/// ```rust,no_run
/// use longan::element::{Attr, Element, ElementKind};
///
/// let mut paragraph = Element::new(ElementKind::Paragraph);
/// paragraph
///     .get_or_create(ElementKind::ParagraphProperties)
///     .get_or_create(ElementKind::Justification)
///     .set_attr(Attr::Val, "center");
///
/// // Repeated access returns the same node instead of a duplicate.
/// assert_eq!(paragraph.count_of(ElementKind::ParagraphProperties), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    kind: ElementKind,
    attrs: SmallVec<[(Attr, String); 2]>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attrs: SmallVec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// The element's schema identity.
    #[inline]
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Value of an attribute, if set.
    pub fn attr(&self, name: Attr) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value in place so repeated
    /// sets never duplicate the attribute or change its position.
    pub fn set_attr(&mut self, name: Attr, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
        self
    }

    /// Attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (Attr, &str)> {
        self.attrs
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    /// Read an attribute stored as a decimal string.
    ///
    /// Absent or malformed values read as 0; the schema treats a missing
    /// measurement as "unset" and this crate never fails on read.
    pub fn int_attr(&self, name: Attr) -> i32 {
        self.attr(name)
            .and_then(|value| atoi_simd::parse(value.as_bytes()).ok())
            .unwrap_or(0)
    }

    /// Write an integer attribute as its canonical decimal string.
    pub fn set_int_attr(&mut self, name: Attr, value: i32) -> &mut Self {
        let mut buf = itoa::Buffer::new();
        self.set_attr(name, buf.format(value))
    }

    /// Literal text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the literal text content.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Child elements in document order.
    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child of the given kind.
    pub fn first_of(&self, kind: ElementKind) -> Option<&Element> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Whether a child of the given kind exists.
    pub fn has(&self, kind: ElementKind) -> bool {
        self.children.iter().any(|c| c.kind == kind)
    }

    /// Number of children of the given kind.
    pub fn count_of(&self, kind: ElementKind) -> usize {
        self.children.iter().filter(|c| c.kind == kind).count()
    }

    /// Children of the given kind, in document order.
    pub fn children_of(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Mutable children of the given kind, in document order.
    pub fn children_of_mut(&mut self, kind: ElementKind) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter(move |c| c.kind == kind)
    }

    /// Append a child after all existing children and return it.
    ///
    /// This is the raw content append used for runs and field sequences;
    /// ranked property children should go through [`Element::get_or_create`]
    /// instead so they land in schema position.
    pub fn append_child(&mut self, child: Element) -> &mut Element {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Return the existing child of `kind`, or create an empty one at its
    /// schema-correct position among the current children.
    ///
    /// Repeated calls with the same kind return the same node. Ranked kinds
    /// (see the schema table) are inserted before the first sibling of
    /// greater rank, so `w:pPr` always ends up first in its paragraph and
    /// `w:pStyle` precedes `w:jc` no matter which setter ran first.
    pub fn get_or_create(&mut self, kind: ElementKind) -> &mut Element {
        match self.children.iter().position(|c| c.kind == kind) {
            Some(index) => &mut self.children[index],
            None => {
                let at = schema::insertion_index(self.kind, &self.children, kind);
                self.children.insert(at, Element::new(kind));
                &mut self.children[at]
            },
        }
    }
}
