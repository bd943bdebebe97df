//! Markup emission for element trees.
//!
//! Trees are emitted as WordprocessingML fragments with prefixed names and no
//! namespace declarations; the consuming document root owns those. Emission
//! never fails: it writes into a `String` buffer.
use super::Element;

impl Element {
    /// Serialize this element and its subtree as a markup fragment.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use longan::element::{Attr, Element, ElementKind};
    ///
    /// let mut bold = Element::new(ElementKind::Bold);
    /// bold.set_attr(Attr::Val, "true");
    /// assert_eq!(bold.to_xml(), r#"<w:b w:val="true"/>"#);
    /// ```
    pub fn to_xml(&self) -> String {
        let mut out = String::with_capacity(256);
        self.write_xml(&mut out);
        out
    }

    /// Serialize this element into an existing buffer.
    pub fn write_xml(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.kind().tag());
        for (name, value) in self.attrs() {
            out.push(' ');
            out.push_str(name.name());
            out.push_str("=\"");
            out.push_str(&escape_xml(value));
            out.push('"');
        }

        if self.text().is_none() && self.children().is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if let Some(text) = self.text() {
            out.push_str(&escape_xml(text));
        }
        for child in self.children() {
            child.write_xml(out);
        }
        out.push_str("</");
        out.push_str(self.kind().tag());
        out.push('>');
    }
}

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
