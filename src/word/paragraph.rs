//! Paragraph building and the formatting cascade.
use crate::element::{Attr, Element, ElementKind};
use crate::error::Result;

use super::field;
use super::format::{PageNumberFormat, ParagraphAlignment, UnderlineStyle};
use super::run::{self, Run};

/// Where a cascading formatting call lands.
///
/// The cascade is a binary policy: an operation mutates the paragraph mark or
/// the existing runs, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormatTarget {
    /// No runs yet: formatting goes to the paragraph-mark run properties and
    /// applies to text typed into the paragraph later.
    Mark,
    /// One or more runs: formatting is applied to every existing run in
    /// document order.
    Runs,
}

/// A mutable view over one paragraph.
///
/// The wrapper owns nothing: it borrows the `w:p` element it manipulates, and
/// two wrappers over the same element are interchangeable. All formatting
/// setters are chainable and idempotent.
///
/// Formatting calls on a paragraph with no runs land on the paragraph-mark
/// run properties, so text appended afterwards inherits them; once runs
/// exist, the same calls cascade to every run instead. Alignment,
/// indentation, and the style name are paragraph properties and never
/// cascade.
///
/// # Examples
///
/// ```rust,no_run
/// use longan::element::{Element, ElementKind};
/// use longan::word::{Paragraph, ParagraphAlignment};
///
/// let mut node = Element::new(ElementKind::Paragraph);
/// let mut paragraph = Paragraph::new(&mut node);
/// paragraph
///     .bold()
///     .set_alignment(ParagraphAlignment::Center)
///     .append("Chapter One");
///
/// assert_eq!(paragraph.text(), "Chapter One");
/// assert_eq!(paragraph.run_count(), 1);
/// ```
#[derive(Debug)]
pub struct Paragraph<'a> {
    element: &'a mut Element,
}

impl<'a> Paragraph<'a> {
    /// Wrap a `w:p` element.
    pub fn new(element: &'a mut Element) -> Self {
        debug_assert_eq!(
            element.kind(),
            ElementKind::Paragraph,
            "Paragraph wraps a w:p node"
        );
        Self { element }
    }

    /// Read access to the wrapped element, for hosts that own the tree.
    #[inline]
    pub fn element(&self) -> &Element {
        self.element
    }

    /// Serialize the paragraph as a markup fragment.
    pub fn to_xml(&self) -> String {
        self.element.to_xml()
    }

    /// All literal text in the paragraph, runs concatenated in document
    /// order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for run in self.element.children_of(ElementKind::Run) {
            for child in run.children_of(ElementKind::Text) {
                if let Some(text) = child.text() {
                    out.push_str(text);
                }
            }
        }
        out
    }

    /// Number of runs currently in the paragraph.
    pub fn run_count(&self) -> usize {
        self.element.count_of(ElementKind::Run)
    }

    fn format_target(&self) -> FormatTarget {
        if self.element.has(ElementKind::Run) {
            FormatTarget::Runs
        } else {
            FormatTarget::Mark
        }
    }

    fn properties(&mut self) -> &mut Element {
        self.element.get_or_create(ElementKind::ParagraphProperties)
    }

    fn mark_properties(&mut self) -> &mut Element {
        self.properties()
            .get_or_create(ElementKind::ParagraphMarkRunProperties)
    }

    /// Make the paragraph text bold.
    pub fn bold(&mut self) -> &mut Self {
        match self.format_target() {
            FormatTarget::Mark => {
                self.mark_properties()
                    .get_or_create(ElementKind::Bold)
                    .set_attr(Attr::Val, "true");
            },
            FormatTarget::Runs => {
                for element in self.element.children_of_mut(ElementKind::Run) {
                    Run::new(element).bold();
                }
            },
        }
        self
    }

    /// Make the paragraph text italic.
    pub fn italic(&mut self) -> &mut Self {
        match self.format_target() {
            FormatTarget::Mark => {
                self.mark_properties()
                    .get_or_create(ElementKind::Italic)
                    .set_attr(Attr::Val, "true");
            },
            FormatTarget::Runs => {
                for element in self.element.children_of_mut(ElementKind::Run) {
                    Run::new(element).italic();
                }
            },
        }
        self
    }

    /// Underline the paragraph text with the given style.
    pub fn underline(&mut self, style: UnderlineStyle) -> &mut Self {
        match self.format_target() {
            FormatTarget::Mark => {
                self.mark_properties()
                    .get_or_create(ElementKind::Underline)
                    .set_attr(Attr::Val, style.to_xml());
            },
            FormatTarget::Runs => {
                for element in self.element.children_of_mut(ElementKind::Run) {
                    Run::new(element).underline(style);
                }
            },
        }
        self
    }

    /// Apply the supplied font family to the paragraph.
    pub fn font_family(&mut self, name: &str) -> &mut Self {
        match self.format_target() {
            FormatTarget::Mark => {
                self.mark_properties()
                    .get_or_create(ElementKind::RunFonts)
                    .set_attr(Attr::Ascii, name)
                    .set_attr(Attr::HighAnsi, name)
                    .set_attr(Attr::ComplexScript, name)
                    .set_attr(Attr::EastAsia, name);
            },
            FormatTarget::Runs => {
                for element in self.element.children_of_mut(ElementKind::Run) {
                    Run::new(element).font_family(name);
                }
            },
        }
        self
    }

    /// Apply the supplied font size to the paragraph.
    ///
    /// Size is in half-points, e.g. 40 is 20pt, and must be a whole or half
    /// number in `0 < size <= 1638`. Validation happens before any mutation:
    /// a failed call leaves the paragraph untouched.
    pub fn font_size(&mut self, size: f64) -> Result<&mut Self> {
        run::check_font_size(size)?;
        match self.format_target() {
            FormatTarget::Mark => {
                let value = run::format_font_size(size);
                let mark = self.mark_properties();
                mark.get_or_create(ElementKind::FontSize)
                    .set_attr(Attr::Val, value.as_str());
                mark.get_or_create(ElementKind::FontSizeComplexScript)
                    .set_attr(Attr::Val, value);
            },
            FormatTarget::Runs => {
                for element in self.element.children_of_mut(ElementKind::Run) {
                    Run::new(element).font_size(size)?;
                }
            },
        }
        Ok(self)
    }

    /// Set the style for the paragraph.
    ///
    /// With no runs this sets the paragraph style reference (`w:pStyle`);
    /// with runs it cascades as a character style (`w:rStyle`) on each run.
    /// No validation is performed against any style sheet.
    pub fn set_style(&mut self, style_id: &str) -> &mut Self {
        match self.format_target() {
            FormatTarget::Mark => {
                self.properties()
                    .get_or_create(ElementKind::ParagraphStyleId)
                    .set_attr(Attr::Val, style_id);
            },
            FormatTarget::Runs => {
                for element in self.element.children_of_mut(ElementKind::Run) {
                    Run::new(element).set_style(style_id);
                }
            },
        }
        self
    }

    /// Set the paragraph alignment. Never cascades to runs.
    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) -> &mut Self {
        self.properties()
            .get_or_create(ElementKind::Justification)
            .set_attr(Attr::Val, alignment.to_xml());
        self
    }

    /// The paragraph alignment, defaulting to left when absent or
    /// unrecognized.
    pub fn alignment(&self) -> ParagraphAlignment {
        self.element
            .first_of(ElementKind::ParagraphProperties)
            .and_then(|props| props.first_of(ElementKind::Justification))
            .and_then(|jc| jc.attr(Attr::Val))
            .and_then(ParagraphAlignment::from_xml)
            .unwrap_or_default()
    }

    /// Set the indentation before the paragraph, in twips.
    pub fn set_indentation_before(&mut self, twips: i32) -> &mut Self {
        self.properties()
            .get_or_create(ElementKind::Indentation)
            .set_int_attr(Attr::Left, twips);
        self
    }

    /// Indentation before the paragraph in twips; 0 when unset or malformed.
    pub fn indentation_before(&self) -> i32 {
        self.indentation_value(Attr::Left)
    }

    /// Set the first-line indentation, in twips.
    pub fn set_indentation_first_line(&mut self, twips: i32) -> &mut Self {
        self.properties()
            .get_or_create(ElementKind::Indentation)
            .set_int_attr(Attr::FirstLine, twips);
        self
    }

    /// First-line indentation in twips; 0 when unset or malformed.
    pub fn indentation_first_line(&self) -> i32 {
        self.indentation_value(Attr::FirstLine)
    }

    /// Set the hanging indentation, in twips.
    pub fn set_indentation_hanging(&mut self, twips: i32) -> &mut Self {
        self.properties()
            .get_or_create(ElementKind::Indentation)
            .set_int_attr(Attr::Hanging, twips);
        self
    }

    /// Hanging indentation in twips; 0 when unset or malformed.
    pub fn indentation_hanging(&self) -> i32 {
        self.indentation_value(Attr::Hanging)
    }

    fn indentation_value(&self, slot: Attr) -> i32 {
        self.element
            .first_of(ElementKind::ParagraphProperties)
            .and_then(|props| props.first_of(ElementKind::Indentation))
            .map(|indentation| indentation.int_attr(slot))
            .unwrap_or(0)
    }

    /// Set the name of the style associated with the paragraph. Always a
    /// paragraph property, regardless of run count.
    pub fn set_style_name(&mut self, name: &str) -> &mut Self {
        self.properties()
            .get_or_create(ElementKind::ParagraphStyleId)
            .set_attr(Attr::Val, name);
        self
    }

    /// The name of the style associated with the paragraph, if set.
    pub fn style_name(&self) -> Option<&str> {
        self.element
            .first_of(ElementKind::ParagraphProperties)
            .and_then(|props| props.first_of(ElementKind::ParagraphStyleId))
            .and_then(|style| style.attr(Attr::Val))
    }

    /// Append text to the paragraph.
    ///
    /// The new run is seeded with a snapshot of the paragraph-mark run
    /// properties, so formatting set while the paragraph was empty carries
    /// over to the text.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.append_text_run(text);
        self
    }

    /// Append bold text to the paragraph.
    pub fn append_bold(&mut self, text: &str) -> &mut Self {
        let element = self.append_text_run(text);
        Run::new(element).bold();
        self
    }

    /// Append italic text to the paragraph.
    pub fn append_italic(&mut self, text: &str) -> &mut Self {
        let element = self.append_text_run(text);
        Run::new(element).italic();
        self
    }

    /// Append underlined text to the paragraph.
    pub fn append_underline(&mut self, text: &str, style: UnderlineStyle) -> &mut Self {
        let element = self.append_text_run(text);
        Run::new(element).underline(style);
        self
    }

    /// Append a drawing to the paragraph, wrapped in its own run.
    ///
    /// Drawing runs carry no text formatting and are not seeded from the
    /// paragraph mark.
    pub fn append_drawing(&mut self, drawing: Element) -> &mut Self {
        debug_assert_eq!(
            drawing.kind(),
            ElementKind::Drawing,
            "append_drawing takes a w:drawing node"
        );
        self.element
            .append_child(Element::new(ElementKind::Run))
            .append_child(drawing);
        self
    }

    /// Append a page number field to the paragraph.
    pub fn append_page_number(&mut self, format: PageNumberFormat) -> &mut Self {
        field::append_field_runs(self.element, field::page_number_instruction(format));
        self
    }

    /// Append a page count field to the paragraph.
    pub fn append_page_count(&mut self, format: PageNumberFormat) -> &mut Self {
        field::append_field_runs(self.element, field::page_count_instruction(format));
        self
    }

    /// Append a run seeded with the current paragraph-mark formatting and
    /// holding a whitespace-preserving text child.
    fn append_text_run(&mut self, text: &str) -> &mut Element {
        let run = self.new_run();
        let run = self.element.append_child(run);
        run.append_child(Element::new(ElementKind::Text))
            .set_attr(Attr::Space, "preserve")
            .set_text(text);
        run
    }

    fn new_run(&self) -> Element {
        let mut run = Element::new(ElementKind::Run);
        if let Some(snapshot) = self.mark_snapshot() {
            run.append_child(snapshot);
        }
        run
    }

    /// Default-formatting snapshot for a newly created run: a fresh `w:rPr`
    /// carrying clones of the current paragraph-mark run properties. Present
    /// whenever the mark element exists, even if it holds nothing yet.
    fn mark_snapshot(&self) -> Option<Element> {
        let mark = self
            .element
            .first_of(ElementKind::ParagraphProperties)?
            .first_of(ElementKind::ParagraphMarkRunProperties)?;
        let mut properties = Element::new(ElementKind::RunProperties);
        for child in mark.children() {
            properties.append_child(child.clone());
        }
        Some(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph_element() -> Element {
        Element::new(ElementKind::Paragraph)
    }

    fn mark_of(element: &Element) -> Option<&Element> {
        element
            .first_of(ElementKind::ParagraphProperties)
            .and_then(|props| props.first_of(ElementKind::ParagraphMarkRunProperties))
    }

    #[test]
    fn test_format_target_predicate() {
        let mut element = paragraph_element();
        assert_eq!(Paragraph::new(&mut element).format_target(), FormatTarget::Mark);

        element.append_child(Element::new(ElementKind::Run));
        assert_eq!(Paragraph::new(&mut element).format_target(), FormatTarget::Runs);
    }

    #[test]
    fn test_bold_on_empty_paragraph_targets_mark() {
        let mut element = paragraph_element();
        Paragraph::new(&mut element).bold();

        let bold = mark_of(&element).and_then(|mark| mark.first_of(ElementKind::Bold));
        assert_eq!(bold.and_then(|b| b.attr(Attr::Val)), Some("true"));
        assert_eq!(element.count_of(ElementKind::Run), 0);
    }

    #[test]
    fn test_bold_with_runs_cascades_and_skips_mark() {
        let mut element = paragraph_element();
        {
            let mut paragraph = Paragraph::new(&mut element);
            paragraph.append("one").append("two");
            paragraph.bold();
        }

        // The mark was absent before and must stay absent.
        assert!(!element.has(ElementKind::ParagraphProperties));
        for run in element.children_of_mut(ElementKind::Run) {
            assert!(Run::new(run).is_bold());
        }
    }

    #[test]
    fn test_bold_then_append_inherits_formatting() {
        let mut element = paragraph_element();
        {
            let mut paragraph = Paragraph::new(&mut element);
            paragraph.bold();
            paragraph.append("hello");
            assert_eq!(paragraph.run_count(), 1);
            assert_eq!(paragraph.text(), "hello");
        }

        let run = element.children_of_mut(ElementKind::Run).next().unwrap();
        assert!(Run::new(run).is_bold());
    }

    #[test]
    fn test_seeding_copies_empty_mark_too() {
        let mut element = paragraph_element();
        element
            .get_or_create(ElementKind::ParagraphProperties)
            .get_or_create(ElementKind::ParagraphMarkRunProperties);

        Paragraph::new(&mut element).append("plain");

        let run = element.children_of(ElementKind::Run).next().unwrap();
        let seeded = run.first_of(ElementKind::RunProperties).unwrap();
        assert!(seeded.children().is_empty());
    }

    #[test]
    fn test_formatting_replay_is_idempotent() {
        let mut element = paragraph_element();
        Paragraph::new(&mut element)
            .bold()
            .underline(UnderlineStyle::Wave);
        let once = element.clone();

        Paragraph::new(&mut element)
            .bold()
            .underline(UnderlineStyle::Wave);
        assert_eq!(element, once);
    }

    #[test]
    fn test_two_wrappers_are_interchangeable() {
        let mut element = paragraph_element();
        Paragraph::new(&mut element).bold();
        Paragraph::new(&mut element).italic();

        let mark = mark_of(&element).unwrap();
        assert!(mark.has(ElementKind::Bold));
        assert!(mark.has(ElementKind::Italic));
    }

    #[test]
    fn test_alignment_never_cascades() {
        let mut element = paragraph_element();
        {
            let mut paragraph = Paragraph::new(&mut element);
            paragraph.append("text");
            paragraph.set_alignment(ParagraphAlignment::Center);
            assert_eq!(paragraph.alignment(), ParagraphAlignment::Center);
        }

        // Alignment is a paragraph property: the run stays untouched.
        let run = element.children_of(ElementKind::Run).next().unwrap();
        assert!(!run.has(ElementKind::RunProperties));
        let jc = element
            .first_of(ElementKind::ParagraphProperties)
            .and_then(|props| props.first_of(ElementKind::Justification));
        assert_eq!(jc.and_then(|j| j.attr(Attr::Val)), Some("center"));
    }

    #[test]
    fn test_alignment_defaults_to_left() {
        let mut element = paragraph_element();
        assert_eq!(
            Paragraph::new(&mut element).alignment(),
            ParagraphAlignment::Left
        );

        // Unrecognized stored values also read back as left.
        element
            .get_or_create(ElementKind::ParagraphProperties)
            .get_or_create(ElementKind::Justification)
            .set_attr(Attr::Val, "sideways");
        assert_eq!(
            Paragraph::new(&mut element).alignment(),
            ParagraphAlignment::Left
        );
    }

    #[test]
    fn test_indentation_round_trip() {
        let mut element = paragraph_element();
        let mut paragraph = Paragraph::new(&mut element);

        assert_eq!(paragraph.indentation_before(), 0);
        assert_eq!(paragraph.indentation_first_line(), 0);
        assert_eq!(paragraph.indentation_hanging(), 0);

        paragraph
            .set_indentation_before(360)
            .set_indentation_first_line(720)
            .set_indentation_hanging(180);

        assert_eq!(paragraph.indentation_before(), 360);
        assert_eq!(paragraph.indentation_first_line(), 720);
        assert_eq!(paragraph.indentation_hanging(), 180);

        let indentation = element
            .first_of(ElementKind::ParagraphProperties)
            .and_then(|props| props.first_of(ElementKind::Indentation))
            .unwrap();
        assert_eq!(indentation.attr(Attr::Left), Some("360"));
        assert_eq!(element.count_of(ElementKind::ParagraphProperties), 1);
    }

    #[test]
    fn test_indentation_tolerates_malformed_values() {
        let mut element = paragraph_element();
        element
            .get_or_create(ElementKind::ParagraphProperties)
            .get_or_create(ElementKind::Indentation)
            .set_attr(Attr::Left, "twelve");

        assert_eq!(Paragraph::new(&mut element).indentation_before(), 0);
    }

    #[test]
    fn test_font_size_on_mark_sets_both_sizes() {
        let mut element = paragraph_element();
        Paragraph::new(&mut element).font_size(14.5).unwrap();

        let mark = mark_of(&element).unwrap();
        let size = mark
            .first_of(ElementKind::FontSize)
            .and_then(|sz| sz.attr(Attr::Val));
        let complex = mark
            .first_of(ElementKind::FontSizeComplexScript)
            .and_then(|sz| sz.attr(Attr::Val));
        assert_eq!(size, Some("14.5"));
        assert_eq!(complex, Some("14.5"));
    }

    #[test]
    fn test_font_size_failure_leaves_tree_unmodified() {
        let mut element = paragraph_element();
        {
            let mut paragraph = Paragraph::new(&mut element);
            paragraph.append("sized");
            paragraph.font_size(32.0).unwrap();
        }
        let before = element.clone();

        let mut paragraph = Paragraph::new(&mut element);
        assert!(paragraph.font_size(0.0).is_err());
        assert!(paragraph.font_size(1638.5).is_err());
        assert!(paragraph.font_size(32.3).is_err());
        assert_eq!(*paragraph.element(), before);
    }

    #[test]
    fn test_set_style_without_runs_sets_paragraph_style() {
        let mut element = paragraph_element();
        Paragraph::new(&mut element).set_style("Heading1");

        let properties = element.first_of(ElementKind::ParagraphProperties).unwrap();
        let style = properties
            .first_of(ElementKind::ParagraphStyleId)
            .and_then(|s| s.attr(Attr::Val));
        assert_eq!(style, Some("Heading1"));
        assert!(!properties.has(ElementKind::ParagraphMarkRunProperties));
    }

    #[test]
    fn test_set_style_with_runs_cascades_as_run_style() {
        let mut element = paragraph_element();
        {
            let mut paragraph = Paragraph::new(&mut element);
            paragraph.append("a").append("b");
            paragraph.set_style("Emphasis");
        }

        assert!(!element.has(ElementKind::ParagraphProperties));
        for run in element.children_of_mut(ElementKind::Run) {
            assert_eq!(Run::new(run).style_id(), Some("Emphasis"));
        }
    }

    #[test]
    fn test_style_name_reads_do_not_fabricate() {
        let mut element = paragraph_element();
        {
            let paragraph = Paragraph::new(&mut element);
            assert_eq!(paragraph.style_name(), None);
            assert_eq!(paragraph.alignment(), ParagraphAlignment::Left);
            assert_eq!(paragraph.indentation_before(), 0);
        }
        assert!(!element.has(ElementKind::ParagraphProperties));
    }

    #[test]
    fn test_style_name_round_trip() {
        let mut element = paragraph_element();
        let mut paragraph = Paragraph::new(&mut element);
        paragraph.append("body text");
        paragraph.set_style_name("Quote");
        // Unlike set_style, the style name targets the paragraph even with
        // runs present.
        assert_eq!(paragraph.style_name(), Some("Quote"));
    }

    #[test]
    fn test_append_variants_format_their_run_only() {
        let mut element = paragraph_element();
        {
            let mut paragraph = Paragraph::new(&mut element);
            paragraph
                .append("plain ")
                .append_bold("bold ")
                .append_italic("italic ")
                .append_underline("wavy", UnderlineStyle::Wave);
            assert_eq!(paragraph.text(), "plain bold italic wavy");
        }

        let flags: Vec<_> = element
            .children_of_mut(ElementKind::Run)
            .map(|run| {
                let run = Run::new(run);
                (run.is_bold(), run.is_italic(), run.underline_style())
            })
            .collect();
        assert_eq!(
            flags,
            vec![
                (false, false, None),
                (true, false, None),
                (false, true, None),
                (false, false, Some(UnderlineStyle::Wave)),
            ]
        );
    }

    #[test]
    fn test_append_drawing_uses_unseeded_run() {
        let mut element = paragraph_element();
        let mut paragraph = Paragraph::new(&mut element);
        paragraph.bold();
        paragraph.append_drawing(Element::new(ElementKind::Drawing));

        assert_eq!(paragraph.run_count(), 1);
        assert_eq!(paragraph.text(), "");
        let run = paragraph
            .element()
            .children_of(ElementKind::Run)
            .next()
            .unwrap();
        assert!(run.has(ElementKind::Drawing));
        assert!(!run.has(ElementKind::RunProperties));
    }

    #[test]
    fn test_page_fields_append_five_plain_runs() {
        let mut element = paragraph_element();
        {
            let mut paragraph = Paragraph::new(&mut element);
            paragraph.bold();
            paragraph.append_page_number(PageNumberFormat::Normal);
            assert_eq!(paragraph.run_count(), 5);
            paragraph.append_page_count(PageNumberFormat::Roman);
            assert_eq!(paragraph.run_count(), 10);
        }

        // Field runs are never seeded from the paragraph mark.
        let begin = element.children_of(ElementKind::Run).next().unwrap();
        assert!(!begin.has(ElementKind::RunProperties));
        let instruction = element
            .children_of(ElementKind::Run)
            .nth(6)
            .and_then(|run| run.first_of(ElementKind::FieldCode))
            .and_then(|code| code.text());
        assert_eq!(instruction, Some(r" NUMPAGES  \* ROMAN  \* MERGEFORMAT "));
    }

    #[test]
    fn test_properties_stay_first_in_markup() {
        let mut element = paragraph_element();
        let mut paragraph = Paragraph::new(&mut element);
        paragraph
            .set_alignment(ParagraphAlignment::Center)
            .set_style_name("Title")
            .append("Hi");

        assert_eq!(
            paragraph.to_xml(),
            concat!(
                "<w:p>",
                r#"<w:pPr><w:pStyle w:val="Title"/><w:jc w:val="center"/></w:pPr>"#,
                r#"<w:r><w:t xml:space="preserve">Hi</w:t></w:r>"#,
                "</w:p>",
            )
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// A cascading or paragraph-property formatting operation.
        #[derive(Debug, Clone)]
        enum FormatOp {
            Bold,
            Italic,
            Underline(UnderlineStyle),
            FontFamily(String),
            FontSize(f64),
            SetStyle(String),
            Align(ParagraphAlignment),
            IndentBefore(i32),
            IndentFirstLine(i32),
            IndentHanging(i32),
        }

        fn apply(paragraph: &mut Paragraph<'_>, op: &FormatOp) {
            match op {
                FormatOp::Bold => {
                    paragraph.bold();
                },
                FormatOp::Italic => {
                    paragraph.italic();
                },
                FormatOp::Underline(style) => {
                    paragraph.underline(*style);
                },
                FormatOp::FontFamily(name) => {
                    paragraph.font_family(name);
                },
                FormatOp::FontSize(size) => {
                    paragraph.font_size(*size).unwrap();
                },
                FormatOp::SetStyle(style_id) => {
                    paragraph.set_style(style_id);
                },
                FormatOp::Align(alignment) => {
                    paragraph.set_alignment(*alignment);
                },
                FormatOp::IndentBefore(twips) => {
                    paragraph.set_indentation_before(*twips);
                },
                FormatOp::IndentFirstLine(twips) => {
                    paragraph.set_indentation_first_line(*twips);
                },
                FormatOp::IndentHanging(twips) => {
                    paragraph.set_indentation_hanging(*twips);
                },
            }
        }

        /// Strategy to generate identifier-like names
        fn name_strategy() -> impl Strategy<Value = String> {
            "[a-zA-Z][a-zA-Z0-9]{0,11}"
        }

        /// Strategy to generate valid half-point font sizes
        fn font_size_strategy() -> impl Strategy<Value = f64> {
            (1i32..=3276).prop_map(|doubled| f64::from(doubled) / 2.0)
        }

        fn underline_strategy() -> impl Strategy<Value = UnderlineStyle> {
            prop_oneof![
                Just(UnderlineStyle::Single),
                Just(UnderlineStyle::Double),
                Just(UnderlineStyle::Thick),
                Just(UnderlineStyle::Dotted),
                Just(UnderlineStyle::Dashed),
                Just(UnderlineStyle::DotDash),
                Just(UnderlineStyle::DotDotDash),
                Just(UnderlineStyle::Wave),
            ]
        }

        fn alignment_strategy() -> impl Strategy<Value = ParagraphAlignment> {
            prop_oneof![
                Just(ParagraphAlignment::Left),
                Just(ParagraphAlignment::Center),
                Just(ParagraphAlignment::Right),
                Just(ParagraphAlignment::Justify),
            ]
        }

        fn format_op_strategy() -> impl Strategy<Value = FormatOp> {
            prop_oneof![
                Just(FormatOp::Bold),
                Just(FormatOp::Italic),
                underline_strategy().prop_map(FormatOp::Underline),
                name_strategy().prop_map(FormatOp::FontFamily),
                font_size_strategy().prop_map(FormatOp::FontSize),
                name_strategy().prop_map(FormatOp::SetStyle),
                alignment_strategy().prop_map(FormatOp::Align),
                any::<i32>().prop_map(FormatOp::IndentBefore),
                any::<i32>().prop_map(FormatOp::IndentFirstLine),
                any::<i32>().prop_map(FormatOp::IndentHanging),
            ]
        }

        /// Strategy to generate short run texts
        fn text_strategy() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9 ]{0,12}"
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(128))]

            #[test]
            fn prop_format_sequence_replay_is_idempotent(
                texts in prop::collection::vec(text_strategy(), 0..3),
                ops in prop::collection::vec(format_op_strategy(), 1..8),
            ) {
                let mut element = Element::new(ElementKind::Paragraph);
                {
                    let mut paragraph = Paragraph::new(&mut element);
                    for text in &texts {
                        paragraph.append(text);
                    }
                    for op in &ops {
                        apply(&mut paragraph, op);
                    }
                }
                let once = element.clone();

                {
                    let mut paragraph = Paragraph::new(&mut element);
                    for op in &ops {
                        apply(&mut paragraph, op);
                    }
                }
                prop_assert_eq!(element, once);
            }

            #[test]
            fn prop_indentation_round_trips(twips in any::<i32>()) {
                let mut element = Element::new(ElementKind::Paragraph);
                let mut paragraph = Paragraph::new(&mut element);
                paragraph.set_indentation_before(twips);
                prop_assert_eq!(paragraph.indentation_before(), twips);
            }

            #[test]
            fn prop_singular_children_stay_singular(
                ops in prop::collection::vec(format_op_strategy(), 1..12),
            ) {
                let mut element = Element::new(ElementKind::Paragraph);
                {
                    let mut paragraph = Paragraph::new(&mut element);
                    for op in &ops {
                        apply(&mut paragraph, op);
                    }
                }

                prop_assert!(element.count_of(ElementKind::ParagraphProperties) <= 1);
                if let Some(properties) = element.first_of(ElementKind::ParagraphProperties) {
                    for kind in [
                        ElementKind::ParagraphStyleId,
                        ElementKind::Indentation,
                        ElementKind::Justification,
                        ElementKind::ParagraphMarkRunProperties,
                    ] {
                        prop_assert!(properties.count_of(kind) <= 1);
                    }
                }
            }
        }
    }
}
