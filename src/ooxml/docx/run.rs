//! Runs: the smallest unit of formatted text in a Word document.
//!
//! A [`Run`] wraps a `<w:r>` element of a loaded tree. Its first child may be
//! a `<w:rPr>` carrying character formatting; the remaining children are its
//! inline content (text, tabs, breaks, rendered page breaks, drawings).
//!
//! All operations read and write the live tree, so changes made through one
//! `Run` are visible through every other handle to the same element.
//!
//! # Example
//!
//! ```rust
//! use docx_run::ooxml::docx::Run;
//! use docx_run::ooxml::docx::enums::WdBreak;
//! use docx_run::ooxml::oxml::Element;
//!
//! let run = Run::new(Element::parse("<w:r/>")?, None);
//! run.add_text("Hello");
//! run.add_tab();
//! run.add_break(WdBreak::Page)?;
//! run.add_text("World");
//! assert_eq!(run.text(), "Hello\tWorld");
//!
//! run.set_text("a\tb\nc");
//! assert_eq!(run.element().xml(), "<w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r>");
//! # Ok::<(), docx_run::ooxml::error::OoxmlError>(())
//! ```

use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;

use super::config::RunOptions;
use super::content::{self, InlineKind, InnerContentIter};
use super::enums::{WdBreak, WdStyleType};
use super::font::Font;
use super::format::{TriState, Underline};
use super::parts::{ImageSource, StoryPart};
use super::props::{self, BoolProperty};
use super::shape::InlineShape;
use super::styles::{BaseStyle, StyleRef};
use crate::common::style::Length;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::Element;

/// A run of text sharing the same character formatting.
#[derive(Clone)]
pub struct Run {
    r: Element,
    part: Option<Weak<dyn StoryPart>>,
    options: RunOptions,
}

impl Run {
    /// Wrap the `w:r` element `r`, contained in story part `part`.
    ///
    /// Only a weak reference to the part is kept. Operations that need the
    /// part (styles, pictures) fail with `NotApplicable` without one.
    pub fn new(r: Element, part: Option<&Rc<dyn StoryPart>>) -> Self {
        Self {
            r,
            part: part.map(Rc::downgrade),
            options: RunOptions::default(),
        }
    }

    /// Use `options` when writing new content.
    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// The wrapped `w:r` element.
    #[inline]
    pub fn element(&self) -> &Element {
        &self.r
    }

    /// The story part containing this run, if any and still alive.
    pub fn part(&self) -> Option<Rc<dyn StoryPart>> {
        self.part.as_ref().and_then(Weak::upgrade)
    }

    #[inline]
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    fn require_part(&self, operation: &str) -> Result<Rc<dyn StoryPart>> {
        self.part()
            .ok_or_else(|| OoxmlError::NotApplicable(format!("{} requires the run to belong to a story part", operation)))
    }

    // ---------------------------------------------------------------------
    // character formatting

    /// Read an on/off property by name, e.g. `"bold"` or `"small_caps"`.
    pub fn get_bool_property(&self, name: &str) -> Result<TriState> {
        self.bool_property(name.parse()?)
    }

    /// Write an on/off property by name, creating `w:rPr` if needed.
    ///
    /// An unknown name fails with `InvalidValue` and leaves the run unchanged.
    pub fn set_bool_property(&self, name: &str, value: impl Into<TriState>) -> Result<()> {
        let prop: BoolProperty = name.parse()?;
        self.set_bool_property_of(prop, value);
        Ok(())
    }

    pub fn bool_property(&self, prop: BoolProperty) -> Result<TriState> {
        props::get_tristate(props::rpr(&self.r).as_ref(), prop.tag())
    }

    pub fn set_bool_property_of(&self, prop: BoolProperty, value: impl Into<TriState>) {
        let rpr = props::get_or_add_rpr(&self.r);
        props::set_tristate(&rpr, prop.tag(), value.into());
    }

    /// Bold state of the run.
    pub fn bold(&self) -> Result<TriState> {
        self.bool_property(BoolProperty::Bold)
    }

    pub fn set_bold(&self, value: impl Into<TriState>) {
        self.set_bool_property_of(BoolProperty::Bold, value);
    }

    /// Italic state of the run.
    pub fn italic(&self) -> Result<TriState> {
        self.bool_property(BoolProperty::Italic)
    }

    pub fn set_italic(&self, value: impl Into<TriState>) {
        self.set_bool_property_of(BoolProperty::Italic, value);
    }

    /// Underline of the run.
    ///
    /// A stored literal outside the underline vocabulary fails with
    /// `InvalidValue`.
    pub fn underline(&self) -> Result<Underline> {
        props::underline(props::rpr(&self.r).as_ref())
    }

    /// Set the underline. `Inherit` removes `w:u`.
    ///
    /// Parse untrusted literals with `str::parse::<Underline>()` first; that
    /// is where values outside the vocabulary are rejected.
    pub fn set_underline(&self, value: impl Into<Underline>) {
        let rpr = props::get_or_add_rpr(&self.r);
        props::set_underline(&rpr, value.into());
    }

    /// Character style applied to this run.
    ///
    /// When the run has no `w:rStyle`, the part's default character style is
    /// returned.
    pub fn style(&self) -> Result<BaseStyle> {
        let part = self.require_part("style")?;
        let style_id = props::style_id(props::rpr(&self.r).as_ref());
        part.get_style(style_id.as_deref(), WdStyleType::Character)
    }

    /// Apply a character style by name or style object; `None` removes the
    /// run's style so the default character style applies.
    pub fn set_style<'a>(&self, style: Option<impl Into<StyleRef<'a>>>) -> Result<()> {
        let part = self.require_part("set_style")?;
        let style_id = part.get_style_id(style.map(Into::into), WdStyleType::Character)?;
        let rpr = props::get_or_add_rpr(&self.r);
        props::set_style_id(&rpr, style_id.as_deref());
        Ok(())
    }

    /// Character formatting of this run.
    pub fn font(&self) -> Font {
        Font::new(self.r.clone())
    }

    // ---------------------------------------------------------------------
    // content

    /// Whether a `w:lastRenderedPageBreak` occurs anywhere in the run.
    pub fn contains_page_break(&self) -> bool {
        self.r.has_descendant("w:lastRenderedPageBreak")
    }

    /// Iterate over the run's text segments, rendered page breaks and
    /// drawings, in document order.
    ///
    /// Contiguous text-like children (`w:t`, `w:tab`, `w:br`, `w:cr`,
    /// `w:noBreakHyphen`, `w:ptab`) are condensed into one text item.
    pub fn iter_inner_content(&self) -> InnerContentIter {
        InnerContentIter::new(&self.r, self.part.clone())
    }

    /// Text of the run.
    ///
    /// Tabs read as `\t`, line breaks and `w:cr` as `\n`. Page and column
    /// breaks, drawings and rendered page breaks contribute nothing.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for child in self.r.children() {
            if let Some(kind) = InlineKind::of(&child) {
                content::push_text(kind, &child, &mut text);
            }
        }
        text
    }

    /// Replace the content of the run with `text`.
    ///
    /// `\t` becomes `w:tab` and each `\n` or `\r` becomes `w:br`.
    /// Formatting in `w:rPr` is kept.
    pub fn set_text(&self, text: &str) {
        self.clear();
        content::append_text(&self.r, text, self.options.whitespace);
    }

    /// Append a `w:t` holding `text` and return it.
    pub fn add_text(&self, text: &str) -> Text {
        Text::new(content::add_t(&self.r, text, self.options.whitespace))
    }

    /// Append a break of the given kind.
    ///
    /// Section breaks are not run content and fail with `InvalidValue`.
    pub fn add_break(&self, break_type: WdBreak) -> Result<()> {
        let (type_, clear) = break_type.br_attributes()?;
        let br = self.r.add_child("w:br");
        if let Some(type_) = type_ {
            br.set("w:type", type_);
        }
        if let Some(clear) = clear {
            br.set("w:clear", clear);
        }
        Ok(())
    }

    /// Append a `w:tab`.
    pub fn add_tab(&self) {
        self.r.add_child("w:tab");
    }

    /// Add an inline picture at the end of the run.
    ///
    /// The story part registers the image and builds the `wp:inline`; it is
    /// appended inside a new `w:drawing`. When only one dimension is given,
    /// the part scales the other to keep the aspect ratio.
    pub fn add_picture(
        &self,
        image: impl Into<ImageSource>,
        width: Option<Length>,
        height: Option<Length>,
    ) -> Result<InlineShape> {
        let part = self.require_part("add_picture")?;
        let image = image.into();
        let inline = part.new_pic_inline(&image, width, height)?;
        if inline.contains(&self.r) {
            return Err(OoxmlError::InvalidValue(
                "picture element returned by the story part contains the run".to_string(),
            ));
        }
        debug!("adding picture '{}' to run", image.filename());
        let drawing = self.r.add_child("w:drawing");
        drawing.append(&inline)?;
        Ok(InlineShape::new(inline))
    }

    /// Remove all content, keeping `w:rPr`.
    pub fn clear(&self) -> &Self {
        let before = self.r.child_count();
        self.r.retain_children(|child| child.is(props::RPR));
        debug!("cleared {} content children from run", before - self.r.child_count());
        self
    }
}

impl PartialEq for Run {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r
    }
}

impl fmt::Debug for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Run")
            .field("element", &self.r)
            .field("has_part", &self.part().is_some())
            .finish()
    }
}

/// A `<w:t>` element of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    t: Element,
}

impl Text {
    pub fn new(t: Element) -> Self {
        Self { t }
    }

    #[inline]
    pub fn element(&self) -> &Element {
        &self.t
    }

    /// Character data of the element.
    pub fn text(&self) -> String {
        self.t.text()
    }

    /// Whether the element carries `xml:space="preserve"`.
    pub fn preserves_whitespace(&self) -> bool {
        self.t.get("xml:space").is_some_and(|space| space == "preserve")
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::ooxml::docx::config::WhitespacePolicy;
    use crate::ooxml::docx::content::InnerContent;
    use crate::ooxml::docx::enums::WdUnderline;
    use crate::ooxml::docx::shape::new_pic_inline;

    fn run(xml: &str) -> Run {
        Run::new(Element::parse(xml).unwrap(), None)
    }

    /// Records calls and answers from a fixed style table.
    #[derive(Default)]
    struct FakePart {
        style_calls: RefCell<Vec<(Option<String>, WdStyleType)>>,
        style_id_calls: RefCell<Vec<(Option<String>, WdStyleType)>>,
        picture_calls: RefCell<Vec<(ImageSource, Option<Length>, Option<Length>)>>,
    }

    impl StoryPart for FakePart {
        fn get_style(&self, style_id: Option<&str>, style_type: WdStyleType) -> Result<BaseStyle> {
            self.style_calls.borrow_mut().push((style_id.map(str::to_string), style_type));
            Ok(BaseStyle::new(style_id.unwrap_or("DefaultParagraphFont"), style_type))
        }

        fn get_style_id(&self, style: Option<StyleRef<'_>>, style_type: WdStyleType) -> Result<Option<String>> {
            self.style_id_calls.borrow_mut().push((style.map(|s| s.to_string()), style_type));
            Ok(style.map(|s| s.to_string().replace(' ', "")))
        }

        fn new_pic_inline(&self, image: &ImageSource, width: Option<Length>, height: Option<Length>) -> Result<Element> {
            self.picture_calls.borrow_mut().push((image.clone(), width, height));
            let cx = width.unwrap_or(Length::from_emus(1000));
            let cy = height.unwrap_or(Length::from_emus(500));
            new_pic_inline(1, "rId42", &image.filename(), cx, cy)
        }
    }

    fn run_in_part(xml: &str) -> (Run, Rc<FakePart>) {
        let fake = Rc::new(FakePart::default());
        let part: Rc<dyn StoryPart> = fake.clone();
        let run = Run::new(Element::parse(xml).unwrap(), Some(&part));
        // The run only holds a weak reference; keep the part alive through `fake`.
        (run, fake)
    }

    #[test]
    fn test_get_bool_property() {
        let cases = [
            ("<w:r/>", "bold", TriState::Inherit),
            ("<w:r><w:rPr><w:b/></w:rPr></w:r>", "bold", TriState::On),
            (r#"<w:r><w:rPr><w:b w:val="on"/></w:rPr></w:r>"#, "bold", TriState::On),
            (r#"<w:r><w:rPr><w:b w:val="off"/></w:rPr></w:r>"#, "bold", TriState::Off),
            (r#"<w:r><w:rPr><w:b w:val="1"/></w:rPr></w:r>"#, "bold", TriState::On),
            (r#"<w:r><w:rPr><w:i w:val="0"/></w:rPr></w:r>"#, "italic", TriState::Off),
            ("<w:r><w:rPr><w:caps/></w:rPr></w:r>", "all_caps", TriState::On),
            ("<w:r><w:rPr><w:vanish/></w:rPr></w:r>", "hidden", TriState::On),
        ];
        for (xml, name, expected) in cases {
            assert_eq!(run(xml).get_bool_property(name).unwrap(), expected, "{} {}", xml, name);
        }
    }

    #[test]
    fn test_set_bool_property() {
        let cases: [(&str, &str, TriState, &str); 8] = [
            ("<w:r/>", "bold", TriState::On, "<w:r><w:rPr><w:b/></w:rPr></w:r>"),
            ("<w:r/>", "bold", TriState::Off, r#"<w:r><w:rPr><w:b w:val="0"/></w:rPr></w:r>"#),
            ("<w:r/>", "italic", TriState::Inherit, "<w:r><w:rPr/></w:r>"),
            (
                r#"<w:r><w:rPr><w:b w:val="false"/></w:rPr></w:r>"#,
                "bold",
                TriState::On,
                "<w:r><w:rPr><w:b/></w:rPr></w:r>",
            ),
            (
                r#"<w:r><w:rPr><w:b w:val="1"/></w:rPr></w:r>"#,
                "bold",
                TriState::Off,
                r#"<w:r><w:rPr><w:b w:val="0"/></w:rPr></w:r>"#,
            ),
            (
                r#"<w:r><w:rPr><w:i w:val="false"/></w:rPr></w:r>"#,
                "italic",
                TriState::Inherit,
                "<w:r><w:rPr/></w:r>",
            ),
            (
                "<w:r><w:t>x</w:t></w:r>",
                "emboss",
                TriState::On,
                "<w:r><w:rPr><w:emboss/></w:rPr><w:t>x</w:t></w:r>",
            ),
            (
                "<w:r><w:rPr><w:b/><w:vanish/></w:rPr></w:r>",
                "strike",
                TriState::On,
                "<w:r><w:rPr><w:b/><w:strike/><w:vanish/></w:rPr></w:r>",
            ),
        ];
        for (xml, name, value, expected) in cases {
            let run = run(xml);
            run.set_bool_property(name, value).unwrap();
            assert_eq!(run.element().xml(), expected, "{} {} {}", xml, name, value);
        }
    }

    #[test]
    fn test_bool_property_unknown_name() {
        let run = run("<w:r/>");
        assert!(matches!(run.set_bool_property("blink", true), Err(OoxmlError::InvalidValue(_))));
        assert!(matches!(run.get_bool_property("blink"), Err(OoxmlError::InvalidValue(_))));
        assert_eq!(run.element().xml(), "<w:r/>");
    }

    #[test]
    fn test_bold_italic_conveniences() {
        let run = run("<w:r/>");
        run.set_bold(true);
        run.set_italic(Some(false));
        assert_eq!(run.bold().unwrap(), TriState::On);
        assert_eq!(run.italic().unwrap(), TriState::Off);
        run.set_bold(None::<bool>);
        assert_eq!(run.bold().unwrap(), TriState::Inherit);
    }

    #[test]
    fn test_get_underline() {
        let cases = [
            ("<w:r/>", Underline::Inherit),
            ("<w:r><w:rPr><w:u/></w:rPr></w:r>", Underline::Inherit),
            (r#"<w:r><w:rPr><w:u w:val="single"/></w:rPr></w:r>"#, Underline::On),
            (r#"<w:r><w:rPr><w:u w:val="none"/></w:rPr></w:r>"#, Underline::Off),
            (
                r#"<w:r><w:rPr><w:u w:val="double"/></w:rPr></w:r>"#,
                Underline::Style(WdUnderline::Double),
            ),
            (
                r#"<w:r><w:rPr><w:u w:val="wave"/></w:rPr></w:r>"#,
                Underline::Style(WdUnderline::Wavy),
            ),
        ];
        for (xml, expected) in cases {
            assert_eq!(run(xml).underline().unwrap(), expected, "{}", xml);
        }
    }

    #[test]
    fn test_set_underline() {
        let cases: [(&str, Underline, &str); 6] = [
            ("<w:r/>", Underline::On, r#"<w:r><w:rPr><w:u w:val="single"/></w:rPr></w:r>"#),
            ("<w:r/>", Underline::Off, r#"<w:r><w:rPr><w:u w:val="none"/></w:rPr></w:r>"#),
            (
                "<w:r/>",
                Underline::Style(WdUnderline::Wavy),
                r#"<w:r><w:rPr><w:u w:val="wave"/></w:rPr></w:r>"#,
            ),
            (
                r#"<w:r><w:rPr><w:u w:val="single"/></w:rPr></w:r>"#,
                Underline::Inherit,
                "<w:r><w:rPr/></w:r>",
            ),
            (
                r#"<w:r><w:rPr><w:u w:val="single"/></w:rPr></w:r>"#,
                Underline::Style(WdUnderline::Double),
                r#"<w:r><w:rPr><w:u w:val="double"/></w:rPr></w:r>"#,
            ),
            (
                r#"<w:r><w:rPr><w:b/><w:vertAlign w:val="subscript"/></w:rPr></w:r>"#,
                Underline::Style(WdUnderline::Single),
                r#"<w:r><w:rPr><w:b/><w:u w:val="single"/><w:vertAlign w:val="subscript"/></w:rPr></w:r>"#,
            ),
        ];
        for (xml, value, expected) in cases {
            let run = run(xml);
            run.set_underline(value);
            assert_eq!(run.element().xml(), expected, "{} {:?}", xml, value);
        }
    }

    #[test]
    fn test_invalid_underline_literal_leaves_run_unchanged() {
        let run = run(r#"<w:r><w:rPr><w:u w:val="double"/></w:rPr></w:r>"#);
        let before = run.element().xml();
        let result = "foobar".parse::<Underline>().map(|value| run.set_underline(value));
        assert!(matches!(result, Err(OoxmlError::InvalidValue(_))));
        assert_eq!(run.element().xml(), before);

        let run = self::run(r#"<w:r><w:rPr><w:u w:val="blink"/></w:rPr></w:r>"#);
        assert!(matches!(run.underline(), Err(OoxmlError::InvalidValue(_))));
    }

    #[test]
    fn test_add_text() {
        let cases = [
            ("<w:r/>", "foo", "<w:r><w:t>foo</w:t></w:r>"),
            ("<w:r><w:t>foo</w:t></w:r>", "bar", "<w:r><w:t>foo</w:t><w:t>bar</w:t></w:r>"),
            ("<w:r/>", "fo ", r#"<w:r><w:t xml:space="preserve">fo </w:t></w:r>"#),
            ("<w:r/>", "f o", "<w:r><w:t>f o</w:t></w:r>"),
            ("<w:r><w:br/></w:r>", " x", r#"<w:r><w:br/><w:t xml:space="preserve"> x</w:t></w:r>"#),
        ];
        for (xml, text, expected) in cases {
            let run = run(xml);
            let t = run.add_text(text);
            assert_eq!(run.element().xml(), expected, "{}", text);
            assert_eq!(t.text(), text);
            assert_eq!(t.element().parent().as_ref(), Some(run.element()));
        }
    }

    #[test]
    fn test_add_text_with_always_preserve() {
        let run = run("<w:r/>").with_options(RunOptions::new().with_whitespace(WhitespacePolicy::Always));
        assert!(run.add_text("foo").preserves_whitespace());
    }

    #[test]
    fn test_add_break() {
        let cases = [
            (WdBreak::Line, "<w:r><w:br/></w:r>"),
            (WdBreak::Page, r#"<w:r><w:br w:type="page"/></w:r>"#),
            (WdBreak::Column, r#"<w:r><w:br w:type="column"/></w:r>"#),
            (WdBreak::LineClearLeft, r#"<w:r><w:br w:clear="left"/></w:r>"#),
            (WdBreak::LineClearRight, r#"<w:r><w:br w:clear="right"/></w:r>"#),
            (WdBreak::LineClearAll, r#"<w:r><w:br w:clear="all"/></w:r>"#),
        ];
        for (break_type, expected) in cases {
            let run = run("<w:r/>");
            run.add_break(break_type).unwrap();
            assert_eq!(run.element().xml(), expected, "{}", break_type);
        }
    }

    #[test]
    fn test_add_section_break_is_rejected() {
        let run = run("<w:r><w:t>x</w:t></w:r>");
        for break_type in [
            WdBreak::SectionNextPage,
            WdBreak::SectionContinuous,
            WdBreak::SectionEvenPage,
            WdBreak::SectionOddPage,
        ] {
            assert!(matches!(run.add_break(break_type), Err(OoxmlError::InvalidValue(_))));
        }
        assert_eq!(run.element().xml(), "<w:r><w:t>x</w:t></w:r>");
    }

    #[test]
    fn test_add_tab() {
        let run = run("<w:r><w:t>a</w:t></w:r>");
        run.add_tab();
        assert_eq!(run.element().xml(), "<w:r><w:t>a</w:t><w:tab/></w:r>");
    }

    #[test]
    fn test_add_picture() {
        let (run, fake) = run_in_part("<w:r><w:t>x</w:t></w:r>");
        let image = ImageSource::Bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]);
        let width = Some(Length::from_emus(42));

        let shape = run.add_picture(image.clone(), width, None).unwrap();

        assert_eq!(*fake.picture_calls.borrow(), vec![(image, width, None)]);
        let drawing = run.element().first_child("w:drawing").unwrap();
        assert_eq!(drawing.children(), vec![shape.element().clone()]);
        assert_eq!(shape.width().unwrap(), Some(Length::from_emus(42)));
        let tags: Vec<String> = run.element().children().iter().map(Element::tag).collect();
        assert_eq!(tags, vec!["w:t", "w:drawing"]);
    }

    #[test]
    fn test_add_picture_without_part() {
        let run = run("<w:r/>");
        let result = run.add_picture(ImageSource::Bytes(vec![]), None, None);
        assert!(matches!(result, Err(OoxmlError::NotApplicable(_))));
        assert_eq!(run.element().xml(), "<w:r/>");
    }

    /// Hands back the paragraph holding the run instead of a new picture.
    struct ParagraphPart {
        paragraph: Element,
    }

    impl StoryPart for ParagraphPart {
        fn get_style(&self, style_id: Option<&str>, style_type: WdStyleType) -> Result<BaseStyle> {
            Ok(BaseStyle::new(style_id.unwrap_or("DefaultParagraphFont"), style_type))
        }

        fn get_style_id(&self, _style: Option<StyleRef<'_>>, _style_type: WdStyleType) -> Result<Option<String>> {
            Ok(None)
        }

        fn new_pic_inline(&self, _image: &ImageSource, _width: Option<Length>, _height: Option<Length>) -> Result<Element> {
            Ok(self.paragraph.clone())
        }
    }

    #[test]
    fn test_add_picture_rejects_enclosing_element() {
        let body = Element::parse("<w:body><w:p><w:r><w:t>x</w:t></w:r></w:p></w:body>").unwrap();
        let paragraph = body.first_child("w:p").unwrap();
        let part: Rc<dyn StoryPart> = Rc::new(ParagraphPart {
            paragraph: paragraph.clone(),
        });
        let run = Run::new(paragraph.first_child("w:r").unwrap(), Some(&part));
        let before = body.xml();

        let result = run.add_picture(ImageSource::Bytes(vec![0x89, b'P', b'N', b'G']), None, None);

        assert!(matches!(result, Err(OoxmlError::InvalidValue(_))));
        assert_eq!(body.xml(), before);
    }

    #[test]
    fn test_part_is_not_kept_alive() {
        let (run, fake) = run_in_part("<w:r/>");
        assert!(run.part().is_some());
        drop(fake);
        assert!(run.part().is_none());
        assert!(matches!(run.style(), Err(OoxmlError::NotApplicable(_))));
    }

    #[test]
    fn test_clear() {
        let cases = [
            ("<w:r/>", "<w:r/>"),
            ("<w:r><w:rPr><w:b/></w:rPr></w:r>", "<w:r><w:rPr><w:b/></w:rPr></w:r>"),
            ("<w:r><w:t>foo</w:t><w:tab/><w:drawing/></w:r>", "<w:r/>"),
            (
                r#"<w:r><w:rPr><w:i/></w:rPr><w:t>a</w:t><w:br w:type="page"/><w:x/></w:r>"#,
                "<w:r><w:rPr><w:i/></w:rPr></w:r>",
            ),
        ];
        for (xml, expected) in cases {
            let run = run(xml);
            let returned = run.clear();
            assert_eq!(returned, &run);
            assert_eq!(run.element().xml(), expected, "{}", xml);
        }
    }

    #[test]
    fn test_text() {
        let cases = [
            ("<w:r/>", ""),
            ("<w:r><w:t>foobar</w:t></w:r>", "foobar"),
            ("<w:r><w:t>abc</w:t><w:tab/><w:t>def</w:t><w:cr/></w:r>", "abc\tdef\n"),
            (r#"<w:r><w:br/><w:t>def</w:t><w:br w:type="page"/></w:r>"#, "\ndef"),
            ("<w:r><w:ptab/><w:noBreakHyphen/><w:lastRenderedPageBreak/></w:r>", "\t"),
            (r#"<w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve"> x </w:t></w:r>"#, " x "),
        ];
        for (xml, expected) in cases {
            assert_eq!(run(xml).text(), expected, "{}", xml);
        }
    }

    #[test]
    fn test_set_text() {
        let cases = [
            ("abc  def", "<w:r><w:t>abc  def</w:t></w:r>"),
            ("abc\tdef", "<w:r><w:t>abc</w:t><w:tab/><w:t>def</w:t></w:r>"),
            ("abc\ndef", "<w:r><w:t>abc</w:t><w:br/><w:t>def</w:t></w:r>"),
            ("abc\rdef", "<w:r><w:t>abc</w:t><w:br/><w:t>def</w:t></w:r>"),
            ("\t\n", "<w:r><w:tab/><w:br/></w:r>"),
            ("", "<w:r/>"),
        ];
        for (text, expected) in cases {
            let run = run("<w:r><w:t>old</w:t><w:drawing/></w:r>");
            run.set_text(text);
            assert_eq!(run.element().xml(), expected, "{:?}", text);
        }
    }

    #[test]
    fn test_set_text_keeps_formatting() {
        let run = run(r#"<w:r><w:rPr><w:b/></w:rPr><w:t>x</w:t></w:r>"#);
        run.set_text(" y");
        assert_eq!(
            run.element().xml(),
            r#"<w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve"> y</w:t></w:r>"#
        );
    }

    #[test]
    fn test_contains_page_break() {
        let cases = [
            ("<w:r/>", false),
            ("<w:r><w:t>a</w:t><w:br w:type=\"page\"/></w:r>", false),
            ("<w:r><w:lastRenderedPageBreak/></w:r>", true),
            ("<w:r><w:t>a</w:t><w:lastRenderedPageBreak/><w:t>b</w:t></w:r>", true),
            ("<w:r><w:drawing><x:y><w:lastRenderedPageBreak/></x:y></w:drawing></w:r>", true),
            ("<w:r><w:x><w:lastRenderedPageBreak/></w:x></w:r>", true),
            ("<w:r><w:drawing><x:y/></w:drawing></w:r>", false),
        ];
        for (xml, expected) in cases {
            assert_eq!(run(xml).contains_page_break(), expected, "{}", xml);
        }
    }

    #[test]
    fn test_iter_inner_content_carries_part() {
        let (run, _fake) = run_in_part("<w:r><w:drawing/><w:lastRenderedPageBreak/></w:r>");
        let items: Vec<InnerContent> = run.iter_inner_content().collect();
        match items.as_slice() {
            [InnerContent::Drawing(drawing), InnerContent::PageBreak(marker)] => {
                assert!(drawing.part().is_some());
                assert!(marker.part().is_some());
            },
            other => panic!("unexpected items: {:?}", other),
        }
    }

    #[test]
    fn test_style() {
        let (run, fake) = run_in_part(r#"<w:r><w:rPr><w:rStyle w:val="Emphasis"/></w:rPr></w:r>"#);
        let style = run.style().unwrap();
        assert_eq!(style.style_id(), "Emphasis");
        assert_eq!(
            *fake.style_calls.borrow(),
            vec![(Some("Emphasis".to_string()), WdStyleType::Character)]
        );

        let (run, fake) = run_in_part("<w:r/>");
        run.style().unwrap();
        assert_eq!(*fake.style_calls.borrow(), vec![(None, WdStyleType::Character)]);
    }

    #[test]
    fn test_set_style() {
        let (run, fake) = run_in_part("<w:r/>");
        run.set_style(Some("Strong Text")).unwrap();
        assert_eq!(
            run.element().xml(),
            r#"<w:r><w:rPr><w:rStyle w:val="StrongText"/></w:rPr></w:r>"#
        );

        let style = BaseStyle::new("Quote", WdStyleType::Character);
        run.set_style(Some(&style)).unwrap();
        assert_eq!(
            run.element().xml(),
            r#"<w:r><w:rPr><w:rStyle w:val="Quote"/></w:rPr></w:r>"#
        );

        run.set_style(None::<&str>).unwrap();
        assert_eq!(run.element().xml(), "<w:r><w:rPr/></w:r>");
        assert_eq!(
            *fake.style_id_calls.borrow(),
            vec![
                (Some("Strong Text".to_string()), WdStyleType::Character),
                (Some("Quote".to_string()), WdStyleType::Character),
                (None, WdStyleType::Character),
            ]
        );
    }

    #[test]
    fn test_style_without_part() {
        let run = run("<w:r/>");
        assert!(matches!(run.style(), Err(OoxmlError::NotApplicable(_))));
        assert!(matches!(run.set_style(Some("Emphasis")), Err(OoxmlError::NotApplicable(_))));
        assert_eq!(run.element().xml(), "<w:r/>");
    }

    #[test]
    fn test_font_shares_run_element() {
        let run = run("<w:r/>");
        assert_eq!(run.font(), run.font());
        run.font().set_strike(true);
        assert_eq!(run.get_bool_property("strike").unwrap(), TriState::On);
    }
}
