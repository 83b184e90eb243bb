//! Drawing objects and rendered page breaks found inside a run.
//!
//! Both types pair an element of the run with a non-owning reference to the
//! story part that contains it. The run tree owns the element; the part
//! reference only resolves relationships (e.g. embedded images) and never
//! keeps the part alive.
use std::fmt;
use std::rc::{Rc, Weak};

use crate::ooxml::docx::parts::StoryPart;
use crate::ooxml::docx::shape::InlineShape;
use crate::ooxml::oxml::Element;

/// A `<w:drawing>` element within a run.
///
/// A drawing holds either an inline shape (`wp:inline`) or a floating one
/// (`wp:anchor`); pictures carry a `pic:pic` graphic.
#[derive(Clone)]
pub struct Drawing {
    drawing: Element,
    part: Option<Weak<dyn StoryPart>>,
}

impl Drawing {
    pub fn new(drawing: Element, part: Option<Weak<dyn StoryPart>>) -> Self {
        Self { drawing, part }
    }

    /// The `w:drawing` element.
    #[inline]
    pub fn element(&self) -> &Element {
        &self.drawing
    }

    /// The story part containing this drawing, if still alive.
    pub fn part(&self) -> Option<Rc<dyn StoryPart>> {
        self.part.as_ref().and_then(Weak::upgrade)
    }

    /// Whether the drawing contains a picture.
    pub fn has_picture(&self) -> bool {
        self.drawing.has_descendant("pic:pic")
    }

    /// Whether the drawing is anchored (floating) rather than inline.
    pub fn is_anchored(&self) -> bool {
        self.drawing.first_child("wp:anchor").is_some()
    }

    /// The inline shape, for drawings that flow with the text.
    pub fn inline_shape(&self) -> Option<InlineShape> {
        self.drawing.first_child("wp:inline").map(InlineShape::new)
    }
}

impl PartialEq for Drawing {
    fn eq(&self, other: &Self) -> bool {
        self.drawing == other.drawing
    }
}

impl fmt::Debug for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawing")
            .field("element", &self.drawing)
            .field("has_part", &self.part().is_some())
            .finish()
    }
}

/// A `<w:lastRenderedPageBreak>` marker.
///
/// Left by the application that last paginated the document, it records
/// where a page ended. It has zero width and contributes no text.
#[derive(Clone)]
pub struct RenderedPageBreak {
    marker: Element,
    part: Option<Weak<dyn StoryPart>>,
}

impl RenderedPageBreak {
    pub fn new(marker: Element, part: Option<Weak<dyn StoryPart>>) -> Self {
        Self { marker, part }
    }

    #[inline]
    pub fn element(&self) -> &Element {
        &self.marker
    }

    pub fn part(&self) -> Option<Rc<dyn StoryPart>> {
        self.part.as_ref().and_then(Weak::upgrade)
    }
}

impl PartialEq for RenderedPageBreak {
    fn eq(&self, other: &Self) -> bool {
        self.marker == other.marker
    }
}

impl fmt::Debug for RenderedPageBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RenderedPageBreak").field(&self.marker).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_accessors() {
        let xml = r#"<w:drawing><wp:inline><wp:extent cx="5" cy="6"/><a:graphic><a:graphicData><pic:pic/></a:graphicData></a:graphic></wp:inline></w:drawing>"#;
        let element = Element::parse(xml).unwrap();
        let drawing = Drawing::new(element.clone(), None);

        assert_eq!(drawing.element(), &element);
        assert!(drawing.part().is_none());
        assert!(drawing.has_picture());
        assert!(!drawing.is_anchored());
        let shape = drawing.inline_shape().unwrap();
        assert_eq!(shape.height().unwrap().map(|h| h.emus()), Some(6));
    }

    #[test]
    fn test_chart_drawing_has_no_picture() {
        let element = Element::parse(r#"<w:drawing><wp:anchor><a:graphic><c:chart/></a:graphic></wp:anchor></w:drawing>"#).unwrap();
        let drawing = Drawing::new(element, None);
        assert!(!drawing.has_picture());
        assert!(drawing.is_anchored());
        assert!(drawing.inline_shape().is_none());
    }
}
