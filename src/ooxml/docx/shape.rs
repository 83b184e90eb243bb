//! Inline shapes (`wp:inline`) hosted by a run's `w:drawing`.
use crate::common::style::Length;
use crate::common::xml::escape_attr;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::Element;

const PIC_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

/// An inline graphical object, typically a picture.
///
/// Wraps a `wp:inline` element; dimensions are read from `wp:extent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineShape {
    inline: Element,
}

impl InlineShape {
    /// Wrap an existing `wp:inline` element.
    pub fn new(inline: Element) -> Self {
        Self { inline }
    }

    /// The wrapped `wp:inline` element.
    #[inline]
    pub fn element(&self) -> &Element {
        &self.inline
    }

    /// Width of the shape, or `None` if the extent is missing.
    pub fn width(&self) -> Result<Option<Length>> {
        self.extent_attr("cx")
    }

    /// Height of the shape, or `None` if the extent is missing.
    pub fn height(&self) -> Result<Option<Length>> {
        self.extent_attr("cy")
    }

    /// Set the display width, updating the picture transform as well.
    pub fn set_width(&self, width: Length) {
        self.set_extent_attr("cx", width);
    }

    /// Set the display height, updating the picture transform as well.
    pub fn set_height(&self, height: Length) {
        self.set_extent_attr("cy", height);
    }

    /// Relationship id of the embedded image, if this is a picture.
    pub fn image_rel_id(&self) -> Option<String> {
        self.inline.find_descendant("a:blip").and_then(|blip| blip.get("r:embed"))
    }

    fn extent_attr(&self, name: &str) -> Result<Option<Length>> {
        let Some(value) = self.inline.first_child("wp:extent").and_then(|extent| extent.get(name)) else {
            return Ok(None);
        };
        value
            .parse::<i64>()
            .map(|emus| Some(Length::from_emus(emus)))
            .map_err(|_| OoxmlError::InvalidValue(format!("'{}' is not a valid extent", value)))
    }

    fn set_extent_attr(&self, name: &str, value: Length) {
        let emus = value.emus().to_string();
        let extent = match self.inline.first_child("wp:extent") {
            Some(extent) => extent,
            None => self.inline.insert_child(0, "wp:extent"),
        };
        extent.set(name, &emus);
        if let Some(ext) = self
            .inline
            .find_descendant("pic:spPr")
            .and_then(|sppr| sppr.find_descendant("a:ext"))
        {
            ext.set(name, &emus);
        }
    }
}

/// Build a `wp:inline` element holding a picture.
///
/// `rel_id` is the relationship from the story part to the image part and
/// `filename` is recorded as the picture's name and description.
///
/// # Examples
///
/// ```rust
/// use docx_run::common::style::Length;
/// use docx_run::ooxml::docx::shape::{InlineShape, new_pic_inline};
///
/// let inline = new_pic_inline(1, "rId9", "cat.png", Length::from_inches(1.0), Length::from_inches(0.5))?;
/// let shape = InlineShape::new(inline);
/// assert_eq!(shape.width()?, Some(Length::from_emus(914_400)));
/// assert_eq!(shape.image_rel_id().as_deref(), Some("rId9"));
/// # Ok::<(), docx_run::ooxml::error::OoxmlError>(())
/// ```
pub fn new_pic_inline(shape_id: u32, rel_id: &str, filename: &str, cx: Length, cy: Length) -> Result<Element> {
    let filename = escape_attr(filename);
    let rel_id = escape_attr(rel_id);
    let (cx, cy) = (cx.emus(), cy.emus());
    let xml = format!(
        concat!(
            r#"<wp:inline distT="0" distB="0" distL="0" distR="0">"#,
            r#"<wp:extent cx="{cx}" cy="{cy}"/>"#,
            r#"<wp:effectExtent l="0" t="0" r="0" b="0"/>"#,
            r#"<wp:docPr id="{id}" name="Picture {id}" descr="{name}"/>"#,
            r#"<wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect="1"/></wp:cNvGraphicFramePr>"#,
            r#"<a:graphic><a:graphicData uri="{uri}"><pic:pic>"#,
            r#"<pic:nvPicPr><pic:cNvPr id="0" name="{name}"/><pic:cNvPicPr/></pic:nvPicPr>"#,
            r#"<pic:blipFill><a:blip r:embed="{rel}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>"#,
            r#"<pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>"#,
            r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr>"#,
            r#"</pic:pic></a:graphicData></a:graphic></wp:inline>"#,
        ),
        cx = cx,
        cy = cy,
        id = shape_id,
        name = filename,
        uri = PIC_URI,
        rel = rel_id,
    );
    Element::parse(&xml)
}
