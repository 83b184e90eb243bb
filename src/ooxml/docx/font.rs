//! Character formatting facade over a run.
//!
//! [`Font`] holds no state of its own: every getter reads the run's `w:rPr`
//! and every setter writes it, creating `w:rPr` on the first write. Reads
//! never modify the run.
use std::fmt;

use super::enums::{VerticalPosition, WdColorIndex, WdColorType, WdThemeColor};
use super::format::{TriState, Underline};
use super::props::{self, BoolProperty};
use crate::common::style::{Length, RGBColor};
use crate::ooxml::error::Result;
use crate::ooxml::oxml::Element;

macro_rules! bool_accessors {
    ($($(#[$doc:meta])* $getter:ident, $setter:ident => $prop:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $getter(&self) -> Result<TriState> {
                self.bool_property(BoolProperty::$prop)
            }

            #[doc = concat!("Set the `", stringify!($getter), "` flag; `Inherit` removes it.")]
            pub fn $setter(&self, value: impl Into<TriState>) {
                self.set_bool_property(BoolProperty::$prop, value.into());
            }
        )*
    };
}

/// Character properties of a run.
///
/// Two `Font`s are equal when they wrap the same run element.
///
/// # Examples
///
/// ```rust
/// use docx_run::ooxml::docx::Run;
/// use docx_run::ooxml::docx::format::TriState;
/// use docx_run::ooxml::oxml::Element;
///
/// let run = Run::new(Element::parse("<w:r/>")?, None);
/// let font = run.font();
/// font.set_bold(true);
/// font.set_italic(false);
/// assert_eq!(font.bold()?, TriState::On);
/// assert_eq!(run.element().xml(), r#"<w:r><w:rPr><w:b/><w:i w:val="0"/></w:rPr></w:r>"#);
/// # Ok::<(), docx_run::ooxml::error::OoxmlError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Font {
    r: Element,
}

impl Font {
    /// Font view over the run element `r`.
    pub fn new(r: Element) -> Self {
        Self { r }
    }

    fn rpr(&self) -> Option<Element> {
        props::rpr(&self.r)
    }

    fn rpr_mut(&self) -> Element {
        props::get_or_add_rpr(&self.r)
    }

    /// Read any on/off flag.
    pub fn bool_property(&self, prop: BoolProperty) -> Result<TriState> {
        props::get_tristate(self.rpr().as_ref(), prop.tag())
    }

    /// Write any on/off flag.
    pub fn set_bool_property(&self, prop: BoolProperty, value: TriState) {
        props::set_tristate(&self.rpr_mut(), prop.tag(), value);
    }

    bool_accessors! {
        /// Text displayed in capital letters (`w:caps`).
        all_caps, set_all_caps => AllCaps;
        /// Bold (`w:b`).
        bold, set_bold => Bold;
        /// Treat the contents as complex script text (`w:cs`).
        complex_script, set_complex_script => ComplexScript;
        /// Bold for complex script characters (`w:bCs`).
        cs_bold, set_cs_bold => CsBold;
        /// Italic for complex script characters (`w:iCs`).
        cs_italic, set_cs_italic => CsItalic;
        /// Two horizontal lines through each character (`w:dstrike`).
        double_strike, set_double_strike => DoubleStrike;
        /// Text appears raised from the page (`w:emboss`).
        emboss, set_emboss => Emboss;
        /// Text is hidden (`w:vanish`).
        hidden, set_hidden => Hidden;
        /// Text appears pressed into the page (`w:imprint`).
        imprint, set_imprint => Imprint;
        /// Italic (`w:i`).
        italic, set_italic => Italic;
        /// Run contains Office Math text (`w:oMath`).
        math, set_math => Math;
        /// Exclude from spelling and grammar checks (`w:noProof`).
        no_proof, set_no_proof => NoProof;
        outline, set_outline => Outline;
        /// Right-to-left text (`w:rtl`).
        rtl, set_rtl => Rtl;
        shadow, set_shadow => Shadow;
        /// Lowercase letters shown as small capitals (`w:smallCaps`).
        small_caps, set_small_caps => SmallCaps;
        /// Characters snap to the document grid (`w:snapToGrid`).
        snap_to_grid, set_snap_to_grid => SnapToGrid;
        /// Paragraph mark of a run-only paragraph is hidden (`w:specVanish`).
        spec_vanish, set_spec_vanish => SpecVanish;
        strike, set_strike => Strike;
        /// Hidden in web layout view (`w:webHidden`).
        web_hidden, set_web_hidden => WebHidden;
    }

    /// Underline applied to the run.
    pub fn underline(&self) -> Result<Underline> {
        props::underline(self.rpr().as_ref())
    }

    pub fn set_underline(&self, value: impl Into<Underline>) {
        props::set_underline(&self.rpr_mut(), value.into());
    }

    /// `On` when the run is subscripted, `Off` when it has another vertical
    /// alignment, `Inherit` when none is set.
    pub fn subscript(&self) -> Result<TriState> {
        self.vertical_flag(VerticalPosition::Subscript)
    }

    /// Setting `Off` removes the alignment only when it is subscript.
    pub fn set_subscript(&self, value: impl Into<TriState>) {
        self.set_vertical_flag(VerticalPosition::Subscript, value.into());
    }

    /// `On` when the run is superscripted, `Off` when it has another
    /// vertical alignment, `Inherit` when none is set.
    pub fn superscript(&self) -> Result<TriState> {
        self.vertical_flag(VerticalPosition::Superscript)
    }

    /// Setting `Off` removes the alignment only when it is superscript.
    pub fn set_superscript(&self, value: impl Into<TriState>) {
        self.set_vertical_flag(VerticalPosition::Superscript, value.into());
    }

    fn vertical_flag(&self, position: VerticalPosition) -> Result<TriState> {
        Ok(match props::vertical_position(self.rpr().as_ref())? {
            None => TriState::Inherit,
            Some(current) => TriState::from(current == position),
        })
    }

    fn set_vertical_flag(&self, position: VerticalPosition, value: TriState) {
        match value {
            TriState::On => props::set_vertical_position(&self.rpr_mut(), Some(position)),
            TriState::Inherit => {
                if let Some(rpr) = self.rpr() {
                    props::set_vertical_position(&rpr, None);
                }
            },
            TriState::Off => {
                if let Some(rpr) = self.rpr()
                    && matches!(props::vertical_position(Some(&rpr)), Ok(Some(current)) if current == position)
                {
                    props::set_vertical_position(&rpr, None);
                }
            },
        }
    }

    /// Font height (`w:sz`), `None` when inherited.
    pub fn size(&self) -> Result<Option<Length>> {
        props::size(self.rpr().as_ref())
    }

    /// Set the font height; it is stored in whole half-points.
    pub fn set_size(&self, size: Option<Length>) {
        props::set_size(&self.rpr_mut(), size);
    }

    /// Typeface name (`w:rFonts/@w:ascii`).
    pub fn name(&self) -> Option<String> {
        props::font_name(self.rpr().as_ref())
    }

    /// Set the typeface used for ASCII and high-ANSI characters.
    pub fn set_name(&self, name: Option<&str>) {
        props::set_font_name(&self.rpr_mut(), name);
    }

    /// Highlight color (`w:highlight`).
    pub fn highlight_color(&self) -> Result<Option<WdColorIndex>> {
        props::highlight(self.rpr().as_ref())
    }

    pub fn set_highlight_color(&self, value: Option<WdColorIndex>) {
        props::set_highlight(&self.rpr_mut(), value);
    }

    /// Text color.
    pub fn color(&self) -> ColorFormat {
        ColorFormat { r: self.r.clone() }
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font").field("rPr", &self.rpr()).finish()
    }
}

/// Text color of a run (`w:color`).
#[derive(Clone, PartialEq, Eq)]
pub struct ColorFormat {
    r: Element,
}

impl ColorFormat {
    /// How the color is specified, `None` when no color is set.
    ///
    /// A theme color takes precedence over the `w:val` it carries.
    pub fn color_type(&self) -> Option<WdColorType> {
        let rpr = props::rpr(&self.r);
        let val = props::color_val(rpr.as_ref())?;
        if props::theme_color(rpr.as_ref()).is_some() {
            Some(WdColorType::Theme)
        } else if val == "auto" {
            Some(WdColorType::Auto)
        } else {
            Some(WdColorType::Rgb)
        }
    }

    /// Explicit RGB value; `None` when unset or `auto`.
    ///
    /// With a theme color, this is the value the theme color last resolved to.
    pub fn rgb(&self) -> Result<Option<RGBColor>> {
        match props::color_val(props::rpr(&self.r).as_ref()) {
            None => Ok(None),
            Some(val) if val == "auto" => Ok(None),
            Some(val) => val.parse().map(Some),
        }
    }

    /// Set an explicit RGB color, replacing any theme color. `None` removes
    /// the color.
    pub fn set_rgb(&self, rgb: Option<RGBColor>) {
        match rgb {
            Some(rgb) => props::set_color_rgb(&props::get_or_add_rpr(&self.r), rgb),
            None => {
                if let Some(rpr) = props::rpr(&self.r) {
                    props::remove_color(&rpr);
                }
            },
        }
    }

    /// Theme color, if the color is taken from the theme.
    pub fn theme_color(&self) -> Option<WdThemeColor> {
        props::theme_color(props::rpr(&self.r).as_ref())
    }

    /// Set a theme color. `None` removes the color.
    pub fn set_theme_color(&self, theme: Option<WdThemeColor>) {
        match theme {
            Some(theme) => props::set_color_theme(&props::get_or_add_rpr(&self.r), theme),
            None => {
                if let Some(rpr) = props::rpr(&self.r) {
                    props::remove_color(&rpr);
                }
            },
        }
    }
}

impl fmt::Debug for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorFormat")
            .field("type", &self.color_type())
            .field("theme_color", &self.theme_color())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::enums::WdUnderline;
    use crate::ooxml::error::OoxmlError;

    fn font_of(xml: &str) -> (Element, Font) {
        let r = Element::parse(xml).unwrap();
        (r.clone(), Font::new(r))
    }

    #[test]
    fn test_reads_do_not_create_rpr() {
        let (r, font) = font_of("<w:r/>");
        assert_eq!(font.bold().unwrap(), TriState::Inherit);
        assert_eq!(font.underline().unwrap(), Underline::Inherit);
        assert_eq!(font.size().unwrap(), None);
        assert_eq!(font.name(), None);
        assert_eq!(font.color().rgb().unwrap(), None);
        assert_eq!(r.xml(), "<w:r/>");
    }

    #[test]
    fn test_every_bool_accessor_round_trips() {
        let (r, font) = font_of("<w:r/>");
        type Accessor = (fn(&Font) -> Result<TriState>, fn(&Font, TriState), &'static str);
        let accessors: [Accessor; 4] = [
            (Font::all_caps, |f, v| f.set_all_caps(v), "w:caps"),
            (Font::hidden, |f, v| f.set_hidden(v), "w:vanish"),
            (Font::cs_bold, |f, v| f.set_cs_bold(v), "w:bCs"),
            (Font::math, |f, v| f.set_math(v), "w:oMath"),
        ];
        for (get, set, tag) in accessors {
            for value in [TriState::On, TriState::Off, TriState::Inherit] {
                set(&font, value);
                assert_eq!(get(&font).unwrap(), value, "{}", tag);
            }
        }
        assert_eq!(r.xml(), "<w:r><w:rPr/></w:r>");
    }

    #[test]
    fn test_underline() {
        let (r, font) = font_of("<w:r/>");
        font.set_underline(WdUnderline::DotDash);
        assert_eq!(font.underline().unwrap(), Underline::Style(WdUnderline::DotDash));
        font.set_underline(true);
        assert_eq!(r.xml(), r#"<w:r><w:rPr><w:u w:val="single"/></w:rPr></w:r>"#);
    }

    #[test]
    fn test_subscript_and_superscript() {
        let (r, font) = font_of(r#"<w:r><w:rPr><w:vertAlign w:val="superscript"/></w:rPr></w:r>"#);
        assert_eq!(font.superscript().unwrap(), TriState::On);
        assert_eq!(font.subscript().unwrap(), TriState::Off);

        font.set_subscript(false);
        assert_eq!(font.superscript().unwrap(), TriState::On);

        font.set_subscript(true);
        assert_eq!(r.xml(), r#"<w:r><w:rPr><w:vertAlign w:val="subscript"/></w:rPr></w:r>"#);

        font.set_subscript(false);
        assert_eq!(font.subscript().unwrap(), TriState::Inherit);
        assert_eq!(r.xml(), "<w:r><w:rPr/></w:r>");

        font.set_superscript(None::<bool>);
        assert_eq!(r.xml(), "<w:r><w:rPr/></w:r>");
    }

    #[test]
    fn test_baseline_reads_as_off() {
        let (_, font) = font_of(r#"<w:r><w:rPr><w:vertAlign w:val="baseline"/></w:rPr></w:r>"#);
        assert_eq!(font.superscript().unwrap(), TriState::Off);
        assert_eq!(font.subscript().unwrap(), TriState::Off);
    }

    #[test]
    fn test_size_name_highlight() {
        let (r, font) = font_of("<w:r/>");
        font.set_size(Some(Length::from_pt(14.0)));
        font.set_name(Some("Times New Roman"));
        font.set_highlight_color(Some(WdColorIndex::Gray25));
        assert_eq!(
            r.xml(),
            r#"<w:r><w:rPr><w:rFonts w:ascii="Times New Roman" w:hAnsi="Times New Roman"/><w:sz w:val="28"/><w:highlight w:val="lightGray"/></w:rPr></w:r>"#
        );
        assert_eq!(font.size().unwrap(), Some(Length::from_pt(14.0)));
        assert_eq!(font.name().as_deref(), Some("Times New Roman"));
        assert_eq!(font.highlight_color().unwrap(), Some(WdColorIndex::Gray25));
    }

    #[test]
    fn test_color_type() {
        let cases = [
            ("<w:r/>", None),
            (r#"<w:r><w:rPr><w:color w:val="auto"/></w:rPr></w:r>"#, Some(WdColorType::Auto)),
            (r#"<w:r><w:rPr><w:color w:val="1A2B3C"/></w:rPr></w:r>"#, Some(WdColorType::Rgb)),
            (
                r#"<w:r><w:rPr><w:color w:val="1A2B3C" w:themeColor="accent2"/></w:rPr></w:r>"#,
                Some(WdColorType::Theme),
            ),
        ];
        for (xml, expected) in cases {
            let (_, font) = font_of(xml);
            assert_eq!(font.color().color_type(), expected, "{}", xml);
        }
    }

    #[test]
    fn test_rgb() {
        let (r, font) = font_of(r#"<w:r><w:rPr><w:color w:val="auto"/></w:rPr></w:r>"#);
        let color = font.color();
        assert_eq!(color.rgb().unwrap(), None);

        color.set_rgb(Some(RGBColor::new(0xAB, 0xCD, 0xEF)));
        assert_eq!(color.rgb().unwrap(), Some(RGBColor::new(0xAB, 0xCD, 0xEF)));
        assert_eq!(r.xml(), r#"<w:r><w:rPr><w:color w:val="ABCDEF"/></w:rPr></w:r>"#);

        color.set_rgb(None);
        assert_eq!(r.xml(), "<w:r><w:rPr/></w:r>");

        let (r, font) = font_of("<w:r/>");
        font.color().set_rgb(None);
        assert_eq!(r.xml(), "<w:r/>");

        let (_, font) = font_of(r#"<w:r><w:rPr><w:color w:val="zz"/></w:rPr></w:r>"#);
        assert!(matches!(font.color().rgb(), Err(OoxmlError::InvalidValue(_))));
    }

    #[test]
    fn test_theme_color() {
        let (_, font) = font_of(r#"<w:r><w:rPr><w:color w:val="FF0000"/></w:rPr></w:r>"#);
        let color = font.color();
        color.set_theme_color(Some(WdThemeColor::Accent6));
        assert_eq!(color.theme_color(), Some(WdThemeColor::Accent6));
        assert_eq!(color.rgb().unwrap(), Some(RGBColor::new(0xFF, 0, 0)));
        color.set_rgb(Some(RGBColor::new(0, 0, 0xFF)));
        assert_eq!(color.theme_color(), None);
    }

    #[test]
    fn test_equality_is_run_identity() {
        let r = Element::new("w:r");
        assert_eq!(Font::new(r.clone()), Font::new(r));
        assert_ne!(Font::new(Element::new("w:r")), Font::new(Element::new("w:r")));
    }
}
