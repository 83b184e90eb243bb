//! Run property (`w:rPr`) codec.
//!
//! On/off flags such as `<w:b/>` are read and written with three-valued
//! semantics: the element may be absent (inherit), present without a value
//! (on), or present with a `w:val` literal. Every child inserted here lands
//! at its schema position within `w:rPr`, so documents stay valid for
//! consumers that check sequence order.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use super::enums::{VerticalPosition, WdColorIndex, WdThemeColor};
use super::format::{TriState, Underline};
use crate::common::style::{Length, RGBColor};
use crate::common::unit::{EMUS_PER_PT, parse_universal_measure};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::Element;

pub(crate) const RPR: &str = "w:rPr";
const VAL: &str = "w:val";

/// `CT_RPr` child sequence.
static RPR_ORDER: [&str; 39] = [
    "w:rStyle",
    "w:rFonts",
    "w:b",
    "w:bCs",
    "w:i",
    "w:iCs",
    "w:caps",
    "w:smallCaps",
    "w:strike",
    "w:dstrike",
    "w:outline",
    "w:shadow",
    "w:emboss",
    "w:imprint",
    "w:noProof",
    "w:snapToGrid",
    "w:vanish",
    "w:webHidden",
    "w:color",
    "w:spacing",
    "w:w",
    "w:kern",
    "w:position",
    "w:sz",
    "w:szCs",
    "w:highlight",
    "w:u",
    "w:effect",
    "w:bdr",
    "w:shd",
    "w:fitText",
    "w:vertAlign",
    "w:rtl",
    "w:cs",
    "w:em",
    "w:lang",
    "w:eastAsianLayout",
    "w:specVanish",
    "w:oMath",
];

/// Tags that must follow `tag` inside `w:rPr`.
///
/// Unknown tags have no successors and are appended.
fn rpr_successors(tag: &str) -> &'static [&'static str] {
    match RPR_ORDER.iter().position(|known| *known == tag) {
        Some(index) => &RPR_ORDER[index + 1..],
        None => &[],
    }
}

/// Create a `tag` child of `rpr` at its schema position, carrying `attributes`.
pub(crate) fn add_rpr_child(rpr: &Element, tag: &str, attributes: &[(&str, &str)]) -> Element {
    let child = rpr.insert_child_before_any(tag, rpr_successors(tag));
    for (name, value) in attributes {
        child.set(name, value);
    }
    child
}

/// First `tag` child of `rpr`, created at its schema position if missing.
pub(crate) fn get_or_add_rpr_child(rpr: &Element, tag: &str) -> Element {
    if let Some(existing) = rpr.first_child(tag) {
        return existing;
    }
    add_rpr_child(rpr, tag, &[])
}

/// The run's `w:rPr`, if present.
#[inline]
pub(crate) fn rpr(r: &Element) -> Option<Element> {
    r.first_child(RPR)
}

/// The run's `w:rPr`, created as its first child if missing.
pub(crate) fn get_or_add_rpr(r: &Element) -> Element {
    if let Some(existing) = r.first_child(RPR) {
        return existing;
    }
    debug!("adding w:rPr to {}", r.tag());
    r.insert_child(0, RPR)
}

// -------------------------------------------------------------------------
// on/off codec

/// Decode an `ST_OnOff` literal.
///
/// # Examples
///
/// ```rust
/// use docx_run::ooxml::docx::props::parse_on_off;
///
/// assert!(parse_on_off("TRUE")?);
/// assert!(!parse_on_off("off")?);
/// assert!(parse_on_off("maybe").is_err());
/// # Ok::<(), docx_run::ooxml::error::OoxmlError>(())
/// ```
pub fn parse_on_off(value: &str) -> Result<bool> {
    let value = value.trim();
    if ["1", "true", "on"].iter().any(|v| value.eq_ignore_ascii_case(v)) {
        Ok(true)
    } else if ["0", "false", "off"].iter().any(|v| value.eq_ignore_ascii_case(v)) {
        Ok(false)
    } else {
        Err(OoxmlError::InvalidValue(format!("'{}' is not a valid on/off value", value)))
    }
}

/// Read the on/off flag `tag` from `container`.
///
/// A missing container reads the same as a container without the flag.
pub fn get_tristate(container: Option<&Element>, tag: &str) -> Result<TriState> {
    let Some(flag) = container.and_then(|c| c.first_child(tag)) else {
        return Ok(TriState::Inherit);
    };
    match flag.get(VAL) {
        None => Ok(TriState::On),
        Some(value) => parse_on_off(&value).map(TriState::from),
    }
}

/// Write the on/off flag `tag` into `w:rPr` container `rpr`.
pub fn set_tristate(rpr: &Element, tag: &str, value: TriState) {
    match value {
        TriState::Inherit => rpr.remove_all(&[tag]),
        TriState::On => {
            get_or_add_rpr_child(rpr, tag).remove_attribute(VAL);
        },
        TriState::Off => get_or_add_rpr_child(rpr, tag).set(VAL, "0"),
    }
}

// -------------------------------------------------------------------------
// named flags

/// On/off character properties supported on a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoolProperty {
    AllCaps,
    Bold,
    ComplexScript,
    CsBold,
    CsItalic,
    DoubleStrike,
    Emboss,
    Hidden,
    Imprint,
    Italic,
    Math,
    NoProof,
    Outline,
    Rtl,
    Shadow,
    SmallCaps,
    SnapToGrid,
    SpecVanish,
    Strike,
    WebHidden,
}

impl BoolProperty {
    /// Every supported flag.
    pub const ALL: [BoolProperty; 20] = [
        Self::AllCaps,
        Self::Bold,
        Self::ComplexScript,
        Self::CsBold,
        Self::CsItalic,
        Self::DoubleStrike,
        Self::Emboss,
        Self::Hidden,
        Self::Imprint,
        Self::Italic,
        Self::Math,
        Self::NoProof,
        Self::Outline,
        Self::Rtl,
        Self::Shadow,
        Self::SmallCaps,
        Self::SnapToGrid,
        Self::SpecVanish,
        Self::Strike,
        Self::WebHidden,
    ];

    /// Qualified tag of the flag element inside `w:rPr`.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::AllCaps => "w:caps",
            Self::Bold => "w:b",
            Self::ComplexScript => "w:cs",
            Self::CsBold => "w:bCs",
            Self::CsItalic => "w:iCs",
            Self::DoubleStrike => "w:dstrike",
            Self::Emboss => "w:emboss",
            Self::Hidden => "w:vanish",
            Self::Imprint => "w:imprint",
            Self::Italic => "w:i",
            Self::Math => "w:oMath",
            Self::NoProof => "w:noProof",
            Self::Outline => "w:outline",
            Self::Rtl => "w:rtl",
            Self::Shadow => "w:shadow",
            Self::SmallCaps => "w:smallCaps",
            Self::SnapToGrid => "w:snapToGrid",
            Self::SpecVanish => "w:specVanish",
            Self::Strike => "w:strike",
            Self::WebHidden => "w:webHidden",
        }
    }

    /// Snake-case property name, e.g. `all_caps`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AllCaps => "all_caps",
            Self::Bold => "bold",
            Self::ComplexScript => "complex_script",
            Self::CsBold => "cs_bold",
            Self::CsItalic => "cs_italic",
            Self::DoubleStrike => "double_strike",
            Self::Emboss => "emboss",
            Self::Hidden => "hidden",
            Self::Imprint => "imprint",
            Self::Italic => "italic",
            Self::Math => "math",
            Self::NoProof => "no_proof",
            Self::Outline => "outline",
            Self::Rtl => "rtl",
            Self::Shadow => "shadow",
            Self::SmallCaps => "small_caps",
            Self::SnapToGrid => "snap_to_grid",
            Self::SpecVanish => "spec_vanish",
            Self::Strike => "strike",
            Self::WebHidden => "web_hidden",
        }
    }
}

impl FromStr for BoolProperty {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|prop| prop.name() == s)
            .ok_or_else(|| OoxmlError::InvalidValue(format!("'{}' is not a run boolean property", s)))
    }
}

impl fmt::Display for BoolProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -------------------------------------------------------------------------
// typed accessors

fn child_val(rpr: Option<&Element>, tag: &str) -> Option<String> {
    rpr.and_then(|rpr| rpr.first_child(tag)).and_then(|child| child.get(VAL))
}

/// `w:rStyle/@w:val`.
pub(crate) fn style_id(rpr: Option<&Element>) -> Option<String> {
    child_val(rpr, "w:rStyle")
}

pub(crate) fn set_style_id(rpr: &Element, style_id: Option<&str>) {
    match style_id {
        None => rpr.remove_all(&["w:rStyle"]),
        Some(id) => get_or_add_rpr_child(rpr, "w:rStyle").set(VAL, id),
    }
}

/// `w:u/@w:val`. A bare `w:u` carries no information and reads as inherit.
pub(crate) fn underline(rpr: Option<&Element>) -> Result<Underline> {
    match child_val(rpr, "w:u") {
        None => Ok(Underline::Inherit),
        Some(value) => Underline::from_xml(&value),
    }
}

pub(crate) fn set_underline(rpr: &Element, value: Underline) {
    rpr.remove_all(&["w:u"]);
    if let Some(literal) = value.to_xml() {
        add_rpr_child(rpr, "w:u", &[(VAL, literal)]);
    }
}

/// `w:rFonts/@w:ascii`.
pub(crate) fn font_name(rpr: Option<&Element>) -> Option<String> {
    rpr.and_then(|rpr| rpr.first_child("w:rFonts")).and_then(|fonts| fonts.get("w:ascii"))
}

pub(crate) fn set_font_name(rpr: &Element, name: Option<&str>) {
    match name {
        None => {
            if let Some(fonts) = rpr.first_child("w:rFonts") {
                fonts.remove_attribute("w:ascii");
                fonts.remove_attribute("w:hAnsi");
                if fonts.attributes().is_empty() {
                    rpr.remove(&fonts);
                }
            }
        },
        Some(name) => {
            let fonts = get_or_add_rpr_child(rpr, "w:rFonts");
            fonts.set("w:ascii", name);
            fonts.set("w:hAnsi", name);
        },
    }
}

/// Decode an `ST_HpsMeasure`: half-points, or a universal measure.
pub(crate) fn parse_hps_measure(value: &str) -> Result<Length> {
    if let Some(emus) = parse_universal_measure(value) {
        return emus.map(Length::from_emus);
    }
    let half_points: i64 = value
        .trim()
        .parse()
        .map_err(|_| OoxmlError::InvalidValue(format!("'{}' is not a valid font size", value)))?;
    half_points
        .checked_mul(EMUS_PER_PT)
        .map(|emus| Length::from_emus(emus / 2))
        .ok_or_else(|| OoxmlError::InvalidValue(format!("font size '{}' is out of range", value)))
}

/// `w:sz/@w:val` as a length.
pub(crate) fn size(rpr: Option<&Element>) -> Result<Option<Length>> {
    child_val(rpr, "w:sz").map(|value| parse_hps_measure(&value)).transpose()
}

pub(crate) fn set_size(rpr: &Element, size: Option<Length>) {
    rpr.remove_all(&["w:sz"]);
    if let Some(size) = size {
        let half_points = (size.pt() * 2.0).round() as i64;
        add_rpr_child(rpr, "w:sz", &[(VAL, half_points.to_string().as_str())]);
    }
}

/// `w:highlight/@w:val`.
pub(crate) fn highlight(rpr: Option<&Element>) -> Result<Option<WdColorIndex>> {
    child_val(rpr, "w:highlight")
        .map(|value| value.parse::<WdColorIndex>())
        .transpose()
}

pub(crate) fn set_highlight(rpr: &Element, value: Option<WdColorIndex>) {
    match value {
        None => rpr.remove_all(&["w:highlight"]),
        Some(index) => get_or_add_rpr_child(rpr, "w:highlight").set(VAL, index.to_xml()),
    }
}

/// Raw `w:color/@w:val`, `auto` included.
pub(crate) fn color_val(rpr: Option<&Element>) -> Option<String> {
    child_val(rpr, "w:color")
}

/// `w:color/@w:themeColor`.
pub(crate) fn theme_color(rpr: Option<&Element>) -> Option<WdThemeColor> {
    rpr.and_then(|rpr| rpr.first_child("w:color"))
        .and_then(|color| color.get("w:themeColor"))
        .and_then(|value| WdThemeColor::from_xml(&value))
}

/// Replace `w:color` with an explicit RGB value, dropping any theme color.
pub(crate) fn set_color_rgb(rpr: &Element, rgb: RGBColor) {
    rpr.remove_all(&["w:color"]);
    add_rpr_child(rpr, "w:color", &[(VAL, rgb.to_hex().as_str())]);
}

/// Replace `w:color` with a theme color; `w:val` is required by the schema.
pub(crate) fn set_color_theme(rpr: &Element, theme: WdThemeColor) {
    let val = color_val(Some(rpr)).unwrap_or_else(|| "000000".to_string());
    rpr.remove_all(&["w:color"]);
    add_rpr_child(rpr, "w:color", &[(VAL, val.as_str()), ("w:themeColor", theme.to_xml())]);
}

pub(crate) fn remove_color(rpr: &Element) {
    rpr.remove_all(&["w:color"]);
}

/// `w:vertAlign/@w:val`.
pub(crate) fn vertical_position(rpr: Option<&Element>) -> Result<Option<VerticalPosition>> {
    child_val(rpr, "w:vertAlign")
        .map(|value| {
            VerticalPosition::from_xml(&value)
                .ok_or_else(|| OoxmlError::InvalidValue(format!("'{}' is not a valid vertical alignment", value)))
        })
        .transpose()
}

pub(crate) fn set_vertical_position(rpr: &Element, value: Option<VerticalPosition>) {
    match value {
        None => rpr.remove_all(&["w:vertAlign"]),
        Some(position) => get_or_add_rpr_child(rpr, "w:vertAlign").set(VAL, position.to_xml()),
    }
}
