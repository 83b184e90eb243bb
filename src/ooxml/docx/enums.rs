//! Enumerations for Word run content and character formatting.
//!
//! This module provides the enumerations used by the run API, matching those
//! found in the VBA API and python-docx.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ooxml::error::{OoxmlError, Result};

/// Specifies the style of underline applied to a run.
///
/// Corresponds to the VBA `WdUnderline` enumeration. `None` and `Single` are
/// members here; the run-level [`Underline`](super::format::Underline) value
/// maps them onto its `Off`/`On` states.
///
/// # Examples
///
/// ```rust
/// use docx_run::ooxml::docx::enums::WdUnderline;
///
/// assert_eq!(WdUnderline::Wavy.to_xml(), "wave");
/// assert_eq!(WdUnderline::from_xml("dashedHeavy"), Some(WdUnderline::DashHeavy));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WdUnderline {
    /// No underline.
    None = 0,
    /// A single line.
    Single = 1,
    /// Underline individual words only.
    Words = 2,
    /// A double line.
    Double = 3,
    /// Dots.
    Dotted = 4,
    /// A single thick line.
    Thick = 6,
    /// Dashes.
    Dash = 7,
    /// Alternating dots and dashes.
    DotDash = 9,
    /// An alternating dot-dot-dash pattern.
    DotDotDash = 10,
    /// A single wavy line.
    Wavy = 11,
    /// Heavy dots.
    DottedHeavy = 20,
    /// Heavy dashes.
    DashHeavy = 23,
    /// Alternating heavy dots and heavy dashes.
    DotDashHeavy = 25,
    /// An alternating heavy dot-dot-dash pattern.
    DotDotDashHeavy = 26,
    /// A heavy wavy line.
    WavyHeavy = 27,
    /// Long dashes.
    DashLong = 39,
    /// A double wavy line.
    WavyDouble = 43,
    /// Long heavy dashes.
    DashLongHeavy = 55,
}

impl WdUnderline {
    /// Every member, in declaration order.
    pub const ALL: [WdUnderline; 18] = [
        Self::None,
        Self::Single,
        Self::Words,
        Self::Double,
        Self::Dotted,
        Self::Thick,
        Self::Dash,
        Self::DotDash,
        Self::DotDotDash,
        Self::Wavy,
        Self::DottedHeavy,
        Self::DashHeavy,
        Self::DotDashHeavy,
        Self::DotDotDashHeavy,
        Self::WavyHeavy,
        Self::DashLong,
        Self::WavyDouble,
        Self::DashLongHeavy,
    ];

    /// Convert the underline style to its `w:u/@w:val` value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Words => "words",
            Self::Double => "double",
            Self::Dotted => "dotted",
            Self::Thick => "thick",
            Self::Dash => "dash",
            Self::DotDash => "dotDash",
            Self::DotDotDash => "dotDotDash",
            Self::Wavy => "wave",
            Self::DottedHeavy => "dottedHeavy",
            Self::DashHeavy => "dashedHeavy",
            Self::DotDashHeavy => "dashDotHeavy",
            Self::DotDotDashHeavy => "dashDotDotHeavy",
            Self::WavyHeavy => "wavyHeavy",
            Self::DashLong => "dashLong",
            Self::WavyDouble => "wavyDouble",
            Self::DashLongHeavy => "dashLongHeavy",
        }
    }

    /// Parse underline style from its XML attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.to_xml() == s)
    }
}

impl FromStr for WdUnderline {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_xml(s).ok_or_else(|| OoxmlError::InvalidValue(format!("'{}' is not a valid WdUnderline", s)))
    }
}

impl fmt::Display for WdUnderline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

/// Specifies the kind of break added by `Run::add_break`.
///
/// Corresponds to the VBA `WdBreakType` enumeration. The section-break
/// members exist in that enumeration but are paragraph-level constructs; a
/// run cannot carry them and rejects them with `InvalidValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WdBreak {
    /// Section break on next page.
    SectionNextPage = 2,
    /// Continuous section break.
    SectionContinuous = 3,
    /// Section break with the next section starting on the next even page.
    SectionEvenPage = 4,
    /// Section break with the next section starting on the next odd page.
    SectionOddPage = 5,
    /// Line break.
    Line = 6,
    /// Page break.
    Page = 7,
    /// Column break.
    Column = 8,
    /// Line break that restarts below floating content on the left.
    LineClearLeft = 9,
    /// Line break that restarts below floating content on the right.
    LineClearRight = 10,
    /// Line break that restarts below all floating content.
    LineClearAll = 11,
}

impl WdBreak {
    /// The `(w:type, w:clear)` attribute pair for a `w:br` element.
    ///
    /// `None` means the attribute is omitted; the schema default for
    /// `w:type` is `textWrapping`, so plain and clearing line breaks do not
    /// write it.
    pub fn br_attributes(self) -> Result<(Option<&'static str>, Option<&'static str>)> {
        match self {
            Self::Line => Ok((None, None)),
            Self::Page => Ok((Some("page"), None)),
            Self::Column => Ok((Some("column"), None)),
            Self::LineClearLeft => Ok((None, Some("left"))),
            Self::LineClearRight => Ok((None, Some("right"))),
            Self::LineClearAll => Ok((None, Some("all"))),
            Self::SectionNextPage | Self::SectionContinuous | Self::SectionEvenPage | Self::SectionOddPage => Err(
                OoxmlError::InvalidValue(format!("{} cannot be added to a run", self)),
            ),
        }
    }
}

impl fmt::Display for WdBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SectionNextPage => write!(f, "Section Next Page"),
            Self::SectionContinuous => write!(f, "Section Continuous"),
            Self::SectionEvenPage => write!(f, "Section Even Page"),
            Self::SectionOddPage => write!(f, "Section Odd Page"),
            Self::Line => write!(f, "Line"),
            Self::Page => write!(f, "Page"),
            Self::Column => write!(f, "Column"),
            Self::LineClearLeft => write!(f, "Line Clear Left"),
            Self::LineClearRight => write!(f, "Line Clear Right"),
            Self::LineClearAll => write!(f, "Line Clear All"),
        }
    }
}

/// Specifies a standard highlight color.
///
/// Corresponds to the VBA `WdColorIndex` enumeration.
///
/// # Examples
///
/// ```rust
/// use docx_run::ooxml::docx::enums::WdColorIndex;
///
/// assert_eq!(WdColorIndex::BrightGreen.to_xml(), "green");
/// assert_eq!(WdColorIndex::from_xml("darkGreen"), Some(WdColorIndex::Green));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WdColorIndex {
    /// Explicitly no highlight.
    NoHighlight = 0,
    /// Automatic color, default for highlighting.
    Auto = 1,
    /// Black color.
    Black = 2,
    /// Blue color.
    Blue = 3,
    /// Turquoise color.
    Turquoise = 4,
    /// Bright green color.
    BrightGreen = 5,
    /// Pink color.
    Pink = 6,
    /// Red color.
    Red = 7,
    /// Yellow color.
    Yellow = 8,
    /// White color.
    White = 9,
    /// Dark blue color.
    DarkBlue = 10,
    /// Teal color.
    Teal = 11,
    /// Green color.
    Green = 12,
    /// Violet color.
    Violet = 13,
    /// Dark red color.
    DarkRed = 14,
    /// Dark yellow color.
    DarkYellow = 15,
    /// 50% shade of gray color.
    Gray50 = 16,
    /// 25% shade of gray color.
    Gray25 = 17,
}

impl WdColorIndex {
    /// Every member, in declaration order.
    pub const ALL: [WdColorIndex; 18] = [
        Self::NoHighlight,
        Self::Auto,
        Self::Black,
        Self::Blue,
        Self::Turquoise,
        Self::BrightGreen,
        Self::Pink,
        Self::Red,
        Self::Yellow,
        Self::White,
        Self::DarkBlue,
        Self::Teal,
        Self::Green,
        Self::Violet,
        Self::DarkRed,
        Self::DarkYellow,
        Self::Gray50,
        Self::Gray25,
    ];

    /// Convert the color index to its `w:highlight/@w:val` value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::NoHighlight => "none",
            Self::Auto => "default",
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Turquoise => "cyan",
            Self::BrightGreen => "green",
            Self::Pink => "magenta",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::DarkBlue => "darkBlue",
            Self::Teal => "darkCyan",
            Self::Green => "darkGreen",
            Self::Violet => "darkMagenta",
            Self::DarkRed => "darkRed",
            Self::DarkYellow => "darkYellow",
            Self::Gray50 => "darkGray",
            Self::Gray25 => "lightGray",
        }
    }

    /// Parse color index from its XML attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.to_xml() == s)
    }
}

impl FromStr for WdColorIndex {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_xml(s).ok_or_else(|| OoxmlError::InvalidValue(format!("'{}' is not a valid WdColorIndex", s)))
    }
}

/// Specifies how a run color is expressed.
///
/// Corresponds to the `MSO_COLOR_TYPE` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WdColorType {
    /// Explicit RGB value.
    Rgb,
    /// Color taken from the document theme.
    Theme,
    /// Application-determined color (`w:val="auto"`).
    Auto,
}

/// Specifies a theme color slot (`ST_ThemeColor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WdThemeColor {
    Dark1,
    Light1,
    Dark2,
    Light2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hyperlink,
    FollowedHyperlink,
    Text1,
    Background1,
    Text2,
    Background2,
}

impl WdThemeColor {
    /// Every member, in declaration order.
    pub const ALL: [WdThemeColor; 16] = [
        Self::Dark1,
        Self::Light1,
        Self::Dark2,
        Self::Light2,
        Self::Accent1,
        Self::Accent2,
        Self::Accent3,
        Self::Accent4,
        Self::Accent5,
        Self::Accent6,
        Self::Hyperlink,
        Self::FollowedHyperlink,
        Self::Text1,
        Self::Background1,
        Self::Text2,
        Self::Background2,
    ];

    /// Convert the theme color to its `w:themeColor` value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Dark1 => "dark1",
            Self::Light1 => "light1",
            Self::Dark2 => "dark2",
            Self::Light2 => "light2",
            Self::Accent1 => "accent1",
            Self::Accent2 => "accent2",
            Self::Accent3 => "accent3",
            Self::Accent4 => "accent4",
            Self::Accent5 => "accent5",
            Self::Accent6 => "accent6",
            Self::Hyperlink => "hyperlink",
            Self::FollowedHyperlink => "followedHyperlink",
            Self::Text1 => "text1",
            Self::Background1 => "background1",
            Self::Text2 => "text2",
            Self::Background2 => "background2",
        }
    }

    /// Parse a theme color from its XML attribute value.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.to_xml() == s)
    }
}

/// Vertical text position (superscript/subscript), stored in `w:vertAlign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerticalPosition {
    /// Normal position
    #[default]
    Baseline,
    /// Superscript
    Superscript,
    /// Subscript
    Subscript,
}

impl VerticalPosition {
    /// Convert to the `w:vertAlign/@w:val` value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Superscript => "superscript",
            Self::Subscript => "subscript",
        }
    }

    /// Parse from the `w:vertAlign/@w:val` value.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "baseline" => Some(Self::Baseline),
            "superscript" => Some(Self::Superscript),
            "subscript" => Some(Self::Subscript),
            _ => None,
        }
    }
}

/// Specifies one of the four style types: paragraph, character, list, or table.
///
/// Corresponds to the VBA `WdStyleType` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum WdStyleType {
    /// Paragraph style.
    #[default]
    Paragraph = 1,
    /// Character style.
    Character = 2,
    /// Table style.
    Table = 3,
    /// List (numbering) style.
    List = 4,
}

impl WdStyleType {
    /// Convert the style type to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Character => "character",
            Self::Table => "table",
            Self::List => "numbering",
        }
    }

    /// Parse style type from XML attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "paragraph" => Some(Self::Paragraph),
            "character" => Some(Self::Character),
            "table" => Some(Self::Table),
            "numbering" => Some(Self::List),
            _ => None,
        }
    }
}

impl fmt::Display for WdStyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paragraph => write!(f, "Paragraph"),
            Self::Character => write!(f, "Character"),
            Self::Table => write!(f, "Table"),
            Self::List => write!(f, "List"),
        }
    }
}
