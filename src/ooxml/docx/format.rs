//! Formatting values shared by the run and font APIs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::enums::WdUnderline;
use crate::ooxml::error::{OoxmlError, Result};

/// Three-valued state of an on/off character property.
///
/// `Inherit` means the property is not set on the run and is resolved from
/// the style hierarchy; it is distinct from an explicit `Off`.
///
/// # Examples
///
/// ```rust
/// use docx_run::ooxml::docx::format::TriState;
///
/// assert_eq!(TriState::from(true), TriState::On);
/// assert_eq!(TriState::from(None::<bool>), TriState::Inherit);
/// assert_eq!(TriState::Off.to_option(), Some(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TriState {
    /// Explicitly on
    On,
    /// Explicitly off
    Off,
    /// Not set here; resolved from the style hierarchy
    #[default]
    Inherit,
}

impl TriState {
    /// `Some(true)`, `Some(false)` or `None` for `Inherit`.
    #[inline]
    pub const fn to_option(self) -> Option<bool> {
        match self {
            Self::On => Some(true),
            Self::Off => Some(false),
            Self::Inherit => None,
        }
    }

    /// Whether the value is explicitly `On`.
    #[inline]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Whether the value is `Inherit`.
    #[inline]
    pub const fn is_inherit(self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Inherit, Self::from)
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        value.to_option()
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "on"),
            Self::Off => write!(f, "off"),
            Self::Inherit => write!(f, "inherit"),
        }
    }
}

/// Underline applied to a run.
///
/// `On` is the plain single underline and `Off` is an explicit `none`.
/// `Style(WdUnderline::Single)` and `Style(WdUnderline::None)` are accepted
/// and compare equal to `On` and `Off`; the constructors and `FromStr`
/// normalize them.
///
/// # Examples
///
/// ```rust
/// use docx_run::ooxml::docx::enums::WdUnderline;
/// use docx_run::ooxml::docx::format::Underline;
///
/// assert_eq!("single".parse::<Underline>()?, Underline::On);
/// assert_eq!("wave".parse::<Underline>()?, Underline::Style(WdUnderline::Wavy));
/// assert_eq!(Underline::from(WdUnderline::None), Underline::Off);
/// assert!("maybe".parse::<Underline>().is_err());
/// # Ok::<(), docx_run::ooxml::error::OoxmlError>(())
/// ```
#[derive(Debug, Clone, Copy, Eq, Default, Serialize, Deserialize)]
pub enum Underline {
    /// Not set here; resolved from the style hierarchy
    #[default]
    Inherit,
    /// Explicitly no underline (`none`)
    Off,
    /// Plain single underline (`single`)
    On,
    /// A named underline style
    Style(WdUnderline),
}

impl Underline {
    /// Collapse `Style(Single)`/`Style(None)` onto `On`/`Off`.
    #[inline]
    pub const fn normalized(self) -> Self {
        match self {
            Self::Style(WdUnderline::Single) => Self::On,
            Self::Style(WdUnderline::None) => Self::Off,
            other => other,
        }
    }

    /// The `w:u/@w:val` literal, or `None` for `Inherit`.
    pub const fn to_xml(self) -> Option<&'static str> {
        match self.normalized() {
            Self::Inherit => None,
            Self::Off => Some(WdUnderline::None.to_xml()),
            Self::On => Some(WdUnderline::Single.to_xml()),
            Self::Style(style) => Some(style.to_xml()),
        }
    }

    /// Decode a stored `w:u/@w:val` literal.
    pub fn from_xml(value: &str) -> Result<Self> {
        WdUnderline::from_xml(value)
            .map(Self::from)
            .ok_or_else(|| OoxmlError::InvalidValue(format!("'{}' is not a valid underline value", value)))
    }
}

impl PartialEq for Underline {
    fn eq(&self, other: &Self) -> bool {
        match (self.normalized(), other.normalized()) {
            (Self::Inherit, Self::Inherit) | (Self::Off, Self::Off) | (Self::On, Self::On) => true,
            (Self::Style(a), Self::Style(b)) => a == b,
            _ => false,
        }
    }
}

impl std::hash::Hash for Underline {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self.normalized() {
            Self::Inherit => 0u8.hash(state),
            Self::Off => 1u8.hash(state),
            Self::On => 2u8.hash(state),
            Self::Style(style) => {
                3u8.hash(state);
                style.hash(state);
            },
        }
    }
}

impl From<WdUnderline> for Underline {
    fn from(style: WdUnderline) -> Self {
        Self::Style(style).normalized()
    }
}

impl From<bool> for Underline {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<Option<bool>> for Underline {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Inherit, Self::from)
    }
}

impl From<TriState> for Underline {
    fn from(value: TriState) -> Self {
        Self::from(value.to_option())
    }
}

impl FromStr for Underline {
    type Err = OoxmlError;

    /// Parse an underline literal; `inherit` maps to [`Underline::Inherit`].
    fn from_str(s: &str) -> Result<Self> {
        if s == "inherit" {
            return Ok(Self::Inherit);
        }
        Self::from_xml(s)
    }
}

impl fmt::Display for Underline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml().unwrap_or("inherit"))
    }
}
