//! Style references used by runs.
//!
//! Style definitions live in the styles part, which is not modeled here. A
//! [`StoryPart`](super::parts::StoryPart) resolves ids to [`BaseStyle`]
//! values and turns a [`StyleRef`] back into the id stored in `w:rStyle`.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ooxml::docx::enums::WdStyleType;

/// A single style definition, as seen from a run.
///
/// Represents the identifying part of a `<w:style>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseStyle {
    /// Style identifier (required)
    style_id: String,
    /// UI-visible name
    name: Option<String>,
    /// Type of style (paragraph, character, table, or list)
    style_type: WdStyleType,
    /// Whether this is the default style for its type
    is_default: bool,
    /// ID of the style this is based on
    based_on: Option<String>,
}

impl BaseStyle {
    /// Create a style with the given id and type.
    pub fn new(style_id: impl Into<String>, style_type: WdStyleType) -> Self {
        Self {
            style_id: style_id.into(),
            name: None,
            style_type,
            is_default: false,
            based_on: None,
        }
    }

    /// Set the UI name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark the style as the default for its type.
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Set the id of the style this one is based on.
    pub fn with_based_on(mut self, style_id: impl Into<String>) -> Self {
        self.based_on = Some(style_id.into());
        self
    }

    /// Get the style identifier.
    #[inline]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    /// Get the style name.
    ///
    /// Returns `None` if no name is defined.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the style type.
    #[inline]
    pub fn style_type(&self) -> WdStyleType {
        self.style_type
    }

    /// Check if this is the default style for its type.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Get the ID of the style this is based on.
    #[inline]
    pub fn based_on(&self) -> Option<&str> {
        self.based_on.as_deref()
    }

    /// Whether `reference` denotes this style, by UI name or by identity.
    pub fn matches(&self, reference: StyleRef<'_>) -> bool {
        match reference {
            StyleRef::Name(name) => self.name.as_deref() == Some(name),
            StyleRef::Style(style) => style.style_id == self.style_id && style.style_type == self.style_type,
        }
    }
}

/// A style given either by UI name or as a resolved style object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRef<'a> {
    /// UI name such as `"Emphasis"`
    Name(&'a str),
    /// A style obtained from the styles part
    Style(&'a BaseStyle),
}

impl<'a> From<&'a str> for StyleRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a BaseStyle> for StyleRef<'a> {
    fn from(style: &'a BaseStyle) -> Self {
        Self::Style(style)
    }
}

impl fmt::Display for StyleRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}", name),
            Self::Style(style) => write!(f, "{}", style.style_id()),
        }
    }
}
