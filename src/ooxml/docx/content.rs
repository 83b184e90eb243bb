//! Inline content of a run.
//!
//! The children of `w:r` after its optional `w:rPr` are classified into a
//! closed set of [`InlineKind`]s. Text-like kinds contribute characters to
//! the run's logical text; page-break markers and drawings are items of
//! their own. [`InnerContentIter`] condenses every maximal stretch of
//! text-like children into a single [`InnerContent::Text`].

use std::iter::FusedIterator;
use std::rc::Weak;

use log::trace;
use phf::phf_map;

use super::config::WhitespacePolicy;
use super::drawing::{Drawing, RenderedPageBreak};
use super::parts::StoryPart;
use crate::ooxml::oxml::Element;

/// Kind of a recognized run child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    /// `w:t`
    Text,
    /// `w:tab`
    Tab,
    /// `w:ptab`
    PositionalTab,
    /// `w:br`
    Break,
    /// `w:cr`
    CarriageReturn,
    /// `w:noBreakHyphen`
    NoBreakHyphen,
    /// `w:lastRenderedPageBreak`
    RenderedPageBreak,
    /// `w:drawing`
    Drawing,
}

static INLINE_KINDS: phf::Map<&'static str, InlineKind> = phf_map! {
    "w:t" => InlineKind::Text,
    "w:tab" => InlineKind::Tab,
    "w:ptab" => InlineKind::PositionalTab,
    "w:br" => InlineKind::Break,
    "w:cr" => InlineKind::CarriageReturn,
    "w:noBreakHyphen" => InlineKind::NoBreakHyphen,
    "w:lastRenderedPageBreak" => InlineKind::RenderedPageBreak,
    "w:drawing" => InlineKind::Drawing,
};

impl InlineKind {
    /// Classify a run child; `None` for `w:rPr` and unrecognized markup.
    pub fn of(element: &Element) -> Option<Self> {
        INLINE_KINDS.get(element.tag().as_str()).copied()
    }

    /// Whether children of this kind belong to the logical text stream.
    pub const fn is_text_like(self) -> bool {
        match self {
            Self::Text | Self::Tab | Self::PositionalTab | Self::Break | Self::CarriageReturn | Self::NoBreakHyphen => {
                true
            },
            Self::RenderedPageBreak | Self::Drawing => false,
        }
    }
}

/// Characters `element` of kind `kind` contributes to the run text.
///
/// Only line breaks count as `"\n"`; page and column breaks are layout
/// instructions and contribute nothing.
pub(crate) fn push_text(kind: InlineKind, element: &Element, out: &mut String) {
    match kind {
        InlineKind::Text => out.push_str(&element.text()),
        InlineKind::Tab | InlineKind::PositionalTab => out.push('\t'),
        InlineKind::Break => {
            let is_line_break = element.get("w:type").is_none_or(|kind| kind == "textWrapping");
            if is_line_break {
                out.push('\n');
            }
        },
        InlineKind::CarriageReturn => out.push('\n'),
        InlineKind::NoBreakHyphen | InlineKind::RenderedPageBreak | InlineKind::Drawing => {},
    }
}

/// An item of a run's inner content.
#[derive(Debug, Clone, PartialEq)]
pub enum InnerContent {
    /// Text of one maximal stretch of text-like children
    Text(String),
    /// A `w:lastRenderedPageBreak` marker
    PageBreak(RenderedPageBreak),
    /// A `w:drawing`
    Drawing(Drawing),
}

impl InnerContent {
    /// The text, for [`InnerContent::Text`] items.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::PageBreak(_) | Self::Drawing(_) => None,
        }
    }

    /// Whether this is a rendered page break marker.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Self::PageBreak(_))
    }

    /// Whether this is a drawing.
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing(_))
    }
}

/// Lazy, single-pass iterator over a run's inner content.
///
/// Works over the child list as it was when iteration started; children
/// added or removed afterwards are not observed.
pub struct InnerContentIter {
    children: std::vec::IntoIter<Element>,
    part: Option<Weak<dyn StoryPart>>,
    pending: Option<InnerContent>,
}

impl InnerContentIter {
    pub(crate) fn new(r: &Element, part: Option<Weak<dyn StoryPart>>) -> Self {
        Self {
            children: r.children().into_iter(),
            part,
            pending: None,
        }
    }
}

impl Iterator for InnerContentIter {
    type Item = InnerContent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }

        let mut text = String::new();
        let mut accumulated = 0usize;

        for child in self.children.by_ref() {
            let Some(kind) = InlineKind::of(&child) else {
                continue;
            };
            let item = match kind {
                InlineKind::Text
                | InlineKind::Tab
                | InlineKind::PositionalTab
                | InlineKind::Break
                | InlineKind::CarriageReturn
                | InlineKind::NoBreakHyphen => {
                    push_text(kind, &child, &mut text);
                    accumulated += 1;
                    continue;
                },
                InlineKind::RenderedPageBreak => InnerContent::PageBreak(RenderedPageBreak::new(child, self.part.clone())),
                InlineKind::Drawing => InnerContent::Drawing(Drawing::new(child, self.part.clone())),
            };

            if accumulated == 0 {
                trace!("inner content: {:?}", item);
                return Some(item);
            }
            self.pending = Some(item);
            trace!("inner content: text segment of {} children", accumulated);
            return Some(InnerContent::Text(text));
        }

        (accumulated > 0).then_some(InnerContent::Text(text))
    }
}

impl FusedIterator for InnerContentIter {}

/// Append a `w:t` holding `text` to run `r`, marked per `policy`.
pub(crate) fn add_t(r: &Element, text: &str, policy: WhitespacePolicy) -> Element {
    let t = r.add_child("w:t");
    t.set_text(text);
    if policy.preserves(text) {
        t.set("xml:space", "preserve");
    }
    t
}

/// Append `text` to run `r`, translating `\t` to `w:tab` and each `\n` or
/// `\r` to `w:br`. Other characters accumulate into `w:t` elements.
pub(crate) fn append_text(r: &Element, text: &str, policy: WhitespacePolicy) {
    let mut pending = String::new();
    let flush = |pending: &mut String| {
        if !pending.is_empty() {
            add_t(r, pending, policy);
            pending.clear();
        }
    };

    for ch in text.chars() {
        match ch {
            '\t' => {
                flush(&mut pending);
                r.add_child("w:tab");
            },
            '\n' | '\r' => {
                flush(&mut pending);
                r.add_child("w:br");
            },
            _ => pending.push(ch),
        }
    }
    flush(&mut pending);
}
