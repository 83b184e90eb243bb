//! docx-run - run content model for Office Open XML word-processing documents
//!
//! This library loads WordprocessingML run markup into an editable element
//! tree and exposes runs (`<w:r>`) through a typed API.
//!
//! # Features
//!
//! - **Tri-state formatting**: on/off/inherit character properties, never
//!   collapsing "inherit" into "off"
//! - **Underline, size, color, highlight**: typed accessors through [`Font`]
//! - **Inner content**: text, tabs, breaks, rendered page breaks and drawings
//!   as an ordered, typed sequence
//! - **Text round-trip**: `set_text` re-derives `w:tab`/`w:br` from `\t`,
//!   `\n` and `\r`
//! - **Schema order**: new `w:rPr` children land at their sequence position
//!
//! # Example - Editing a run
//!
//! ```
//! use docx_run::{Element, Run, TriState, Underline};
//! use docx_run::ooxml::docx::enums::WdUnderline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let run = Run::new(Element::parse("<w:r><w:t>Hello</w:t></w:r>")?, None);
//!
//! run.set_bool_property("bold", true)?;
//! run.set_underline(WdUnderline::Double);
//! assert_eq!(run.get_bool_property("bold")?, TriState::On);
//! assert_eq!(run.underline()?, Underline::Style(WdUnderline::Double));
//!
//! run.set_text("Hello\tworld");
//! assert_eq!(
//!     run.element().xml(),
//!     r#"<w:r><w:rPr><w:b/><w:u w:val="double"/></w:rPr><w:t>Hello</w:t><w:tab/><w:t>world</w:t></w:r>"#
//! );
//! # Ok(())
//! # }
//! ```

/// Shared value types: lengths, colors, unit conversion and XML escaping.
pub mod common;

/// OOXML (Office Open XML) element tree and run model
///
/// This module provides the element tree (`oxml`) and the WordprocessingML
/// run API (`docx`).
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Length, RGBColor};
pub use ooxml::docx::{Font, InnerContent, Run, TriState, Underline};
pub use ooxml::oxml::Element;
pub use ooxml::{OoxmlError, Result};
