//! Word (.docx) run content model.
//!
//! This module provides reading and editing of runs (`<w:r>`) in
//! WordprocessingML: character formatting with tri-state semantics, text
//! with tabs and breaks, rendered page breaks and inline pictures.
//!
//! # Architecture
//!
//! The module is organized around these key types:
//! - `Run`: A text run with formatting and inline content
//! - `Font`: Character formatting view over a run
//! - `InnerContent`: Text segments, page break markers and drawings of a run
//! - `Drawing`: A `<w:drawing>` with its story part
//! - `StoryPart`: Style resolution and image registration provided by the
//!   containing part
//!
//! # Example
//!
//! ```rust
//! use docx_run::ooxml::docx::{InnerContent, Run};
//! use docx_run::ooxml::oxml::Element;
//!
//! let r = Element::parse(
//!     r#"<w:r><w:t>abc</w:t><w:br w:type="page"/><w:lastRenderedPageBreak/><w:noBreakHyphen/><w:t>def</w:t></w:r>"#,
//! )?;
//! let run = Run::new(r, None);
//!
//! assert_eq!(run.text(), "abcdef");
//! assert!(run.contains_page_break());
//! for item in run.iter_inner_content() {
//!     match item {
//!         InnerContent::Text(text) => println!("text: {}", text),
//!         InnerContent::PageBreak(_) => println!("page ended here"),
//!         InnerContent::Drawing(drawing) => println!("picture: {}", drawing.has_picture()),
//!     }
//! }
//! # Ok::<(), docx_run::ooxml::error::OoxmlError>(())
//! ```
pub mod config;
pub mod content;
pub mod drawing;
pub mod enums;
pub mod font;
pub mod format;
pub mod parts;
pub mod props;
pub mod run;
pub mod shape;
pub mod styles;

pub use config::{RunOptions, WhitespacePolicy};
pub use content::{InlineKind, InnerContent, InnerContentIter};
pub use drawing::{Drawing, RenderedPageBreak};
pub use font::{ColorFormat, Font};
pub use format::{TriState, Underline};
pub use parts::{ImageSource, StoryPart};
pub use props::BoolProperty;
pub use run::{Run, Text};
pub use shape::InlineShape;
pub use styles::{BaseStyle, StyleRef};
