//! Element tree adapter for WordprocessingML markup.
//!
//! The docx object model does not own a DOM of its own; it reads and
//! rewrites a tree of [`Element`] handles. This module provides that tree:
//!
//! - `element`: the node handle with child/attribute accessors and
//!   schema-ordered insertion
//! - `parser`: XML text → tree (quick-xml), with namespace prefix normalization
//! - `writer`: tree → XML text, as a fragment or a standalone part
//! - `ns`: canonical namespace prefixes
//!
//! # Example
//!
//! ```rust
//! use docx_run::ooxml::oxml::Element;
//!
//! let r = Element::parse(r#"<w:r><w:t>Hello</w:t></w:r>"#)?;
//! r.add_child("w:tab");
//! assert_eq!(r.xml(), "<w:r><w:t>Hello</w:t><w:tab/></w:r>");
//! # Ok::<(), docx_run::ooxml::error::OoxmlError>(())
//! ```
pub mod element;
pub mod ns;
mod parser;
pub mod writer;

pub use element::Element;
pub use writer::XmlWriteOptions;
