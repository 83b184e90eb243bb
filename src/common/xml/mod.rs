//! XML text helpers.

mod escape;

pub use escape::{escape_attr, escape_xml, unescape_xml};
