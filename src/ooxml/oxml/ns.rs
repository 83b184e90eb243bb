//! Namespace prefixes used by WordprocessingML and DrawingML markup.
//!
//! Elements in the tree are named by a canonical `prefix:local` pair, e.g.
//! `w:r`. The parser rewrites whatever prefix a document happens to declare
//! for a known namespace to the canonical prefix below, and the writer emits
//! the matching `xmlns:` declarations when asked to produce a standalone
//! part.

use phf::{Map, phf_map};

/// WordprocessingML main namespace
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// WordprocessingML drawing namespace
pub const WP_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";

/// DrawingML main namespace
pub const A_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// DrawingML picture namespace
pub const PIC_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

/// Office document relationships namespace
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// The reserved `xml` namespace (`xml:space`)
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Canonical prefix → namespace URI.
pub static NAMESPACES: Map<&'static str, &'static str> = phf_map! {
    "a" => A_NS,
    "c" => "http://schemas.openxmlformats.org/drawingml/2006/chart",
    "cp" => "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
    "dc" => "http://purl.org/dc/elements/1.1/",
    "dgm" => "http://schemas.openxmlformats.org/drawingml/2006/diagram",
    "m" => "http://schemas.openxmlformats.org/officeDocument/2006/math",
    "mc" => "http://schemas.openxmlformats.org/markup-compatibility/2006",
    "o" => "urn:schemas-microsoft-com:office:office",
    "pic" => PIC_NS,
    "r" => R_NS,
    "sl" => "http://schemas.openxmlformats.org/schemaLibrary/2006/main",
    "v" => "urn:schemas-microsoft-com:vml",
    "w" => W_NS,
    "w14" => "http://schemas.microsoft.com/office/word/2010/wordml",
    "wp" => WP_NS,
    "wp14" => "http://schemas.microsoft.com/office/word/2010/wordprocessingDrawing",
    "wps" => "http://schemas.microsoft.com/office/word/2010/wordprocessingShape",
    "xml" => XML_NS,
};

/// Namespace URI → canonical prefix.
static PREFIXES: Map<&'static str, &'static str> = phf_map! {
    "http://schemas.openxmlformats.org/drawingml/2006/main" => "a",
    "http://schemas.openxmlformats.org/drawingml/2006/chart" => "c",
    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties" => "cp",
    "http://purl.org/dc/elements/1.1/" => "dc",
    "http://schemas.openxmlformats.org/drawingml/2006/diagram" => "dgm",
    "http://schemas.openxmlformats.org/officeDocument/2006/math" => "m",
    "http://schemas.openxmlformats.org/markup-compatibility/2006" => "mc",
    "urn:schemas-microsoft-com:office:office" => "o",
    "http://schemas.openxmlformats.org/drawingml/2006/picture" => "pic",
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships" => "r",
    "http://schemas.openxmlformats.org/schemaLibrary/2006/main" => "sl",
    "urn:schemas-microsoft-com:vml" => "v",
    "http://schemas.openxmlformats.org/wordprocessingml/2006/main" => "w",
    "http://schemas.microsoft.com/office/word/2010/wordml" => "w14",
    "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" => "wp",
    "http://schemas.microsoft.com/office/word/2010/wordprocessingDrawing" => "wp14",
    "http://schemas.microsoft.com/office/word/2010/wordprocessingShape" => "wps",
    "http://www.w3.org/XML/1998/namespace" => "xml",
};

/// Namespace URI registered for a canonical prefix.
#[inline]
pub fn namespace_uri(prefix: &str) -> Option<&'static str> {
    NAMESPACES.get(prefix).copied()
}

/// Canonical prefix for a namespace URI, if the namespace is known.
#[inline]
pub fn canonical_prefix(uri: &str) -> Option<&'static str> {
    PREFIXES.get(uri).copied()
}

/// Split `prefix:local` into its parts. Unprefixed names yield `None` for the prefix.
#[inline]
pub fn split_qname(name: &str) -> (Option<&str>, &str) {
    match name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, name),
    }
}
