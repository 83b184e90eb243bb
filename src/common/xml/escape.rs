use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Static initialization: automata are built only once, thread-safe
static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">"])
        .expect("Failed to build XML text escaper")
});

static ATTR_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\""])
        .expect("Failed to build XML attribute escaper")
});

// Use LeftmostLongest to ensure longer entities are matched first (e.g., &amp; instead of &lt;)
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape character data for use between tags.
///
/// # Examples
///
/// ```
/// use docx_run::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;\"hi\"&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;"])
}

/// Escape a value for use inside a double-quoted attribute.
///
/// ```
/// use docx_run::common::xml::escape_attr;
/// assert_eq!(escape_attr("say \"hi\" & go"), "say &quot;hi&quot; &amp; go");
/// ```
#[inline]
pub fn escape_attr(s: &str) -> String {
    ATTR_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;"])
}

/// Unescape XML special characters.
///
/// Replaces the five standard XML entities with their corresponding characters.
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use docx_run::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&quot;hello&apos;"), "\"hello'");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;"); // &amp; is matched first
/// assert_eq!(unescape_xml("a & b"), "a & b"); // unchanged
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;"); // unknown entity
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}
