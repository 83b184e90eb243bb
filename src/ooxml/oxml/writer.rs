//! Element tree serialization.

use std::collections::BTreeSet;

use super::element::Element;
use super::ns;
use crate::common::xml::{escape_attr, escape_xml};

/// Options controlling how an element tree is written out.
///
/// # Examples
///
/// ```rust
/// use docx_run::ooxml::oxml::{Element, XmlWriteOptions};
///
/// let r = Element::parse(r#"<w:r><w:t>hi</w:t></w:r>"#)?;
/// assert_eq!(r.xml(), "<w:r><w:t>hi</w:t></w:r>");
///
/// let part = r.to_xml_with(&XmlWriteOptions::part());
/// assert!(part.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
/// assert!(part.contains("xmlns:w=\""));
/// # Ok::<(), docx_run::ooxml::error::OoxmlError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlWriteOptions {
    /// Emit the `<?xml ...?>` declaration
    pub declaration: bool,
    /// Declare every known namespace prefix used in the subtree on the root element
    pub namespace_declarations: bool,
}

impl Default for XmlWriteOptions {
    fn default() -> Self {
        Self::fragment()
    }
}

impl XmlWriteOptions {
    /// Bare markup, as embedded in a larger document. This is the default.
    #[inline]
    pub const fn fragment() -> Self {
        Self {
            declaration: false,
            namespace_declarations: false,
        }
    }

    /// A standalone part: declaration plus namespace declarations.
    #[inline]
    pub const fn part() -> Self {
        Self {
            declaration: true,
            namespace_declarations: true,
        }
    }

    /// Set whether to emit the XML declaration.
    #[inline]
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    /// Set whether to declare namespaces on the root element.
    #[inline]
    pub fn with_namespace_declarations(mut self, declare: bool) -> Self {
        self.namespace_declarations = declare;
        self
    }
}

pub(crate) fn write_element(root: &Element, out: &mut String, options: &XmlWriteOptions) {
    if options.declaration {
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>");
    }

    let declarations = if options.namespace_declarations {
        used_prefixes(root)
    } else {
        BTreeSet::new()
    };
    write_node(root, out, &declarations);
}

fn write_node(element: &Element, out: &mut String, declarations: &BTreeSet<&'static str>) {
    let data = element.data();

    out.push('<');
    out.push_str(&data.tag);

    for prefix in declarations {
        if let Some(uri) = ns::namespace_uri(prefix) {
            out.push_str(" xmlns:");
            out.push_str(prefix);
            out.push_str("=\"");
            out.push_str(uri);
            out.push('"');
        }
    }

    for (key, value) in &data.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }

    if data.children.is_empty() && data.text.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if !data.text.is_empty() {
        out.push_str(&escape_xml(&data.text));
    }
    let no_declarations = BTreeSet::new();
    for child in &data.children {
        write_node(child, out, &no_declarations);
    }
    out.push_str("</");
    out.push_str(&data.tag);
    out.push('>');
}

/// Known prefixes referenced by tags or attribute names in the subtree.
fn used_prefixes(root: &Element) -> BTreeSet<&'static str> {
    let mut prefixes = BTreeSet::new();
    let mut note = |name: &str| {
        if let (Some(prefix), _) = ns::split_qname(name) {
            // `xml` is bound implicitly and must never be declared.
            if prefix != "xml" {
                if let Some((canonical, _)) = ns::NAMESPACES.get_entry(prefix) {
                    prefixes.insert(*canonical);
                }
            }
        }
    };

    let mut stack = vec![root.clone()];
    while let Some(element) = stack.pop() {
        {
            let data = element.data();
            note(&data.tag);
            for (key, _) in &data.attributes {
                note(key);
            }
        }
        stack.extend(element.children());
    }
    prefixes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_escapes_text_and_attributes() {
        let t = Element::new("w:t");
        t.set("w:custom", "a\"b&c");
        t.set_text("1 < 2 & 3 > 2");
        assert_eq!(t.xml(), r#"<w:t w:custom="a&quot;b&amp;c">1 &lt; 2 &amp; 3 &gt; 2</w:t>"#);
    }

    #[test]
    fn test_part_declares_used_namespaces_only() {
        let r = Element::parse(r#"<w:r><w:drawing><wp:inline/></w:drawing><w:t xml:space="preserve"> x</w:t></w:r>"#).unwrap();
        let xml = r.to_xml_with(&XmlWriteOptions::fragment().with_namespace_declarations(true));
        assert_eq!(
            xml,
            format!(
                r#"<w:r xmlns:w="{}" xmlns:wp="{}"><w:drawing><wp:inline/></w:drawing><w:t xml:space="preserve"> x</w:t></w:r>"#,
                ns::W_NS,
                ns::WP_NS
            )
        );
    }

    #[test]
    fn test_empty_elements_self_close() {
        let r = Element::new("w:r");
        r.add_child("w:tab");
        assert_eq!(r.xml(), "<w:r><w:tab/></w:r>");
    }
}
