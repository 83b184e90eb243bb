//! XML text → element tree.
//!
//! Prefixes bound to a known namespace are rewritten to their canonical
//! form, so `<x:r xmlns:x="...wordprocessingml/2006/main">` loads as `w:r`.
//! Undeclared prefixes are kept verbatim, which lets unit tests and callers
//! load bare fragments such as `<w:r><w:t>a</w:t></w:r>`.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::element::Element;
use super::ns;
use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};

type Scope = Vec<(String, String)>;

struct OpenElement {
    element: Element,
    text: String,
}

pub(crate) fn parse(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<OpenElement> = Vec::with_capacity(16);
    let mut scopes: Vec<Scope> = Vec::with_capacity(16);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let (element, scope) = open_element(&reader, &e, &scopes)?;
                scopes.push(scope);
                stack.push(OpenElement {
                    element,
                    text: String::new(),
                });
            },
            Ok(Event::Empty(e)) => {
                let (element, _) = open_element(&reader, &e, &scopes)?;
                match stack.last() {
                    Some(parent) => parent.element.append(&element)?,
                    None => return Ok(element),
                }
            },
            Ok(Event::End(_)) => {
                scopes.pop();
                let Some(open) = stack.pop() else {
                    return Err(OoxmlError::Xml("unbalanced end tag".to_string()));
                };
                let has_children = open.element.child_count() > 0;
                if !has_children || !open.text.trim().is_empty() {
                    open.element.set_text(&open.text);
                }
                match stack.last() {
                    Some(parent) => parent.element.append(&open.element)?,
                    None => return Ok(open.element),
                }
            },
            Ok(Event::Text(e)) => {
                if let Some(open) = stack.last_mut() {
                    let raw = std::str::from_utf8(e.as_ref())
                        .map_err(|_| OoxmlError::Xml("Invalid UTF-8 in text content".to_string()))?;
                    open.text.push_str(&unescape_xml(raw));
                }
            },
            Ok(Event::CData(e)) => {
                if let Some(open) = stack.last_mut() {
                    let raw = std::str::from_utf8(e.as_ref())
                        .map_err(|_| OoxmlError::Xml("Invalid UTF-8 in CDATA".to_string()))?;
                    open.text.push_str(raw);
                }
            },
            Ok(Event::GeneralRef(e)) => {
                if let Some(open) = stack.last_mut() {
                    let name = std::str::from_utf8(e.as_ref())
                        .map_err(|_| OoxmlError::Xml("Invalid UTF-8 in entity reference".to_string()))?;
                    let resolved = resolve_reference(name)
                        .ok_or_else(|| OoxmlError::Xml(format!("unknown entity '&{};'", name)))?;
                    open.text.push(resolved);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    Err(OoxmlError::Xml("No root element found".to_string()))
}

fn open_element(reader: &Reader<&[u8]>, e: &BytesStart<'_>, scopes: &[Scope]) -> Result<(Element, Scope)> {
    let mut scope = Scope::new();
    let mut attributes = Vec::new();

    for attr in e.attributes() {
        let attr = attr.map_err(|err| OoxmlError::Xml(err.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|_| OoxmlError::Xml("Invalid UTF-8 in attribute key".to_string()))?
            .to_string();
        let value = attr
            .decode_and_unescape_value(reader.decoder())
            .map_err(|err| OoxmlError::Xml(err.to_string()))?
            .into_owned();

        if key == "xmlns" {
            scope.push((String::new(), value));
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            // Declarations of known namespaces are re-emitted by the writer.
            if ns::canonical_prefix(&value).is_none() {
                attributes.push((key.clone(), value.clone()));
            }
            scope.push((prefix.to_string(), value));
        } else {
            attributes.push((key, value));
        }
    }

    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|_| OoxmlError::Xml("Invalid UTF-8 in tag name".to_string()))?
        .to_string();
    let element = Element::new(&canonical_name(&name, &scope, scopes, true));
    for (key, value) in attributes {
        let key = if key.starts_with("xmlns:") {
            key
        } else {
            canonical_name(&key, &scope, scopes, false)
        };
        element.set(&key, &value);
    }

    Ok((element, scope))
}

fn canonical_name(name: &str, own: &Scope, outer: &[Scope], is_element: bool) -> String {
    let (prefix, local) = ns::split_qname(name);
    let lookup = match prefix {
        Some("xml") => return name.to_string(),
        Some(prefix) => prefix,
        // Unprefixed attributes are never in a namespace.
        None if !is_element => return name.to_string(),
        None => "",
    };

    let uri = own
        .iter()
        .rev()
        .chain(outer.iter().rev().flat_map(|scope| scope.iter().rev()))
        .find(|(declared, _)| declared == lookup)
        .map(|(_, uri)| uri.as_str());

    match uri.and_then(ns::canonical_prefix) {
        Some(canonical) => format!("{}:{}", canonical, local),
        None => name.to_string(),
    }
}

fn resolve_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value)
        },
    }
}
