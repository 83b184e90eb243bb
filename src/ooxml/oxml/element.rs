//! Shared-handle XML element tree.
//!
//! An [`Element`] is a cheap, clonable handle to a node of the tree. Cloning
//! the handle never copies the node: two handles obtained for the same node
//! compare equal and observe each other's mutations. Parents own their
//! children; children keep only a weak back-link, so dropping the root frees
//! the whole subtree.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use super::writer::{XmlWriteOptions, write_element};
use crate::ooxml::error::{OoxmlError, Result};

pub(crate) type Attributes = SmallVec<[(String, String); 4]>;

pub(crate) struct ElementData {
    pub(crate) tag: String,
    pub(crate) attributes: Attributes,
    pub(crate) text: String,
    pub(crate) children: Vec<Element>,
    parent: Weak<RefCell<ElementData>>,
}

/// Handle to an element node, named by its canonical qualified name (`w:r`).
#[derive(Clone)]
pub struct Element(Rc<RefCell<ElementData>>);

impl Element {
    /// Create a detached element with no attributes or children.
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.to_string(),
            attributes: SmallVec::new(),
            text: String::new(),
            children: Vec::new(),
            parent: Weak::new(),
        })))
    }

    /// Parse an XML document or fragment with a single root element.
    pub fn parse(xml: &str) -> Result<Self> {
        super::parser::parse(xml)
    }

    pub(crate) fn data(&self) -> Ref<'_, ElementData> {
        self.0.borrow()
    }

    /// Qualified tag name, e.g. `w:t`.
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    /// Whether this element has the given qualified tag name.
    #[inline]
    pub fn is(&self, tag: &str) -> bool {
        self.0.borrow().tag == tag
    }

    /// Tag name without its namespace prefix.
    pub fn local_name(&self) -> String {
        let data = self.0.borrow();
        super::ns::split_qname(&data.tag).1.to_string()
    }

    /// Whether both handles refer to the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // ---------------------------------------------------------------------
    // attributes

    /// Value of the named attribute (qualified, e.g. `w:val`).
    pub fn get(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    /// Whether the named attribute is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.0.borrow().attributes.iter().any(|(key, _)| key == name)
    }

    /// Set an attribute, replacing any existing value in place.
    pub fn set(&self, name: &str, value: &str) {
        let mut data = self.0.borrow_mut();
        match data.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => {
                existing.clear();
                existing.push_str(value);
            },
            None => data.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        let mut data = self.0.borrow_mut();
        let index = data.attributes.iter().position(|(key, _)| key == name)?;
        Some(data.attributes.remove(index).1)
    }

    /// Snapshot of all attributes in document order.
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.0.borrow().attributes.iter().cloned().collect()
    }

    // ---------------------------------------------------------------------
    // character data

    /// Character data directly inside this element.
    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    /// Replace the character data directly inside this element.
    pub fn set_text(&self, text: &str) {
        let mut data = self.0.borrow_mut();
        data.text.clear();
        data.text.push_str(text);
    }

    // ---------------------------------------------------------------------
    // navigation

    /// Parent element, if this element is attached.
    pub fn parent(&self) -> Option<Element> {
        self.0.borrow().parent.upgrade().map(Element)
    }

    /// Snapshot of the child handles in document order.
    pub fn children(&self) -> Vec<Element> {
        self.0.borrow().children.clone()
    }

    /// Number of child elements.
    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    /// First child with the given tag.
    pub fn first_child(&self, tag: &str) -> Option<Element> {
        self.0.borrow().children.iter().find(|child| child.is(tag)).cloned()
    }

    /// First child whose tag is any of `tags`.
    pub fn first_child_of(&self, tags: &[&str]) -> Option<Element> {
        self.0
            .borrow()
            .children
            .iter()
            .find(|child| tags.iter().any(|tag| child.is(tag)))
            .cloned()
    }

    /// All children with the given tag, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<Element> {
        self.0.borrow().children.iter().filter(|child| child.is(tag)).cloned().collect()
    }

    /// Descendants in document (pre-)order, excluding this element.
    pub fn descendants(&self) -> Vec<Element> {
        let mut found = Vec::new();
        let mut stack: Vec<Element> = self.children().into_iter().rev().collect();
        while let Some(element) = stack.pop() {
            stack.extend(element.children().into_iter().rev());
            found.push(element);
        }
        found
    }

    /// Whether any descendant has the given tag.
    pub fn has_descendant(&self, tag: &str) -> bool {
        self.0
            .borrow()
            .children
            .iter()
            .any(|child| child.is(tag) || child.has_descendant(tag))
    }

    /// First descendant (pre-order) with the given tag.
    pub fn find_descendant(&self, tag: &str) -> Option<Element> {
        self.descendants().into_iter().find(|element| element.is(tag))
    }

    // ---------------------------------------------------------------------
    // mutation

    /// Detach this element from its parent, if any.
    pub fn detach(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent.borrow_mut().children.retain(|child| !Rc::ptr_eq(&child.0, &self.0));
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    /// Append `child` as the last child, moving it out of any previous parent.
    ///
    /// Fails with `InvalidValue`, leaving both trees untouched, when `child`
    /// is this element or one of its ancestors.
    pub fn append(&self, child: &Element) -> Result<()> {
        self.check_adoptable(child)?;
        self.attach(None, child);
        Ok(())
    }

    /// Insert `child` at `index` (clamped to the child count).
    ///
    /// Same failure mode as [`Element::append`].
    pub fn insert(&self, index: usize, child: &Element) -> Result<()> {
        self.check_adoptable(child)?;
        self.attach(Some(index), child);
        Ok(())
    }

    /// Insert `child` before the first existing child whose tag is listed in
    /// `successors`, appending when none is present.
    ///
    /// This is how schema sequence order is honored: callers pass the tags
    /// that must follow `child` in the content model.
    pub fn insert_before_any(&self, child: &Element, successors: &[&str]) -> Result<()> {
        self.check_adoptable(child)?;
        // Detach first so a child already in this element is not counted.
        child.detach();
        let index = self.successor_index(successors);
        self.attach(index, child);
        Ok(())
    }

    /// Append a new element with the given tag and return it.
    pub fn add_child(&self, tag: &str) -> Element {
        let child = Element::new(tag);
        self.attach(None, &child);
        child
    }

    /// Insert a new element with the given tag at `index` and return it.
    pub fn insert_child(&self, index: usize, tag: &str) -> Element {
        let child = Element::new(tag);
        self.attach(Some(index), &child);
        child
    }

    /// Create a `tag` child placed before the first of `successors`.
    pub fn insert_child_before_any(&self, tag: &str, successors: &[&str]) -> Element {
        let child = Element::new(tag);
        self.attach(self.successor_index(successors), &child);
        child
    }

    /// Remove `child` if it is a child of this element.
    pub fn remove(&self, child: &Element) -> bool {
        match child.parent() {
            Some(parent) if parent.ptr_eq(self) => {
                child.detach();
                true
            },
            _ => false,
        }
    }

    /// Remove every child with one of the given tags.
    pub fn remove_all(&self, tags: &[&str]) {
        self.retain_children(|child| !tags.iter().any(|tag| child.is(tag)));
    }

    /// Keep only the children for which `keep` returns true.
    pub fn retain_children(&self, mut keep: impl FnMut(&Element) -> bool) {
        for child in self.children() {
            if !keep(&child) {
                child.detach();
            }
        }
    }

    /// Whether `other` is this element or lies in its subtree.
    pub fn contains(&self, other: &Element) -> bool {
        let mut current = Some(other.clone());
        while let Some(element) = current {
            if element.ptr_eq(self) {
                return true;
            }
            current = element.parent();
        }
        false
    }

    fn check_adoptable(&self, child: &Element) -> Result<()> {
        if child.contains(self) {
            return Err(OoxmlError::InvalidValue(format!(
                "cannot insert <{}> into its own subtree",
                child.tag()
            )));
        }
        Ok(())
    }

    fn successor_index(&self, successors: &[&str]) -> Option<usize> {
        self.0
            .borrow()
            .children
            .iter()
            .position(|existing| successors.iter().any(|tag| existing.is(tag)))
    }

    /// Move `child` under this element at `index`, or last when `None`.
    /// Callers guarantee `child` is not an ancestor.
    fn attach(&self, index: Option<usize>, child: &Element) {
        child.detach();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        let mut data = self.0.borrow_mut();
        let index = index.unwrap_or(data.children.len()).min(data.children.len());
        data.children.insert(index, child.clone());
    }

    // ---------------------------------------------------------------------
    // serialization

    /// Serialize this subtree as an XML fragment without namespace declarations.
    pub fn xml(&self) -> String {
        self.to_xml_with(&XmlWriteOptions::fragment())
    }

    /// Serialize this subtree with explicit options.
    pub fn to_xml_with(&self, options: &XmlWriteOptions) -> String {
        let mut out = String::with_capacity(256);
        write_element(self, &mut out, options);
        out
    }
}

impl PartialEq for Element {
    /// Elements compare by identity: equal handles refer to the same node.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(&self.xml()).finish()
    }
}
