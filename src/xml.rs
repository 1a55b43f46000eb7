//! Owned XML element trees.
//!
//! Emitters build [`XmlElement`] trees rather than strings so the output can
//! be inspected by path before it is serialized. Attribute order is insertion
//! order, which keeps serialization byte-for-byte reproducible.
//!
//! Characters outside the XML 1.0 `Char` production (most C0 controls,
//! U+FFFE, U+FFFF) are dropped from text and attribute values as they are
//! added, so every tree serializes to a well-formed document.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builder form of [`XmlElement::set_attr`].
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute, replacing any previous value in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = strip_invalid_chars(value.into());
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// Append text, merging with a preceding text node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = strip_invalid_chars(text.into());
        if text.is_empty() {
            return;
        }
        match self.children.last_mut() {
            Some(XmlNode::Text(existing)) => existing.push_str(&text),
            _ => self.children.push(XmlNode::Text(text)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn nodes(&self) -> &[XmlNode] {
        &self.children
    }

    /// Child elements, skipping text.
    pub fn children(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            XmlNode::Text(_) => None,
        })
    }

    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a XmlElement> {
        self.children().filter(move |el| el.name == name)
    }

    /// First child element called `name`.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children_named(name).next()
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut XmlElement> {
        self.children.iter_mut().find_map(|node| match node {
            XmlNode::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Resolve a slash-separated element path.
    ///
    /// Each step is an element name with an optional 1-based index, e.g.
    /// `style:tab-stops/style:tab-stop[2]`. A leading `/` makes the first
    /// step match this element itself.
    ///
    /// ```
    /// use quire::xml::XmlElement;
    ///
    /// let root = XmlElement::new("a")
    ///     .with_child(XmlElement::new("b").with_attr("n", "1"))
    ///     .with_child(XmlElement::new("b").with_attr("n", "2"));
    /// assert_eq!(root.select("b[2]").and_then(|b| b.attr("n")), Some("2"));
    /// assert!(root.select("/a/b").is_some());
    /// ```
    pub fn select(&self, path: &str) -> Option<&XmlElement> {
        let mut current = self;
        let mut steps = path.split('/');
        if path.starts_with('/') {
            steps.next();
            let (name, index) = parse_step(steps.next()?)?;
            if name != self.name || index != 1 {
                return None;
            }
        }
        for step in steps {
            if step.is_empty() {
                continue;
            }
            let (name, index) = parse_step(step)?;
            current = current.children_named(name).nth(index - 1)?;
        }
        Some(current)
    }

    /// Number of elements a path step would match, e.g. how many
    /// `style:page-layout` children exist.
    pub fn count(&self, path: &str) -> usize {
        match path.rsplit_once('/') {
            Some((parent, last)) => self
                .select(parent)
                .map_or(0, |p| p.children_named(last).count()),
            None => self.children_named(path).count(),
        }
    }

    /// Serialize as a standalone UTF-8 document.
    pub fn write_to<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = Writer::new(out);
        writer.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some("UTF-8"),
            Some("yes"),
        )))?;
        self.write_element(&mut writer)
    }

    /// Serialize to a string, see [`XmlElement::write_to`].
    pub fn to_xml_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for node in &self.children {
            match node {
                XmlNode::Element(el) => el.write_element(writer)?,
                XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

/// Whether `c` may appear in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn strip_invalid_chars(mut text: String) -> String {
    if text.contains(|c: char| !is_xml_char(c)) {
        log::debug!("dropping characters not allowed in XML from {text:?}");
        text.retain(is_xml_char);
    }
    text
}

fn parse_step(step: &str) -> Option<(&str, usize)> {
    match step.strip_suffix(']').and_then(|s| s.split_once('[')) {
        Some((name, index)) => {
            let index: usize = index.parse().ok()?;
            (index >= 1).then_some((name, index))
        }
        None => Some((step, 1)),
    }
}
