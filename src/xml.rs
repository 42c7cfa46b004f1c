//! Owned, read-only XML element tree.
//!
//! The tree is built in a single pass with `quick-xml`'s namespace-aware
//! reader and is never mutated afterwards. Entity construction walks it
//! recursively, so element nesting is capped at [`MAX_DEPTH`].

use crate::errors::SportsMlError;
use log::debug;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use std::io::{BufRead, BufReader, Read};

/// Deepest element nesting accepted by the parser.
pub const MAX_DEPTH: usize = 64;

/// A single parsed XML element with its attributes, text and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    namespace: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
    text: String,
}

impl XmlElement {
    /// Local (unprefixed) name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace URI the element's prefix resolved to, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// True if the element has the given local name and namespace.
    pub fn is(&self, name: &str, namespace: Option<&str>) -> bool {
        self.name == name && self.namespace() == namespace
    }

    /// Raw attribute value, exactly as written apart from entity unescaping.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// Character data directly inside this element (text and CDATA).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// First child with the given local name in this element's namespace.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children_named(name).next()
    }

    /// All children with the given local name in this element's namespace,
    /// in document order.
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a XmlElement> {
        self.children
            .iter()
            .filter(move |c| c.is(name, self.namespace()))
    }

    /// Elements reached by descending through `path` one step at a time.
    ///
    /// `["officials", "official"]` yields every `official` inside every
    /// `officials` child, in document order.
    pub fn children_at(&self, path: &[&str]) -> Vec<&XmlElement> {
        let mut current = vec![self];
        for segment in path {
            current = current
                .into_iter()
                .flat_map(|e| e.children_named(segment))
                .collect();
        }
        current
    }

    /// First descendant (depth-first, document order) with the given name
    /// and namespace. The element itself is not considered.
    pub fn find_descendant(&self, name: &str, namespace: Option<&str>) -> Option<&XmlElement> {
        for child in &self.children {
            if child.is(name, namespace) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(name, namespace) {
                return Some(found);
            }
        }
        None
    }
}

/// Parse a complete XML document held in memory and return its root element.
///
/// The text is already decoded, so any `encoding` in the XML declaration is
/// ignored.
pub fn parse_str(text: &str) -> Result<XmlElement, SportsMlError> {
    build_tree(&mut NsReader::from_str(text))
}

/// Parse an XML document from a byte stream.
///
/// Bytes are decoded with the encoding named in the XML declaration (or a
/// byte order mark), UTF-8 otherwise. Bytes that do not decode are
/// reported as [`SportsMlError::MalformedXml`].
pub fn parse_reader<R: Read>(reader: R) -> Result<XmlElement, SportsMlError> {
    build_tree(&mut NsReader::from_reader(BufReader::new(reader)))
}

fn build_tree<R: BufRead>(reader: &mut NsReader<R>) -> Result<XmlElement, SportsMlError> {
    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let (resolved, event) = reader.read_resolved_event_into(&mut buf)?;
        let namespace = namespace_uri(resolved)?;
        let decoder = reader.decoder();
        match event {
            Event::Start(start) => {
                check_depth(stack.len())?;
                stack.push(open_element(&start, namespace, decoder)?);
            }
            Event::Empty(start) => {
                check_depth(stack.len())?;
                let element = open_element(&start, namespace, decoder)?;
                attach(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                // quick-xml has already checked that the end tag matches
                let element = stack.pop().ok_or_else(|| {
                    SportsMlError::MalformedXml("unexpected closing tag".to_string())
                })?;
                attach(element, &mut stack, &mut root)?;
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&decoder.decode(&data)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = stack.last() {
        return Err(SportsMlError::MalformedXml(format!(
            "unexpected end of document inside <{}>",
            unclosed.name
        )));
    }

    let root = root
        .ok_or_else(|| SportsMlError::MalformedXml("document has no root element".to_string()))?;
    debug!(
        "Parsed XML document with root <{}> ({})",
        root.name,
        root.namespace().unwrap_or("no namespace")
    );
    Ok(root)
}

fn namespace_uri(resolved: ResolveResult) -> Result<Option<String>, SportsMlError> {
    match resolved {
        ResolveResult::Bound(Namespace(uri)) => Ok(Some(String::from_utf8_lossy(uri).into_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(SportsMlError::MalformedXml(format!(
            "undeclared namespace prefix '{}'",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}

fn open_element(
    start: &BytesStart,
    namespace: Option<String>,
    decoder: Decoder,
) -> Result<XmlElement, SportsMlError> {
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = decoder.decode(attr.key.as_ref())?.into_owned();
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attr.decode_and_unescape_value(decoder)?.into_owned();
        attributes.push((key, value));
    }

    Ok(XmlElement {
        name: decoder.decode(start.local_name().as_ref())?.into_owned(),
        namespace,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

fn check_depth(open_elements: usize) -> Result<(), SportsMlError> {
    if open_elements >= MAX_DEPTH {
        return Err(SportsMlError::MalformedXml(format!(
            "element nesting exceeds the maximum depth of {}",
            MAX_DEPTH
        )));
    }
    Ok(())
}

fn attach(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<(), SportsMlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(SportsMlError::MalformedXml(format!(
                "second root element <{}>",
                element.name
            )));
        }
    }
    Ok(())
}
