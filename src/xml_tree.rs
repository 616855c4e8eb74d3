//! A plain XML tree. Documents are read into it as-is so that everything the
//! splitter does not touch can be written back unchanged.

use crate::error::{Error, ErrorType, Result};

use quick_xml::events::{
    BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event,
};
use quick_xml::{Reader, Writer};

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

impl Default for Declaration {
    fn default() -> Self {
        Declaration {
            version: "1.0".to_string(),
            encoding: Some("UTF-8".to_string()),
            standalone: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
    Instruction(String),
    DocType(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub declaration: Option<Declaration>,
    /// Comments, instructions and doctype found before the root element.
    pub prolog: Vec<Node>,
    pub root: Element,
}

fn local_name(name: &str) -> &str {
    match name.rsplit_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn decode_bytes(bytes: Cow<[u8]>) -> String {
    lossy(&bytes)
}

impl Element {
    pub fn new(name: &str) -> Self {
        Element {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    pub fn is(&self, name: &str) -> bool {
        self.local_name() == name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| local_name(k) == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    pub fn children_named<'a>(
        &'a self,
        name: &'static str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |e| e.is(name))
    }

    pub fn child(&self, name: &'static str) -> Option<&Element> {
        self.children_named(name).next()
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|n| match n {
            Node::Element(e) if e.is(name) => Some(e),
            _ => None,
        })
    }

    /// Concatenated text and CDATA content of the direct children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) | Node::CData(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn set_text(&mut self, text: String) {
        self.children
            .retain(|n| !matches!(n, Node::Text(_) | Node::CData(_)));
        self.children.insert(0, Node::Text(text));
    }

    pub fn remove_children(&mut self, name: &str) {
        self.children.retain(|n| match n {
            Node::Element(e) => !e.is(name),
            _ => true,
        });
    }

    /// Replaces every child element called `name` by `replacement`, placed
    /// where the first of them was. Appends if there was none.
    pub fn replace_children(&mut self, name: &str, replacement: Vec<Element>) {
        let position = self
            .children
            .iter()
            .position(|n| matches!(n, Node::Element(e) if e.is(name)))
            .unwrap_or(self.children.len());
        self.remove_children(name);
        self.children.splice(
            position..position,
            replacement.into_iter().map(Node::Element),
        );
    }
}

fn read_start(start: &BytesStart) -> Result<Element> {
    let mut element = Element::new(&lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr?;
        element.attributes.push((
            lossy(attr.key.as_ref()),
            attr.unescape_value()?.into_owned(),
        ));
    }
    Ok(element)
}

fn read_declaration(decl: &BytesDecl) -> Result<Declaration> {
    let encoding = match decl.encoding() {
        Some(e) => Some(decode_bytes(e?)),
        None => None,
    };
    let standalone = match decl.standalone() {
        Some(s) => Some(decode_bytes(s?)),
        None => None,
    };
    Ok(Declaration {
        version: decode_bytes(decl.version()?),
        encoding,
        standalone,
    })
}

struct TreeBuilder {
    declaration: Option<Declaration>,
    prolog: Vec<Node>,
    stack: Vec<Element>,
    root: Option<Element>,
}

impl TreeBuilder {
    fn push_node(&mut self, node: Node) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => match node {
                Node::Element(e) => {
                    if self.root.is_some() {
                        return Err(Error::new_s(
                            ErrorType::FormatError,
                            "more than one root element",
                        ));
                    }
                    self.root = Some(e);
                }
                Node::Text(_) | Node::CData(_) => (),
                other => {
                    if self.root.is_none() {
                        self.prolog.push(other);
                    }
                }
            },
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let element = self.stack.pop().ok_or(Error::new_s(
            ErrorType::FormatError,
            "unexpected closing tag",
        ))?;
        self.push_node(Node::Element(element))
    }
}

impl Document {
    pub fn new(root: Element) -> Self {
        Document {
            declaration: Some(Declaration::default()),
            prolog: Vec::new(),
            root,
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let mut reader = Reader::from_str(input);
        reader.trim_text(true);

        let mut builder = TreeBuilder {
            declaration: None,
            prolog: Vec::new(),
            stack: Vec::new(),
            root: None,
        };

        loop {
            let event = reader.read_event().map_err(|e| {
                Error::convert(
                    ErrorType::FormatError,
                    &format!(
                        "malformed XML at byte {}",
                        reader.buffer_position()
                    ),
                    &e,
                )
            })?;
            match event {
                Event::Decl(d) => {
                    builder.declaration = Some(read_declaration(&d)?);
                }
                Event::Start(s) => builder.stack.push(read_start(&s)?),
                Event::Empty(s) => {
                    builder.push_node(Node::Element(read_start(&s)?))?
                }
                Event::End(_) => builder.close()?,
                Event::Text(t) => {
                    builder.push_node(Node::Text(t.unescape()?.into_owned()))?
                }
                Event::CData(c) => builder.push_node(Node::CData(lossy(&c)))?,
                Event::Comment(c) => {
                    builder.push_node(Node::Comment(lossy(&c)))?
                }
                Event::PI(p) => {
                    builder.push_node(Node::Instruction(lossy(&p)))?
                }
                Event::DocType(d) => {
                    builder.push_node(Node::DocType(lossy(&d)))?
                }
                Event::Eof => break,
            }
        }

        if !builder.stack.is_empty() {
            return Err(Error::new_s(
                ErrorType::FormatError,
                "unexpected end of document",
            ));
        }
        let root = builder.root.ok_or(Error::new_s(
            ErrorType::FormatError,
            "document has no root element",
        ))?;

        Ok(Document {
            declaration: builder.declaration,
            prolog: builder.prolog,
            root,
        })
    }

    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        if let Some(decl) = &self.declaration {
            writer.write_event(Event::Decl(BytesDecl::new(
                &decl.version,
                decl.encoding.as_deref(),
                decl.standalone.as_deref(),
            )))?;
        }
        for node in &self.prolog {
            write_node(&mut writer, node)?;
        }
        write_element(&mut writer, &self.root)?;

        String::from_utf8(writer.into_inner()).map_err(|e| {
            Error::convert(ErrorType::LogicError, "non UTF-8 output", &e)
        })
    }
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<()> {
    match node {
        Node::Element(e) => return write_element(writer, e),
        Node::Text(t) => writer.write_event(Event::Text(BytesText::new(t)))?,
        Node::CData(t) => {
            writer.write_event(Event::CData(BytesCData::new(t.as_str())))?
        }
        Node::Comment(t) => writer
            .write_event(Event::Comment(BytesText::from_escaped(t.as_str())))?,
        Node::Instruction(t) => writer
            .write_event(Event::PI(BytesText::from_escaped(t.as_str())))?,
        Node::DocType(t) => writer
            .write_event(Event::DocType(BytesText::from_escaped(t.as_str())))?,
    }
    Ok(())
}
