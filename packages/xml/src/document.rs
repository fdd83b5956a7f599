//! Event-tree construction with well-formedness checks

use crate::chars::{check_chars, check_name, utf8};
use crate::error::ValidationError;
use quick_xml::events::{BytesCData, BytesStart, BytesText, Event};
use quick_xml::Reader;

/// One node of a parsed document
#[derive(Debug, Clone)]
pub(crate) enum Node {
    Element {
        start: BytesStart<'static>,
        self_closing: bool,
        children: Vec<Node>,
    },
    /// Raw, still-escaped character data that is not whitespace-only
    Text(String),
    CData(BytesCData<'static>),
    /// Declarations, comments, processing instructions and doctypes
    Markup(Event<'static>),
}

/// Top-level nodes in document order, exactly one of which is the root element
#[derive(Debug)]
pub(crate) struct Document {
    pub(crate) nodes: Vec<Node>,
}

struct OpenElement {
    start: BytesStart<'static>,
    children: Vec<Node>,
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<OpenElement>,
    top_level: Vec<Node>,
    root_seen: bool,
}

impl TreeBuilder {
    fn push(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.top_level.push(node),
        }
    }

    fn claim_root(&mut self, position: usize) -> Result<(), ValidationError> {
        if !self.stack.is_empty() {
            return Ok(());
        }
        if self.root_seen {
            return Err(ValidationError::new("multiple root elements", position));
        }
        self.root_seen = true;
        Ok(())
    }

    fn outside_root(&self) -> bool {
        self.stack.is_empty()
    }
}

pub(crate) fn parse(doc: &str) -> Result<Document, ValidationError> {
    let mut reader = Reader::from_str(doc);
    let config = reader.config_mut();
    config.check_end_names = true;
    config.check_comments = true;

    let mut tree = TreeBuilder::default();
    let mut first_event = true;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ValidationError::new(e.to_string(), reader.error_position() as usize))?;
        let position = reader.buffer_position() as usize;
        let leading = std::mem::replace(&mut first_event, false);

        match event {
            Event::Start(start) => {
                check_start(&start, position)?;
                tree.claim_root(position)?;
                tree.stack.push(OpenElement {
                    start: start.into_owned(),
                    children: Vec::new(),
                });
            }
            Event::Empty(start) => {
                check_start(&start, position)?;
                tree.claim_root(position)?;
                tree.push(Node::Element {
                    start: start.into_owned(),
                    self_closing: true,
                    children: Vec::new(),
                });
            }
            Event::End(_) => {
                let open = tree
                    .stack
                    .pop()
                    .ok_or_else(|| ValidationError::new("closing tag without an open element", position))?;
                tree.push(Node::Element {
                    start: open.start,
                    self_closing: false,
                    children: open.children,
                });
            }
            Event::Text(text) => {
                let raw = checked_text(&text, position)?;
                if raw.trim().is_empty() {
                    continue;
                }
                if tree.outside_root() {
                    return Err(ValidationError::new("text outside the root element", position));
                }
                tree.push(Node::Text(raw));
            }
            Event::CData(cdata) => {
                check_chars(&cdata, position)?;
                if tree.outside_root() {
                    return Err(ValidationError::new("CDATA outside the root element", position));
                }
                tree.push(Node::CData(cdata.into_owned()));
            }
            Event::Decl(_) if !leading => {
                return Err(ValidationError::new(
                    "XML declaration is only allowed at the start of the document",
                    position,
                ));
            }
            Event::Comment(comment) => {
                check_chars(&comment, position)?;
                tree.push(Node::Markup(Event::Comment(comment.into_owned())));
            }
            Event::Eof => break,
            other => tree.push(Node::Markup(other.into_owned())),
        }
    }

    if let Some(open) = tree.stack.last() {
        let name = String::from_utf8_lossy(open.start.name().as_ref()).into_owned();
        return Err(ValidationError::new(format!("unclosed element <{name}>"), doc.len()));
    }
    if !tree.root_seen {
        return Err(ValidationError::new("no root element", doc.len()));
    }

    Ok(Document {
        nodes: tree.top_level,
    })
}

// Element name, attribute names and raw attribute values.
fn check_start(start: &BytesStart<'_>, position: usize) -> Result<(), ValidationError> {
    check_name(start.name().as_ref(), position)?;
    for attr in start.attributes() {
        let attr = attr.map_err(|e| ValidationError::new(e.to_string(), position))?;
        check_name(attr.key.as_ref(), position)?;
        check_chars(&attr.value, position)?;
        attr.unescape_value()
            .map_err(|e| ValidationError::new(e.to_string(), position))?;
    }
    Ok(())
}

fn checked_text(text: &BytesText<'_>, position: usize) -> Result<String, ValidationError> {
    check_chars(text, position)?;
    text.unescape()
        .map_err(|e| ValidationError::new(e.to_string(), position))?;
    utf8(text, position).map(str::to_owned)
}
