//! Re-serialization with one indentation unit per depth

use crate::document::{parse, Node};
use crate::error::FormatError;
use devkit_common::is_idle;
use quick_xml::events::Event;
use quick_xml::Writer;

const DEFAULT_INDENT: usize = 2;

/// Pretty-printer for well-formed documents.
///
/// Whitespace-only text between markup is dropped. An element whose only
/// child is text or CDATA stays on one line with that child verbatim, an
/// element without children keeps its original `<a/>` or `<a></a>` form,
/// and mixed content puts every child on its own line with text trimmed.
/// Formatting an already formatted document returns it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlFormatter {
    indent: usize,
}

impl Default for XmlFormatter {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl XmlFormatter {
    /// Formatter with the default two-space indent
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter indenting by `width` spaces per level
    #[must_use]
    pub fn with_indent(width: usize) -> Self {
        Self { indent: width }
    }

    /// Spaces per nesting level
    #[must_use]
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Validate then re-serialize `doc`.
    ///
    /// Idle input formats to an empty string.
    ///
    /// # Errors
    ///
    /// [`FormatError::Invalid`] when `doc` is not well-formed,
    /// [`FormatError::Serialization`] when a node cannot be written back.
    pub fn format(&self, doc: &str) -> Result<String, FormatError> {
        if is_idle(doc) {
            return Ok(String::new());
        }
        let document = parse(doc)?;

        let mut lines = Vec::new();
        for node in &document.nodes {
            self.render(node, 0, &mut lines)?;
        }
        tracing::debug!(input_len = doc.len(), lines = lines.len(), "formatted document");
        Ok(lines.join("\n"))
    }

    fn render(&self, node: &Node, depth: usize, lines: &mut Vec<String>) -> Result<(), FormatError> {
        let pad = " ".repeat(self.indent * depth);
        match node {
            Node::Text(text) => lines.push(format!("{pad}{}", text.trim())),
            Node::CData(cdata) => lines.push(format!("{pad}{}", write_event(Event::CData(cdata.clone()))?)),
            Node::Markup(event) => lines.push(format!("{pad}{}", write_event(event.clone())?)),
            Node::Element {
                start,
                self_closing: true,
                ..
            } => lines.push(format!("{pad}{}", write_event(Event::Empty(start.clone()))?)),
            Node::Element {
                start, children, ..
            } => {
                let open = write_event(Event::Start(start.clone()))?;
                let close = write_event(Event::End(start.to_end()))?;
                match children.as_slice() {
                    [] => lines.push(format!("{pad}{open}{close}")),
                    [Node::Text(text)] => lines.push(format!("{pad}{open}{text}{close}")),
                    [Node::CData(cdata)] => {
                        let inner = write_event(Event::CData(cdata.clone()))?;
                        lines.push(format!("{pad}{open}{inner}{close}"));
                    }
                    _ => {
                        lines.push(format!("{pad}{open}"));
                        for child in children {
                            self.render(child, depth + 1, lines)?;
                        }
                        lines.push(format!("{pad}{close}"));
                    }
                }
            }
        }
        Ok(())
    }
}

fn write_event(event: Event<'_>) -> Result<String, FormatError> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(event)
        .map_err(|e| FormatError::Serialization(e.to_string()))?;
    String::from_utf8(writer.into_inner()).map_err(|e| FormatError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_elements_are_indented() {
        let out = XmlFormatter::new()
            .format("<a><b><c>1</c></b><d/></a>")
            .expect("well-formed");
        assert_eq!(out, "<a>\n  <b>\n    <c>1</c>\n  </b>\n  <d/>\n</a>");
    }

    #[test]
    fn test_custom_indent() {
        let out = XmlFormatter::with_indent(4)
            .format("<a><b/></a>")
            .expect("well-formed");
        assert_eq!(out, "<a>\n    <b/>\n</a>");
    }

    #[test]
    fn test_empty_element_forms_are_kept() {
        let out = XmlFormatter::new()
            .format("<a><b></b><c/><d>   </d></a>")
            .expect("well-formed");
        assert_eq!(out, "<a>\n  <b></b>\n  <c/>\n  <d></d>\n</a>");
    }

    #[test]
    fn test_sole_text_and_cdata_stay_inline() {
        let out = XmlFormatter::new()
            .format("<a>\n  <t> keep  spacing </t>\n  <c><![CDATA[<raw>]]></c>\n</a>")
            .expect("well-formed");
        assert_eq!(out, "<a>\n  <t> keep  spacing </t>\n  <c><![CDATA[<raw>]]></c>\n</a>");
    }

    #[test]
    fn test_mixed_content_is_split_and_trimmed() {
        let out = XmlFormatter::new()
            .format("<p>Hello <b>world</b> again </p>")
            .expect("well-formed");
        assert_eq!(out, "<p>\n  Hello\n  <b>world</b>\n  again\n</p>");
    }
}
