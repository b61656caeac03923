// Document Parser - Builds the element arena from a streaming quick-xml reader

use super::{Document, NodeData};
use crate::Result;
use crate::config::ReportConfig;
use crate::error::ReportError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

pub(super) fn parse(xml: &str, config: &ReportConfig) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(config.trim_text);

    let mut builder = TreeBuilder::default();
    loop {
        match reader.read_event()? {
            Event::Start(element) => builder.open(&element, false)?,
            Event::Empty(element) => builder.open(&element, true)?,
            Event::End(_) => builder.close()?,
            Event::Text(text) => builder.text(&text.unescape()?)?,
            Event::CData(cdata) => builder.text(&String::from_utf8_lossy(&cdata.into_inner()))?,
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes carry no report data
            _ => {}
        }
    }

    builder.finish()
}

#[derive(Default)]
struct TreeBuilder {
    nodes: Vec<NodeData>,
    /// Indices of currently open elements
    stack: Vec<usize>,
    root: Option<usize>,
}

impl TreeBuilder {
    fn open(&mut self, element: &BytesStart<'_>, empty: bool) -> Result<()> {
        if self.stack.is_empty() && self.root.is_some() {
            return Err(malformed("more than one root element"));
        }

        let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attribute in element.attributes() {
            let attribute = attribute?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        let index = self.nodes.len();
        let parent = self.stack.last().copied();
        self.nodes.push(NodeData {
            name,
            attributes,
            text: String::new(),
            parent,
            children: Vec::new(),
        });

        match parent {
            Some(parent) => self.nodes[parent].children.push(index),
            None => self.root = Some(index),
        }

        if !empty {
            self.stack.push(index);
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.stack
            .pop()
            .map(|_| ())
            .ok_or_else(|| malformed("closing tag without matching opening tag"))
    }

    fn text(&mut self, text: &str) -> Result<()> {
        match self.stack.last() {
            Some(&open) => {
                self.nodes[open].text.push_str(text);
                Ok(())
            }
            None if text.trim().is_empty() => Ok(()),
            None => Err(malformed("text outside the root element")),
        }
    }

    fn finish(self) -> Result<Document> {
        if let Some(&open) = self.stack.last() {
            return Err(malformed(&format!(
                "unclosed element <{}>",
                self.nodes[open].name
            )));
        }

        let root = self.root.ok_or_else(|| malformed("no root element"))?;
        Ok(Document {
            nodes: self.nodes,
            root,
        })
    }
}

fn malformed(details: &str) -> ReportError {
    ReportError::MalformedDocument {
        details: details.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(xml: &str) -> Result<Document> {
        parse(xml, &ReportConfig::default())
    }

    #[test]
    fn test_unescapes_attributes_and_text() {
        let doc = parse_default(r#"<a v="x &amp; y">1 &lt; 2</a>"#).unwrap();
        assert_eq!(doc.root().attribute("v"), Some("x & y"));
        assert_eq!(doc.root().text(), "1 < 2");
    }

    #[test]
    fn test_cdata_is_text() {
        let doc = parse_default("<a><![CDATA[<raw>]]></a>").unwrap();
        assert_eq!(doc.root().text(), "<raw>");
    }

    #[test]
    fn test_trim_text_option() {
        let xml = "<a>  padded  </a>";

        let trimmed = parse_default(xml).unwrap();
        assert_eq!(trimmed.root().text(), "padded");

        let config = ReportConfig {
            trim_text: false,
            ..ReportConfig::default()
        };
        let raw = parse(xml, &config).unwrap();
        assert_eq!(raw.root().text(), "  padded  ");
    }

    #[test]
    fn test_comments_and_declaration_ignored() {
        let doc = parse_default("<?xml version=\"1.0\"?><!-- note --><a><b/></a>").unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.root().children().count(), 1);
    }

    #[test]
    fn test_rejects_empty_input() {
        let err = parse_default("").unwrap_err();
        assert!(matches!(err, ReportError::MalformedDocument { .. }));
    }

    #[test]
    fn test_rejects_unclosed_element() {
        assert!(parse_default("<a><b></b>").is_err());
    }

    #[test]
    fn test_rejects_multiple_roots() {
        let err = parse_default("<a/><b/>").unwrap_err();
        assert!(matches!(err, ReportError::MalformedDocument { .. }));
    }

    #[test]
    fn test_rejects_mismatched_end_tag() {
        assert!(parse_default("<a><b></a></b>").is_err());
    }

    #[test]
    fn test_rejects_text_outside_root() {
        assert!(parse_default("<a/>trailing").is_err());
    }
}
