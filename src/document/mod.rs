// Document module - Read-only element tree for parsed report files
//
// Nodes live in a flat arena owned by `Document`. A `Node<'d>` is a copyable
// handle (document reference plus index), so accessors can hold nodes without
// owning or cloning any part of the tree.

mod parser;

use crate::Result;
use crate::config::ReportConfig;
use crate::error::ReportError;
use std::fmt;
use std::path::Path;

/// Attributes used to identify an element in error messages, in priority order
const IDENTIFYING_ATTRIBUTES: &[&str] = &["name", "host", "title"];

#[derive(Debug)]
struct NodeData {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// A parsed report document
#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: usize,
}

impl Document {
    /// Parse a document with the default configuration
    pub fn parse_str(xml: &str) -> Result<Self> {
        Self::parse_str_with(xml, &ReportConfig::default())
    }

    pub fn parse_str_with(xml: &str, config: &ReportConfig) -> Result<Self> {
        let document = parser::parse(xml, config)?;
        tracing::debug!(nodes = document.nodes.len(), root = %document.root().name(), "Parsed report document");
        Ok(document)
    }

    /// Read and parse a report file, enforcing `max_document_bytes`
    pub fn load_file(path: impl AsRef<Path>, config: &ReportConfig) -> Result<Self> {
        let path = path.as_ref();
        let fs_error = |source| ReportError::FileSystemError {
            path: path.display().to_string(),
            source,
        };

        let size = std::fs::metadata(path).map_err(fs_error)?.len();
        if size > config.max_document_bytes {
            return Err(ReportError::DocumentTooLarge {
                size,
                limit: config.max_document_bytes,
            });
        }

        tracing::debug!(path = %path.display(), size, "Loading report document");
        let xml = std::fs::read_to_string(path).map_err(fs_error)?;
        Self::parse_str_with(&xml, config)
    }

    /// The document element
    pub fn root(&self) -> Node<'_> {
        Node {
            document: self,
            index: self.root,
        }
    }

    /// Look up an absolute path such as `/document/results/target`
    pub fn at(&self, path: &str) -> Option<Node<'_>> {
        self.root().at(path)
    }

    /// Number of elements in the document
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, index: usize) -> Node<'_> {
        Node {
            document: self,
            index,
        }
    }
}

/// Handle to one element of a `Document`
#[derive(Clone, Copy)]
pub struct Node<'d> {
    document: &'d Document,
    index: usize,
}

impl<'d> Node<'d> {
    fn data(self) -> &'d NodeData {
        &self.document.nodes[self.index]
    }

    /// Element name
    pub fn name(self) -> &'d str {
        &self.data().name
    }

    /// Attribute value, if present
    pub fn attribute(self, name: &str) -> Option<&'d str> {
        self.data()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// All attributes in document order
    pub fn attributes(self) -> impl Iterator<Item = (&'d str, &'d str)> {
        self.data()
            .attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Direct text content (text of child elements is not included)
    pub fn text(self) -> &'d str {
        &self.data().text
    }

    pub fn parent(self) -> Option<Node<'d>> {
        self.data().parent.map(|index| self.document.node(index))
    }

    /// Child elements in document order
    pub fn children(self) -> impl Iterator<Item = Node<'d>> {
        let document = self.document;
        self.data()
            .children
            .iter()
            .map(move |&index| document.node(index))
    }

    /// First child element with the given name
    pub fn child(self, name: &str) -> Option<Node<'d>> {
        self.children().find(|child| child.name() == name)
    }

    /// All child elements with the given name
    pub fn children_named<'n>(self, name: &'n str) -> impl Iterator<Item = Node<'d>> + 'n
    where
        'd: 'n,
    {
        self.children().filter(move |child| child.name() == name)
    }

    /// Text of the first child element with the given name
    pub fn child_text(self, name: &str) -> Option<&'d str> {
        self.child(name).map(Node::text)
    }

    /// Resolve a `/`-separated element path.
    ///
    /// A leading `/` anchors the path at the document element, whose name must
    /// match the first step. Otherwise steps descend from this node. Returns the
    /// first match in document order.
    pub fn at(self, path: &str) -> Option<Node<'d>> {
        match path.strip_prefix('/') {
            Some(absolute) => {
                let steps: Vec<&str> = absolute.split('/').filter(|s| !s.is_empty()).collect();
                let root = self.document.root();
                match steps.split_first() {
                    None => Some(root),
                    Some((first, rest)) if *first == root.name() => root.find_steps(rest),
                    Some(_) => None,
                }
            }
            None => {
                let steps: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
                self.find_steps(&steps)
            }
        }
    }

    fn find_steps(self, steps: &[&str]) -> Option<Node<'d>> {
        let Some((first, rest)) = steps.split_first() else {
            return Some(self);
        };
        self.children_named(first)
            .find_map(|child| child.find_steps(rest))
    }

    /// Absolute element path from the document root
    pub fn path(self) -> String {
        let mut names = vec![self.name()];
        let mut current = self.parent();
        while let Some(node) = current {
            names.push(node.name());
            current = node.parent();
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    /// Path plus the first identifying attribute, e.g.
    /// `/document/results/target/tlsv1_2/acceptedCipherSuites/cipherSuite[@name='RC4-MD5']`
    pub fn describe(self) -> String {
        let path = self.path();
        IDENTIFYING_ATTRIBUTES
            .iter()
            .find_map(|&key| self.attribute(key).map(|value| (key, value)))
            .map(|(key, value)| format!("{}[@{}='{}']", path, key, value))
            .unwrap_or(path)
    }

    /// Whether both handles refer to the same element of the same document
    pub fn same_node(self, other: Node<'_>) -> bool {
        std::ptr::eq(self.document, other.document) && self.index == other.index
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(*other)
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Node").field(&self.describe()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<document title="SSLyze Scan Results">
  <results totalScanTime="1.5">
    <target host="one.example" port="443">
      <tlsv1_2 isProtocolSupported="True"/>
    </target>
    <target host="two.example" port="8443">
      <tlsv1_2 isProtocolSupported="False">
        <errors>kaput</errors>
      </tlsv1_2>
    </target>
  </results>
</document>
"#;

    #[test]
    fn test_root_and_attributes() {
        let doc = Document::parse_str(XML).unwrap();
        let root = doc.root();

        assert_eq!(root.name(), "document");
        assert_eq!(root.attribute("title"), Some("SSLyze Scan Results"));
        assert_eq!(root.attribute("missing"), None);
        assert!(root.parent().is_none());
        assert_eq!(doc.len(), 7);
    }

    #[test]
    fn test_absolute_path() {
        let doc = Document::parse_str(XML).unwrap();

        let target = doc.at("/document/results/target").unwrap();
        assert_eq!(target.attribute("host"), Some("one.example"));

        assert!(doc.at("/other/results").is_none());
        assert!(doc.at("/").unwrap().same_node(doc.root()));
    }

    #[test]
    fn test_path_finds_first_match_in_document_order() {
        let doc = Document::parse_str(XML).unwrap();

        // Only the second target has an errors element
        let errors = doc.at("/document/results/target/tlsv1_2/errors").unwrap();
        assert_eq!(errors.text(), "kaput");
        assert_eq!(
            errors.parent().unwrap().parent().unwrap().attribute("host"),
            Some("two.example")
        );
    }

    #[test]
    fn test_relative_path() {
        let doc = Document::parse_str(XML).unwrap();
        let results = doc.root().child("results").unwrap();

        let tls = results.at("target/tlsv1_2").unwrap();
        assert_eq!(tls.attribute("isProtocolSupported"), Some("True"));
        assert!(results.at("").unwrap().same_node(results));
        assert!(results.at("tlsv1_2").is_none());
    }

    #[test]
    fn test_children_named() {
        let doc = Document::parse_str(XML).unwrap();
        let results = doc.root().child("results").unwrap();

        let hosts: Vec<&str> = results
            .children_named("target")
            .filter_map(|t| t.attribute("host"))
            .collect();
        assert_eq!(hosts, vec!["one.example", "two.example"]);
    }

    #[test]
    fn test_describe_uses_identifying_attribute() {
        let doc = Document::parse_str(XML).unwrap();
        let target = doc.at("/document/results/target").unwrap();

        assert_eq!(target.path(), "/document/results/target");
        assert_eq!(
            target.describe(),
            "/document/results/target[@host='one.example']"
        );
        assert_eq!(
            doc.root().child("results").unwrap().describe(),
            "/document/results"
        );
    }

    #[test]
    fn test_node_equality() {
        let doc = Document::parse_str(XML).unwrap();
        let a = doc.at("/document/results").unwrap();
        let b = doc.root().child("results").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, doc.root());

        let other = Document::parse_str(XML).unwrap();
        assert_ne!(a, other.at("/document/results").unwrap());
    }
}
