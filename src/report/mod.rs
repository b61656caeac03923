// Report module - Typed accessors over an sslyze XML report
//
// Each accessor binds one element and reads attributes on demand. Nested
// records and lists are built on first access and cached in `OnceLock` cells.

pub mod certinfo;
pub mod cipher_suite;
pub mod key_exchange;
pub mod ocsp_response;
pub mod protocol;
pub mod target;
pub mod types;

pub use certinfo::CertInfo;
pub use cipher_suite::CipherSuite;
pub use key_exchange::{KeyExchange, KeyExchangeKind};
pub use ocsp_response::OcspResponse;
pub use protocol::{ProtocolScan, ProtocolVersion};
pub use target::Target;
pub use types::parse_boolean_literal;

use self::types::decimal_attribute;
use crate::Result;
use crate::document::{Document, Node};
use std::sync::OnceLock;

/// Server that sslyze could not scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTarget<'d> {
    /// Target string as given on the command line
    pub target: &'d str,
    pub error: Option<&'d str>,
}

/// The `<document>` element of an sslyze report
#[derive(Debug)]
pub struct Report<'d> {
    node: Node<'d>,
    targets: OnceLock<Vec<Target<'d>>>,
}

impl<'d> Report<'d> {
    pub fn new(document: &'d Document) -> Self {
        Self::from_node(document.root())
    }

    pub fn from_node(node: Node<'d>) -> Self {
        Self {
            node,
            targets: OnceLock::new(),
        }
    }

    pub fn node(&self) -> Node<'d> {
        self.node
    }

    pub fn title(&self) -> Option<&'d str> {
        self.node.attribute("title")
    }

    pub fn sslyze_version(&self) -> Option<&'d str> {
        self.node.attribute("SSLyzeVersion")
    }

    pub fn sslyze_web(&self) -> Option<&'d str> {
        self.node.attribute("SSLyzeWeb")
    }

    /// `results/@totalScanTime`, in seconds
    pub fn total_scan_time(&self) -> Result<Option<f64>> {
        match self.node.child("results") {
            Some(results) => decimal_attribute(results, "totalScanTime"),
            None => Ok(None),
        }
    }

    pub fn targets(&self) -> &[Target<'d>] {
        self.targets.get_or_init(|| {
            let targets: Vec<Target<'d>> = self
                .node
                .child("results")
                .map(|results| results.children_named("target").map(Target::new).collect())
                .unwrap_or_default();
            tracing::debug!(targets = targets.len(), "Bound report targets");
            targets
        })
    }

    /// First target scanned for `host`
    pub fn target(&self, host: &str) -> Option<&Target<'d>> {
        self.targets()
            .iter()
            .find(|target| target.node().attribute("host") == Some(host))
    }

    pub fn invalid_targets(&self) -> Vec<InvalidTarget<'d>> {
        self.node
            .child("invalidTargets")
            .map(|list| {
                list.children_named("invalidTarget")
                    .map(|node| InvalidTarget {
                        target: node.text(),
                        error: node.attribute("error"),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
