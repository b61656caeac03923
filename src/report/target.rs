// Target - Represents the `<target>` element of scan results

use super::certinfo::CertInfo;
use super::protocol::{ProtocolScan, ProtocolVersion};
use super::types::{required_attribute, required_integer_attribute};
use crate::Result;
use crate::document::Node;
use std::fmt;
use std::sync::OnceLock;

/// Scan results for one server
#[derive(Debug)]
pub struct Target<'d> {
    node: Node<'d>,
    certinfo: OnceLock<Option<CertInfo<'d>>>,
    protocols: OnceLock<Vec<ProtocolScan<'d>>>,
}

impl<'d> Target<'d> {
    pub fn new(node: Node<'d>) -> Self {
        Self {
            node,
            certinfo: OnceLock::new(),
            protocols: OnceLock::new(),
        }
    }

    pub fn node(&self) -> Node<'d> {
        self.node
    }

    pub fn host(&self) -> Result<&'d str> {
        required_attribute(self.node, "host")
    }

    pub fn ip(&self) -> Option<&'d str> {
        self.node.attribute("ip")
    }

    pub fn port(&self) -> Result<u16> {
        required_integer_attribute(self.node, "port")
    }

    /// Application protocol wrapped in TLS (`https`, `starttls_smtp`, ...)
    pub fn tls_wrapped_protocol(&self) -> Option<&'d str> {
        self.node.attribute("tlsWrappedProtocol")
    }

    pub fn certinfo(&self) -> Option<&CertInfo<'d>> {
        self.certinfo
            .get_or_init(|| self.node.child("certinfo").map(CertInfo::new))
            .as_ref()
    }

    /// Protocol scans present in the report, in document order
    pub fn protocols(&self) -> &[ProtocolScan<'d>] {
        self.protocols
            .get_or_init(|| self.node.children().filter_map(ProtocolScan::new).collect())
    }

    pub fn protocol(&self, version: ProtocolVersion) -> Option<&ProtocolScan<'d>> {
        self.protocols()
            .iter()
            .find(|scan| scan.version() == version)
    }

    /// Versions the server accepted, oldest first
    pub fn supported_protocols(&self) -> Result<Vec<ProtocolVersion>> {
        let mut supported = Vec::new();
        for scan in self.protocols() {
            if scan.is_supported()? {
                supported.push(scan.version());
            }
        }
        supported.sort();
        Ok(supported)
    }
}

impl fmt::Display for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = self.node.attribute("host").unwrap_or_default();
        match self.node.attribute("port") {
            Some(port) => write!(f, "{}:{}", host, port),
            None => write!(f, "{}", host),
        }
    }
}
