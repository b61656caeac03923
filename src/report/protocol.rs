// Protocol Scan - Represents the per-version cipher suite scan elements
// (`<sslv2>`, `<sslv3>`, `<tlsv1>`, `<tlsv1_1>`, `<tlsv1_2>`, `<tlsv1_3>`)

use super::cipher_suite::CipherSuite;
use super::types::required_boolean_attribute;
use crate::Result;
use crate::document::Node;
use std::fmt;
use std::sync::OnceLock;

/// SSL/TLS protocol version scanned by sslyze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProtocolVersion {
    SSLv2,
    SSLv3,
    TLS10,
    TLS11,
    TLS12,
    TLS13,
}

impl ProtocolVersion {
    /// All versions, oldest first
    pub const ALL: [ProtocolVersion; 6] = [
        ProtocolVersion::SSLv2,
        ProtocolVersion::SSLv3,
        ProtocolVersion::TLS10,
        ProtocolVersion::TLS11,
        ProtocolVersion::TLS12,
        ProtocolVersion::TLS13,
    ];

    /// Report element name for this version
    pub fn element_name(self) -> &'static str {
        match self {
            ProtocolVersion::SSLv2 => "sslv2",
            ProtocolVersion::SSLv3 => "sslv3",
            ProtocolVersion::TLS10 => "tlsv1",
            ProtocolVersion::TLS11 => "tlsv1_1",
            ProtocolVersion::TLS12 => "tlsv1_2",
            ProtocolVersion::TLS13 => "tlsv1_3",
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            ProtocolVersion::SSLv2 => "SSLv2",
            ProtocolVersion::SSLv3 => "SSLv3",
            ProtocolVersion::TLS10 => "TLS 1.0",
            ProtocolVersion::TLS11 => "TLS 1.1",
            ProtocolVersion::TLS12 => "TLS 1.2",
            ProtocolVersion::TLS13 => "TLS 1.3",
        }
    }

    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|version| version.element_name() == name)
    }

    pub fn is_deprecated(self) -> bool {
        matches!(
            self,
            ProtocolVersion::SSLv2
                | ProtocolVersion::SSLv3
                | ProtocolVersion::TLS10
                | ProtocolVersion::TLS11
        )
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Cipher suite scan results for one protocol version
#[derive(Debug)]
pub struct ProtocolScan<'d> {
    node: Node<'d>,
    version: ProtocolVersion,
    preferred: OnceLock<Option<CipherSuite<'d>>>,
    accepted: OnceLock<Vec<CipherSuite<'d>>>,
    rejected: OnceLock<Vec<CipherSuite<'d>>>,
    errored: OnceLock<Vec<CipherSuite<'d>>>,
}

impl<'d> ProtocolScan<'d> {
    /// Bind to a protocol element; `None` when the element name is not a protocol version
    pub fn new(node: Node<'d>) -> Option<Self> {
        let version = ProtocolVersion::from_element_name(node.name())?;
        Some(Self {
            node,
            version,
            preferred: OnceLock::new(),
            accepted: OnceLock::new(),
            rejected: OnceLock::new(),
            errored: OnceLock::new(),
        })
    }

    pub fn node(&self) -> Node<'d> {
        self.node
    }

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    pub fn title(&self) -> Option<&'d str> {
        self.node.attribute("title")
    }

    /// `isProtocolSupported`
    pub fn is_supported(&self) -> Result<bool> {
        required_boolean_attribute(self.node, "isProtocolSupported")
    }

    /// The suite the server picked from the client's full list
    pub fn preferred_cipher_suite(&self) -> Option<&CipherSuite<'d>> {
        self.preferred
            .get_or_init(|| {
                self.node
                    .at("preferredCipherSuite/cipherSuite")
                    .map(CipherSuite::new)
            })
            .as_ref()
    }

    pub fn accepted_cipher_suites(&self) -> &[CipherSuite<'d>] {
        self.accepted
            .get_or_init(|| cipher_suites_in(self.node, "acceptedCipherSuites"))
    }

    pub fn rejected_cipher_suites(&self) -> &[CipherSuite<'d>] {
        self.rejected
            .get_or_init(|| cipher_suites_in(self.node, "rejectedCipherSuites"))
    }

    /// Suites whose handshake attempt failed with an error
    pub fn errored_cipher_suites(&self) -> &[CipherSuite<'d>] {
        self.errored
            .get_or_init(|| cipher_suites_in(self.node, "errors"))
    }
}

fn cipher_suites_in<'d>(node: Node<'d>, container: &str) -> Vec<CipherSuite<'d>> {
    node.child(container)
        .map(|list| list.children_named("cipherSuite").map(CipherSuite::new).collect())
        .unwrap_or_default()
}
