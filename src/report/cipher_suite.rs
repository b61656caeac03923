// Cipher Suite - Represents the `<cipherSuite>` element of a protocol scan

use super::key_exchange::KeyExchange;
use super::types::{boolean_attribute, integer_attribute, required_attribute};
use crate::Result;
use crate::data::rfc_names::rfc_name;
use crate::document::Node;
use std::fmt;
use std::sync::OnceLock;

/// One cipher suite result.
///
/// The nested key exchange record is built on first access and cached, so
/// repeated calls return the same instance. `OnceLock` keeps the accessor
/// `Sync` when a document is shared between threads.
#[derive(Debug)]
pub struct CipherSuite<'d> {
    node: Node<'d>,
    key_exchange: OnceLock<Option<KeyExchange<'d>>>,
}

impl<'d> CipherSuite<'d> {
    pub fn new(node: Node<'d>) -> Self {
        Self {
            node,
            key_exchange: OnceLock::new(),
        }
    }

    /// The bound `<cipherSuite>` element
    pub fn node(&self) -> Node<'d> {
        self.node
    }

    /// OpenSSL cipher suite name
    pub fn name(&self) -> Result<&'d str> {
        required_attribute(self.node, "name")
    }

    pub fn openssl_name(&self) -> Result<&'d str> {
        self.name()
    }

    /// RFC name for this suite, `None` when the catalog has no mapping
    pub fn rfc_name(&self) -> Result<Option<&'static str>> {
        Ok(rfc_name(self.name()?))
    }

    /// Outcome of the handshake attempted with this suite
    pub fn connection_status(&self) -> Option<&'d str> {
        self.node.attribute("connectionStatus")
    }

    /// Anonymous (unauthenticated) suite. An absent attribute reads as `false`.
    pub fn anonymous(&self) -> Result<bool> {
        Ok(boolean_attribute(self.node, "anonymous")?.unwrap_or(false))
    }

    /// Symmetric key size in bits
    pub fn key_size(&self) -> Result<Option<u32>> {
        integer_attribute(self.node, "keySize")
    }

    pub fn key_exchange(&self) -> Option<&KeyExchange<'d>> {
        self.key_exchange
            .get_or_init(|| {
                let node = self.node.child("keyExchange")?;
                tracing::trace!(cipher_suite = %self.node.describe(), "Binding key exchange record");
                Some(KeyExchange::new(node))
            })
            .as_ref()
    }
}

impl fmt::Display for CipherSuite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A nameless suite displays as empty; `name()` reports the error
        write!(f, "{}", self.node.attribute("name").unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::error::ReportError;

    fn suite_doc(xml: &str) -> Document {
        Document::parse_str(xml).unwrap()
    }

    #[test]
    fn test_name_and_rfc_name() {
        let doc = suite_doc(
            r#"<cipherSuite name="ECDHE-RSA-AES128-GCM-SHA256" connectionStatus="HTTP 200 OK" anonymous="False" keySize="128"/>"#,
        );
        let suite = CipherSuite::new(doc.root());

        assert_eq!(suite.name().unwrap(), "ECDHE-RSA-AES128-GCM-SHA256");
        assert_eq!(suite.openssl_name().unwrap(), suite.name().unwrap());
        assert_eq!(
            suite.rfc_name().unwrap(),
            Some("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256")
        );
        assert_eq!(suite.connection_status(), Some("HTTP 200 OK"));
        assert_eq!(suite.key_size().unwrap(), Some(128));
        assert!(!suite.anonymous().unwrap());
    }

    #[test]
    fn test_unmapped_rfc_name() {
        let doc = suite_doc(r#"<cipherSuite name="NOT-A-REAL-CIPHER"/>"#);
        let suite = CipherSuite::new(doc.root());

        assert_eq!(suite.rfc_name().unwrap(), None);
    }

    #[test]
    fn test_legacy_rc4_md5_mapping() {
        let doc = suite_doc(r#"<cipherSuite name="RC4-MD5"/>"#);
        let suite = CipherSuite::new(doc.root());

        assert_eq!(suite.rfc_name().unwrap(), Some("SSL_CK_RC4_128_WITH_MD5"));
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let doc = suite_doc(r#"<cipherSuite connectionStatus="rejected"/>"#);
        let suite = CipherSuite::new(doc.root());

        assert!(matches!(
            suite.name(),
            Err(ReportError::MissingAttribute { ref attribute, .. }) if attribute == "name"
        ));
        assert!(suite.rfc_name().is_err());
        assert_eq!(suite.to_string(), "");
    }

    #[test]
    fn test_anonymous_literals() {
        let doc = suite_doc(
            r#"<suites><cipherSuite name="ADH-AES128-SHA" anonymous="true"/><cipherSuite name="AES128-SHA" anonymous="false"/><cipherSuite name="AES256-SHA" anonymous="yes"/><cipherSuite name="NULL-SHA"/></suites>"#,
        );
        let suites: Vec<CipherSuite> = doc.root().children().map(CipherSuite::new).collect();

        assert!(suites[0].anonymous().unwrap());
        assert!(!suites[1].anonymous().unwrap());
        let err = suites[2].anonymous().unwrap_err();
        assert!(matches!(err, ReportError::InvalidBooleanLiteral { .. }));
        assert!(err.to_string().contains("AES256-SHA"));
        assert!(!suites[3].anonymous().unwrap());
    }

    #[test]
    fn test_key_exchange_absent() {
        let doc = suite_doc(r#"<cipherSuite name="AES128-SHA"/>"#);
        let suite = CipherSuite::new(doc.root());

        assert!(suite.key_exchange().is_none());
        assert!(suite.key_exchange().is_none());
    }

    #[test]
    fn test_key_exchange_is_memoized() {
        let doc = suite_doc(
            r#"<cipherSuite name="DHE-RSA-AES128-SHA"><keyExchange Type="DH" GroupSize="2048"/></cipherSuite>"#,
        );
        let suite = CipherSuite::new(doc.root());

        let first = suite.key_exchange().unwrap();
        let second = suite.key_exchange().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.node(), doc.root().child("keyExchange").unwrap());
        assert!(first.is_dh());
    }

    #[test]
    fn test_display_is_name() {
        let doc = suite_doc(r#"<cipherSuite name="DES-CBC3-SHA"/>"#);
        let suite = CipherSuite::new(doc.root());

        assert_eq!(suite.to_string(), suite.name().unwrap());
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let doc = suite_doc(
            r#"<cipherSuite name="AES128-SHA" connectionStatus="ok" anonymous="False"/>"#,
        );
        let suite = CipherSuite::new(doc.root());

        for _ in 0..3 {
            assert_eq!(suite.name().unwrap(), "AES128-SHA");
            assert_eq!(suite.rfc_name().unwrap(), Some("TLS_RSA_WITH_AES_128_CBC_SHA"));
            assert_eq!(suite.connection_status(), Some("ok"));
            assert!(!suite.anonymous().unwrap());
        }
    }

    #[test]
    fn test_accessor_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CipherSuite<'static>>();
    }
}
