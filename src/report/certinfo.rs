// Certificate Info - Represents the `<certinfo>` element of a target

use super::ocsp_response::OcspResponse;
use super::types::boolean_attribute;
use crate::Result;
use crate::document::Node;
use std::sync::OnceLock;

#[derive(Debug)]
pub struct CertInfo<'d> {
    node: Node<'d>,
    ocsp_response: OnceLock<Option<OcspResponse<'d>>>,
}

impl<'d> CertInfo<'d> {
    pub fn new(node: Node<'d>) -> Self {
        Self {
            node,
            ocsp_response: OnceLock::new(),
        }
    }

    pub fn node(&self) -> Node<'d> {
        self.node
    }

    pub fn title(&self) -> Option<&'d str> {
        self.node.attribute("title")
    }

    /// `ocspStapling/@isSupported`; `None` when stapling was not reported
    pub fn ocsp_stapling_supported(&self) -> Result<Option<bool>> {
        match self.node.child("ocspStapling") {
            Some(stapling) => boolean_attribute(stapling, "isSupported"),
            None => Ok(None),
        }
    }

    /// Stapled OCSP response, found directly under `<certinfo>` or under `<ocspStapling>`
    pub fn ocsp_response(&self) -> Option<&OcspResponse<'d>> {
        self.ocsp_response
            .get_or_init(|| {
                self.node
                    .child("ocspResponse")
                    .or_else(|| self.node.at("ocspStapling/ocspResponse"))
                    .map(OcspResponse::new)
            })
            .as_ref()
    }

    /// `receivedCertificateChain/@hasMustStapleExtension`
    pub fn has_must_staple_extension(&self) -> Result<Option<bool>> {
        match self.node.child("receivedCertificateChain") {
            Some(chain) => boolean_attribute(chain, "hasMustStapleExtension"),
            None => Ok(None),
        }
    }

    /// Number of certificates the server sent
    pub fn received_certificate_count(&self) -> usize {
        self.node
            .child("receivedCertificateChain")
            .map(|chain| chain.children_named("certificate").count())
            .unwrap_or(0)
    }
}
