// OCSP Response - Represents the `<ocspResponse>` element of certificate info

use super::types::required_boolean_attribute;
use crate::Result;
use crate::document::Node;

/// Stapled OCSP response as reported by the certificate info plugin
#[derive(Debug, Clone, Copy)]
pub struct OcspResponse<'d> {
    node: Node<'d>,
}

impl<'d> OcspResponse<'d> {
    pub fn new(node: Node<'d>) -> Self {
        Self { node }
    }

    pub fn node(&self) -> Node<'d> {
        self.node
    }

    /// Whether the response validated against the Mozilla CA store
    pub fn trusted(&self) -> Result<bool> {
        required_boolean_attribute(self.node, "isTrustedByMozillaCAStore")
    }

    pub fn response_status(&self) -> Option<&'d str> {
        self.node.child_text("responseStatus")
    }

    /// `true` when the responder answered with `successful`
    pub fn is_successful(&self) -> bool {
        self.response_status() == Some("successful")
    }

    pub fn response_type(&self) -> Option<&'d str> {
        self.node.child_text("responseType")
    }

    pub fn responder_id(&self) -> Option<&'d str> {
        self.node.child_text("responderID")
    }

    pub fn produced_at(&self) -> Option<&'d str> {
        self.node.child_text("producedAt")
    }

    pub fn version(&self) -> Option<&'d str> {
        self.node.child_text("version")
    }
}
