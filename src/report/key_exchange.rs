// Key Exchange - Represents the `<keyExchange>` element of a cipher suite result

use super::types::{hex_attribute, integer_attribute};
use crate::Result;
use crate::document::Node;
use std::fmt;

/// Key exchange algorithm family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyExchangeKind {
    /// Finite-field Diffie-Hellman
    Dh,
    /// Elliptic-curve Diffie-Hellman
    Ecdh,
    Unknown,
}

impl KeyExchangeKind {
    pub fn from_type(value: &str) -> Self {
        match value {
            "DH" => KeyExchangeKind::Dh,
            "ECDH" => KeyExchangeKind::Ecdh,
            _ => KeyExchangeKind::Unknown,
        }
    }
}

impl fmt::Display for KeyExchangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyExchangeKind::Dh => write!(f, "DH"),
            KeyExchangeKind::Ecdh => write!(f, "ECDH"),
            KeyExchangeKind::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Key exchange parameters negotiated with one cipher suite.
///
/// Group parameters (`A`, `B`, `Generator`, `Order`, `Prime`, `Seed`) are
/// hex strings as written by sslyze; the `*_bytes` accessors decode them.
#[derive(Debug, Clone, Copy)]
pub struct KeyExchange<'d> {
    node: Node<'d>,
}

impl<'d> KeyExchange<'d> {
    pub fn new(node: Node<'d>) -> Self {
        Self { node }
    }

    /// The bound `<keyExchange>` element
    pub fn node(&self) -> Node<'d> {
        self.node
    }

    /// Raw `Type` attribute (`DH`, `ECDH`)
    pub fn key_type(&self) -> Option<&'d str> {
        self.node.attribute("Type")
    }

    pub fn kind(&self) -> Option<KeyExchangeKind> {
        self.key_type().map(KeyExchangeKind::from_type)
    }

    pub fn is_dh(&self) -> bool {
        self.kind() == Some(KeyExchangeKind::Dh)
    }

    pub fn is_ecdh(&self) -> bool {
        self.kind() == Some(KeyExchangeKind::Ecdh)
    }

    /// Group size in bits
    pub fn group_size(&self) -> Result<Option<u32>> {
        integer_attribute(self.node, "GroupSize")
    }

    pub fn cofactor(&self) -> Result<Option<u32>> {
        integer_attribute(self.node, "Cofactor")
    }

    /// Curve coefficient `a`
    pub fn a(&self) -> Option<&'d str> {
        self.node.attribute("A")
    }

    /// Curve coefficient `b`
    pub fn b(&self) -> Option<&'d str> {
        self.node.attribute("B")
    }

    pub fn field_type(&self) -> Option<&'d str> {
        self.node.attribute("Field_Type")
    }

    pub fn generator(&self) -> Option<&'d str> {
        self.node.attribute("Generator")
    }

    pub fn generator_type(&self) -> Option<&'d str> {
        self.node.attribute("GeneratorType")
    }

    pub fn order(&self) -> Option<&'d str> {
        self.node.attribute("Order")
    }

    pub fn prime(&self) -> Option<&'d str> {
        self.node.attribute("Prime")
    }

    pub fn seed(&self) -> Option<&'d str> {
        self.node.attribute("Seed")
    }

    pub fn prime_bytes(&self) -> Result<Option<Vec<u8>>> {
        hex_attribute(self.node, "Prime")
    }

    pub fn generator_bytes(&self) -> Result<Option<Vec<u8>>> {
        hex_attribute(self.node, "Generator")
    }

    pub fn order_bytes(&self) -> Result<Option<Vec<u8>>> {
        hex_attribute(self.node, "Order")
    }
}
