// Error types for sslyze-report
//
// Every accessor error names the offending element (its path plus an identifying
// attribute) so callers can report which cipher suite or target was malformed.

use std::io;
use thiserror::Error;

/// Main error type for report operations
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required attribute is absent from the bound element
    #[error("Missing required attribute '{attribute}' on {element}")]
    MissingAttribute { element: String, attribute: String },

    /// A boolean attribute holds text outside the accepted literal set
    #[error("Invalid boolean literal {value:?} for '{attribute}' on {element}")]
    InvalidBooleanLiteral {
        element: String,
        attribute: String,
        value: String,
    },

    /// An integer attribute could not be parsed
    #[error("Invalid integer {value:?} for '{attribute}' on {element}: {source}")]
    InvalidInteger {
        element: String,
        attribute: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A decimal attribute could not be parsed
    #[error("Invalid decimal {value:?} for '{attribute}' on {element}: {source}")]
    InvalidDecimal {
        element: String,
        attribute: String,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A hex-encoded parameter could not be decoded
    #[error("Invalid hex value for '{attribute}' on {element}: {source}")]
    InvalidHex {
        element: String,
        attribute: String,
        value: String,
        #[source]
        source: hex::FromHexError,
    },

    /// Low-level XML reader errors
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    /// Well-formed tokens that do not form a single-rooted element tree
    #[error("Malformed report document: {details}")]
    MalformedDocument { details: String },

    /// Report file exceeds the configured size limit
    #[error("Report document is {size} bytes (limit: {limit})")]
    DocumentTooLarge { size: u64, limit: u64 },

    /// File system errors
    #[error("File system error: {path}: {source}")]
    FileSystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Invalid TOML configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] toml::de::Error),

    /// Configuration could not be rendered back to TOML
    #[error("Configuration serialization error: {0}")]
    ConfigSerializeError(#[from] toml::ser::Error),
}

impl ReportError {
    /// Description of the element the error refers to, when there is one
    pub fn element(&self) -> Option<&str> {
        match self {
            ReportError::MissingAttribute { element, .. }
            | ReportError::InvalidBooleanLiteral { element, .. }
            | ReportError::InvalidInteger { element, .. }
            | ReportError::InvalidDecimal { element, .. }
            | ReportError::InvalidHex { element, .. } => Some(element.as_str()),
            _ => None,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for ReportError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        ReportError::XmlParse(quick_xml::Error::InvalidAttr(err))
    }
}
