// sslyze-report - Typed, read-only object model over sslyze XML scan reports
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! sslyze-report exposes the XML report written by the sslyze TLS/SSL scanner
//! as typed accessors: targets, per-protocol cipher suite lists, key exchange
//! parameters and certificate/OCSP status. It also ships a static catalog
//! mapping OpenSSL cipher suite names to their RFC names.
//!
//! Nothing here scans, connects or writes XML. A report is parsed once into a
//! [`Document`] and every accessor borrows nodes from it.

pub mod config;
pub mod data;
pub mod document;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use crate::config::ReportConfig;
pub use crate::data::rfc_names::{RFC_NAMES, RfcNameCatalog, rfc_name};
pub use crate::document::{Document, Node};
pub use crate::error::ReportError;
pub use crate::report::{
    CertInfo, CipherSuite, KeyExchange, KeyExchangeKind, OcspResponse, ProtocolScan,
    ProtocolVersion, Report, Target,
};

/// Result type for sslyze-report operations
pub type Result<T> = std::result::Result<T, ReportError>;
