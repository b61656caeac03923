// Data module - Static lookup tables

pub mod rfc_names;

// Re-export commonly used types
pub use rfc_names::{RFC_NAMES, RfcNameCatalog, rfc_name};
