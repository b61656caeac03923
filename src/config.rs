// Report Configuration - Document loading limits and parsing options

use crate::Result;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Largest report file accepted by `Document::load_file`, in bytes
    pub max_document_bytes: u64,

    /// Trim surrounding whitespace from element text
    pub trim_text: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: 64 * 1024 * 1024, // 64MB
            trim_text: true,
        }
    }
}

impl ReportConfig {
    /// Load config from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ReportError::FileSystemError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML text; omitted keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
