//! Configuration for a scan run.
//!
//! Constructed once at startup and passed explicitly into the locator,
//! parser, and reporter; there is no process-wide mutable state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Policy deciding which extracted records are kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordPolicy {
    /// Keep a record if at least one field was extracted.
    Any,
    /// Keep a record only if all seven fields were extracted.
    All,
}

impl Default for RecordPolicy {
    fn default() -> Self {
        Self::Any
    }
}

impl RecordPolicy {
    /// Whether a record qualifies for reporting under this policy.
    pub fn keeps(&self, record: &crate::models::record::InvoiceRecord) -> bool {
        match self {
            Self::Any => record.has_any_field(),
            Self::All => record.is_complete(),
        }
    }
}

/// Main configuration for a scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Root directory to scan recursively.
    pub root: PathBuf,

    /// Directory the report file is written to.
    pub output_dir: PathBuf,

    /// Record completeness policy.
    pub policy: RecordPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            policy: RecordPolicy::default(),
        }
    }
}

impl ScanConfig {
    /// Create a configuration for the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Set the report output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the record completeness policy.
    pub fn with_policy(mut self, policy: RecordPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
