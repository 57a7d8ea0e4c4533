//! Configuration structures for extraction and output.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PoexError, Result};

/// Main configuration for the poex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoexConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

impl Default for PoexConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Scope the grand-total search to the summary section instead of taking
    /// the first `Total:` match in document order.
    pub scoped_total: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            scoped_total: false,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,

    /// Re-format currency tokens ($1,006.86 -> $1006.86) in text output.
    pub normalize_prices: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            normalize_prices: false,
        }
    }
}

impl PoexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| PoexError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| PoexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PoexConfig::default();
        assert!(!config.extraction.scoped_total);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: PoexConfig =
            serde_json::from_str(r#"{"extraction": {"scoped_total": true}}"#).unwrap();
        assert!(config.extraction.scoped_total);
        assert!(config.output.pretty_json);
    }
}
