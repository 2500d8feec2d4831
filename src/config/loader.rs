//! Configuration file reading and writing
//!
//! The configuration file is a single JSON document mapping
//! group → key → value. It is always rewritten in full.

use super::paths;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Configuration file loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read the configuration document from a file
    ///
    /// Fails if the file is missing, unreadable, not JSON, or not a JSON object.
    pub fn load_file(path: &Path) -> Result<Value> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let document: Value = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if !document.is_object() {
            return Err(anyhow::anyhow!(
                "Config file is not a JSON object: {}",
                path.display()
            ));
        }

        Ok(document)
    }

    /// Save a configuration document to a file
    pub fn save(document: &Value, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let json = serde_json::to_string_pretty(document)
            .context("Failed to serialize configuration to JSON")?;

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
