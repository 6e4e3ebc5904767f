//! Serialization of the route table as a data manifest and writing of generated artifacts.
//!
//! The JSON and YAML renderings carry the same entries as the TypeScript module, for
//! servers that load their handlers from a registry file instead of compiled imports.

use crate::error::Result as ManifestResult;
use crate::table::RouteTable;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes a route table to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`crate::error::Error::SerializationError`] if serialization fails.
pub fn serialize_json(table: &RouteTable) -> ManifestResult<String> {
    debug!("Serializing route table to JSON");
    Ok(serde_json::to_string_pretty(table)?)
}

/// Serializes a route table to YAML.
///
/// # Errors
///
/// Returns [`crate::error::Error::SerializationError`] if serialization fails.
pub fn serialize_yaml(table: &RouteTable) -> ManifestResult<String> {
    debug!("Serializing route table to YAML");
    Ok(serde_yaml::to_string(table)?)
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does. Missing parent
/// directories are created.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
