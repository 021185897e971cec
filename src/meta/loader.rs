//! Page metadata loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::meta::schema::{PageEntry, PageMetaMap};

/// Errors that can occur while loading page metadata.
#[derive(Debug, Error)]
pub enum MetaError {
    /// Reading the file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML document did not parse.
    #[error("Parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON document did not parse.
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension names no known format.
    #[error("unsupported metadata format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// On-disk TOML shape: repeated `[[page]]` tables.
#[derive(Debug, Deserialize)]
struct PageMetaFile {
    #[serde(default, rename = "page")]
    pages: Vec<PageEntry>,
}

/// Parse a TOML document of `[[page]]` entries.
pub fn from_toml_str(document: &str) -> Result<PageMetaMap, MetaError> {
    let file: PageMetaFile = toml::from_str(document)?;
    Ok(PageMetaMap::from_entries(file.pages))
}

/// Parse a JSON array of entries.
pub fn from_json_str(document: &str) -> Result<PageMetaMap, MetaError> {
    let entries: Vec<PageEntry> = serde_json::from_str(document)?;
    Ok(PageMetaMap::from_entries(entries))
}

/// Load page metadata from a file, dispatching on its extension.
/// The extension is checked before any IO happens.
pub fn from_file(path: &Path) -> Result<PageMetaMap, MetaError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => from_toml_str(&fs::read_to_string(path)?),
        Some("json") => from_json_str(&fs::read_to_string(path)?),
        _ => Err(MetaError::UnsupportedFormat(path.to_path_buf())),
    }
}
