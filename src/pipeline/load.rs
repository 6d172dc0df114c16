//! Metadata acquisition.
//!
//! Turns a file on disk (or text in memory) into a [`MetadataInput`]. These
//! functions never fail: a missing file and a broken file are both states
//! the scorer knows how to report.

use std::path::Path;

use serde_json::Value;

use crate::model::{MetadataDocument, MetadataInput};

/// Message recorded when the document root is valid JSON but not an object.
pub const NOT_AN_OBJECT_MESSAGE: &str = "expected a JSON object at document root";

/// Load a metadata file.
///
/// An absent file yields [`MetadataInput::Missing`]; an unreadable or
/// undecodable one yields [`MetadataInput::Malformed`].
pub fn load_metadata(path: &Path) -> MetadataInput {
    if !path.exists() {
        tracing::debug!("No metadata file at {}", path.display());
        return MetadataInput::Missing;
    }

    match std::fs::read_to_string(path) {
        Ok(text) => {
            tracing::debug!("Read metadata file {} ({} bytes)", path.display(), text.len());
            parse_metadata_str(&text)
        }
        Err(e) => {
            tracing::warn!("Could not read metadata file {}: {e}", path.display());
            MetadataInput::Malformed(e.to_string())
        }
    }
}

/// Decode metadata text.
pub fn parse_metadata_str(text: &str) -> MetadataInput {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Metadata is not valid JSON: {e}");
            return MetadataInput::Malformed(e.to_string());
        }
    };

    match MetadataDocument::from_value(value) {
        Ok(doc) => MetadataInput::Document(doc),
        Err(e) => {
            tracing::warn!("Metadata rejected: {e}");
            MetadataInput::Malformed(NOT_AN_OBJECT_MESSAGE.to_string())
        }
    }
}
