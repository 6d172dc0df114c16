//! The `vyges-metadata.json` document and its acquisition states.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::MetadataErrorKind;

/// Top-level fields every catalog entry must carry, in report order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "version",
    "description",
    "license",
    "target",
    "design_type",
    "maturity",
];

/// Recognized optional top-level fields, in report order.
pub const OPTIONAL_FIELDS: [&str; 8] = [
    "parameters",
    "interfaces",
    "files",
    "test",
    "flows",
    "meta",
    "created",
    "updated",
];

/// Default metadata file name at a project root.
pub const METADATA_FILE_NAME: &str = "vyges-metadata.json";

/// A parsed metadata document: field name to arbitrary JSON value.
///
/// Unknown fields are preserved but never scored. Lookups go through
/// [`MetadataDocument::get_field`], which tolerates missing or mistyped
/// intermediate keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataDocument {
    fields: Map<String, Value>,
}

impl MetadataDocument {
    /// Wrap an already decoded JSON object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a document from a decoded JSON value.
    ///
    /// Only objects are accepted at the root.
    pub fn from_value(value: Value) -> Result<Self, MetadataErrorKind> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(MetadataErrorKind::NotAnObject(value_kind(&other))),
        }
    }

    /// Look up a value by dot-separated path (`"meta.ai_generation.mode"`).
    ///
    /// Returns `None` when any segment is missing or when an intermediate
    /// value is not an object. A key holding JSON `null` is returned as
    /// `Some(Value::Null)`.
    #[must_use]
    pub fn get_field(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.fields.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Whether the key at `path` exists, regardless of its value.
    #[must_use]
    pub fn has_key(&self, path: &str) -> bool {
        self.get_field(path).is_some()
    }

    /// Whether the key at `path` exists and is not `null`.
    #[must_use]
    pub fn is_present(&self, path: &str) -> bool {
        self.get_field(path).is_some_and(|v| !v.is_null())
    }

    /// String value at `path`, if it is a string.
    #[must_use]
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get_field(path).and_then(Value::as_str)
    }

    /// Array value at `path`, if it is an array.
    #[must_use]
    pub fn get_array(&self, path: &str) -> Option<&Vec<Value>> {
        self.get_field(path).and_then(Value::as_array)
    }

    /// Access the raw top-level mapping.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Number of top-level fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no top-level fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// JSON type name used in diagnostics.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// What the loader produced for a metadata file.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataInput {
    /// No metadata file at the expected location
    Missing,
    /// The file exists but could not be decoded into an object
    Malformed(String),
    /// A decoded document
    Document(MetadataDocument),
}

impl MetadataInput {
    /// The document, if one was decoded.
    #[must_use]
    pub const fn document(&self) -> Option<&MetadataDocument> {
        match self {
            Self::Document(doc) => Some(doc),
            _ => None,
        }
    }

    /// Whether a metadata file was found at all.
    #[must_use]
    pub const fn exists(&self) -> bool {
        !matches!(self, Self::Missing)
    }
}

impl From<MetadataDocument> for MetadataInput {
    fn from(doc: MetadataDocument) -> Self {
        Self::Document(doc)
    }
}
