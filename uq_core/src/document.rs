//! # Configuration Document
//!
//! The on-disk configuration is a single JSON object. Each panel owns one
//! top-level key and writes its whole state under it:
//!
//! ```text
//! {
//!   "randomVariables": [ ... ],   // RandomVariablePanel
//!   "edps": [ ... ],              // EdpPanel
//!   "fem": { ... },               // FemPanel
//!   "samplingMethod": { ... }     // SamplingPanel
//! }
//! ```
//!
//! Sections never overlap: [`Document::insert_section`] rejects a key that
//! is already present.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{UqError, UqResult};

/// A JSON object assembled from panel contributions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Map<String, Value>,
}

/// Result of a lenient parse.
///
/// Malformed text and non-object top levels both produce an empty document,
/// with `warning` describing what was discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    pub document: Document,
    pub warning: Option<String>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Document::default()
    }

    /// Add a panel's section under `key`.
    ///
    /// Fails with `DuplicateSection` if another panel already wrote `key`.
    pub fn insert_section(&mut self, key: &str, value: impl Serialize) -> UqResult<()> {
        if self.root.contains_key(key) {
            return Err(UqError::duplicate_section(key));
        }
        let value = serde_json::to_value(value)?;
        self.root.insert(key.to_string(), value);
        Ok(())
    }

    /// Decode a section into a typed value.
    ///
    /// Returns `Ok(None)` when the key is absent.
    pub fn decode_section<T: DeserializeOwned>(&self, key: &str) -> UqResult<Option<T>> {
        match self.root.get(key) {
            None => Ok(None),
            Some(value) => T::deserialize(value).map(Some).map_err(|e| {
                UqError::serialization(format!("Invalid '{}' section: {}", key, e))
            }),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// Top-level keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Serialize as pretty-printed JSON text
    pub fn to_json_string(&self) -> UqResult<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Parse JSON text, falling back to an empty document.
    pub fn parse_lenient(text: &str) -> ParsedDocument {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(root)) => ParsedDocument {
                document: Document { root },
                warning: None,
            },
            Ok(other) => ParsedDocument {
                document: Document::new(),
                warning: Some(format!(
                    "top-level JSON value is {}, not an object",
                    json_kind(&other)
                )),
            },
            Err(e) => ParsedDocument {
                document: Document::new(),
                warning: Some(format!("malformed JSON: {}", e)),
            },
        }
    }

    /// Parse raw file content, falling back to an empty document.
    ///
    /// Content that is not UTF-8 is discarded the same way malformed JSON is.
    pub fn parse_lenient_bytes(bytes: &[u8]) -> ParsedDocument {
        match std::str::from_utf8(bytes) {
            Ok(text) => Document::parse_lenient(text),
            Err(e) => ParsedDocument {
                document: Document::new(),
                warning: Some(format!("content is not valid UTF-8: {}", e)),
            },
        }
    }

    /// Parse JSON text, rejecting anything that is not an object.
    pub fn parse_strict(text: &str) -> UqResult<Document> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(root) => Ok(Document { root }),
            other => Err(UqError::serialization(format!(
                "top-level JSON value is {}, not an object",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
