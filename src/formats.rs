//! Output formats for resolved documents
//!
//! Serializes a [`Document`] to a machine-readable representation. The JSON
//! output mirrors the document exactly: an object per scope, string values
//! for assignments, nested objects for sections, keys in declaration order.

use crate::document::Document;

/// Render a document as pretty-printed JSON
pub fn to_json(document: &Document) -> String {
    // A document is only strings and maps of strings; serialization of such
    // a structure does not fail
    serde_json::to_string_pretty(document).unwrap_or_default()
}
