//! Template vocabulary loading.
//!
//! Thin deserialization layer for authored vocabularies: a JSON array of
//! `{ "name": ..., "points": [[x, y], ...] }` entries. The on-disk format is
//! this module's concern alone; the core pipeline never performs I/O, and
//! shape validation happens later, in
//! [`TemplateStore::build`](crate::TemplateStore::build).
//!
//! Available with the `serde` feature (on by default).

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::template::RawTemplate;

/// Parse a raw vocabulary from JSON text.
///
/// # Errors
///
/// Returns [`RecognizerError::TemplateParse`](crate::RecognizerError::TemplateParse)
/// on malformed input.
pub fn templates_from_json(json: &str) -> Result<Vec<RawTemplate>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a raw vocabulary from a JSON file.
///
/// # Errors
///
/// Returns [`RecognizerError::TemplateIo`](crate::RecognizerError::TemplateIo)
/// if the file cannot be read, or
/// [`RecognizerError::TemplateParse`](crate::RecognizerError::TemplateParse)
/// if its contents are malformed.
pub fn templates_from_file(path: impl AsRef<Path>) -> Result<Vec<RawTemplate>> {
    let text = fs::read_to_string(path)?;
    templates_from_json(&text)
}

/// Serialize a raw vocabulary to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`RecognizerError::TemplateParse`](crate::RecognizerError::TemplateParse)
/// if serialization fails.
pub fn templates_to_json(templates: &[RawTemplate]) -> Result<String> {
    Ok(serde_json::to_string_pretty(templates)?)
}
