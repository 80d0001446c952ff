//! Document normalization orchestration
//!
//! Walks the known sub-structures of a raw document record (top-level keys,
//! `metadata`, the change-tracking block, `branding`) and applies the
//! appropriate mapping table to each. Recursion is bounded and explicit:
//! only the sub-structures enumerated here are visited, one level deep, so
//! server-generated payloads such as diff/comparison blocks inside
//! change-tracking are never renamed.
//!
//! Copyright (c) 2025 ScrapeKit Team
//! Licensed under the Apache-2.0 license

use crate::coerce::coerce_status_code;
use crate::mapper::map_keys;
use crate::schema::DocumentMetadata;
use crate::tables::{FieldContext, MappingTable};
use serde_json::{Map, Value};

/// Outcome of the typed-construction attempt for the `metadata`
/// sub-structure.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataOutcome {
    /// Construction succeeded; the validated value is carried here while the
    /// record keeps the mapped metadata map.
    Typed(DocumentMetadata),
    /// Construction was rejected; the mapped raw map in the record is the
    /// fallback.
    Fallback,
    /// The document had no `metadata` object.
    Absent,
}

/// A document record with canonical key names, plus the typed-metadata
/// outcome for callers that care whether strict construction succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDocument {
    /// The canonical-keyed record. Unknown keys keep their original spelling
    /// and value at every level.
    pub record: Map<String, Value>,
    /// Whether `metadata` validated against the typed schema.
    pub metadata: MetadataOutcome,
}

impl NormalizedDocument {
    /// Consume the normalized document, keeping only the record.
    pub fn into_record(self) -> Map<String, Value> {
        self.record
    }

    /// Consume the normalized document into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.record)
    }
}

/// Normalize a raw document record from the API into canonical shape:
///
/// - top-level `rawHtml` -> `raw_html`, `changeTracking` -> `change_tracking`
/// - change-tracking inner keys to snake_case (one level only)
/// - metadata keys to snake_case, with `status_code` coerced to an integer
///   and typed construction attempted
/// - `branding.colorScheme` -> `branding.color_scheme`
///
/// Every rename is conditional on the canonical key's absence: when a record
/// already carries the canonical name, the external spelling is left
/// untouched and both keys coexist. The input is not mutated.
pub fn normalize_document(doc: &Map<String, Value>) -> NormalizedDocument {
    let mut record = doc.clone();

    apply_top_level(&mut record);
    let metadata = apply_metadata(&mut record);
    apply_branding(&mut record);

    NormalizedDocument { record, metadata }
}

/// [`normalize_document`] for callers holding a plain [`Value`].
///
/// A non-object value is returned unchanged; the typed-metadata outcome is
/// discarded.
pub fn normalize_document_value(doc: &Value) -> Value {
    match doc {
        Value::Object(map) => normalize_document(map).into_value(),
        other => other.clone(),
    }
}

fn apply_top_level(record: &mut Map<String, Value>) {
    let table = MappingTable::for_context(FieldContext::TopLevel);
    let inner = MappingTable::for_context(FieldContext::ChangeTracking);

    for (external, canonical) in table.iter() {
        if record.contains_key(*canonical) || !record.contains_key(*external) {
            continue;
        }
        let Some(mut value) = record.remove(*external) else {
            continue;
        };
        // The change-tracking block remaps its immediate keys as it moves;
        // anything nested deeper (diff/json comparison payloads) passes
        // through untouched. A non-object value moves as-is.
        if *external == "changeTracking" {
            if let Value::Object(block) = &value {
                value = Value::Object(map_keys(block, &inner));
            }
        }
        record.insert((*canonical).to_string(), value);
    }
}

fn apply_metadata(record: &mut Map<String, Value>) -> MetadataOutcome {
    let Some(Value::Object(metadata)) = record.get("metadata") else {
        return MetadataOutcome::Absent;
    };

    let mut mapped = map_keys(metadata, &MappingTable::for_context(FieldContext::Metadata));
    if let Some(status) = mapped.remove("status_code") {
        mapped.insert("status_code".to_string(), coerce_status_code(status));
    }

    let outcome = match DocumentMetadata::from_mapped(mapped.clone()) {
        Ok(typed) => MetadataOutcome::Typed(typed),
        Err(err) => {
            log::debug!("typed metadata construction failed, keeping mapped record: {err}");
            MetadataOutcome::Fallback
        }
    };
    record.insert("metadata".to_string(), Value::Object(mapped));
    outcome
}

fn apply_branding(record: &mut Map<String, Value>) {
    let Some(Value::Object(branding)) = record.get_mut("branding") else {
        return;
    };
    if branding.contains_key("colorScheme") && !branding.contains_key("color_scheme") {
        if let Some(value) = branding.remove("colorScheme") {
            branding.insert("color_scheme".to_string(), value);
        }
    }
}
