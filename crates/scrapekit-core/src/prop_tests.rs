//! Property-based tests for the normalization engine
//!
//! These verify the contract-level properties that hold for all inputs:
//! key mapping loses no values, and normalization is idempotent.

use crate::document::normalize_document_value;
use crate::mapper::map_keys;
use crate::tables::{FieldContext, MappingTable};
use proptest::collection::hash_map;
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Leaf values as they appear on the wire.
fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,30}".prop_map(Value::String),
    ]
}

/// Flat records with keys that never contain underscores, so generated keys
/// cannot collide with canonical rename targets.
fn flat_record_strategy() -> impl Strategy<Value = Map<String, Value>> {
    hash_map("[a-z][a-zA-Z0-9]{0,12}", leaf_strategy(), 0..8)
        .prop_map(|m| m.into_iter().collect())
}

/// Documents exercising every sub-structure the normalizer visits.
fn document_strategy() -> impl Strategy<Value = Map<String, Value>> {
    (
        flat_record_strategy(),
        proptest::option::of("[a-zA-Z0-9<>/ ]{0,40}"),
        proptest::option::of((
            proptest::option::of(prop_oneof![
                Just("new"),
                Just("same"),
                Just("changed"),
                Just("removed"),
            ]),
            flat_record_strategy(),
        )),
        proptest::option::of((
            proptest::option::of("[0-9]{3}|[a-z]{2,5}"),
            flat_record_strategy(),
        )),
    )
        .prop_map(|(mut record, raw_html, change_tracking, metadata)| {
            if let Some(html) = raw_html {
                record.insert("rawHtml".to_string(), Value::String(html));
            }
            if let Some((status, mut block)) = change_tracking {
                if let Some(status) = status {
                    block.insert("changeStatus".to_string(), Value::String(status.to_string()));
                    block.insert("previousScrapeAt".to_string(), Value::Null);
                }
                record.insert("changeTracking".to_string(), Value::Object(block));
            }
            if let Some((status_code, mut block)) = metadata {
                if let Some(code) = status_code {
                    block.insert("statusCode".to_string(), Value::String(code));
                }
                record.insert("metadata".to_string(), Value::Object(block));
            }
            record
        })
}

proptest! {
    /// Key mapping drops no value and invents none.
    #[test]
    fn prop_map_keys_preserves_values(record in flat_record_strategy()) {
        let table = MappingTable::for_context(FieldContext::Metadata);
        let mapped = map_keys(&record, &table);

        prop_assert_eq!(mapped.len(), record.len());
        for (key, value) in &record {
            let out_key = table.get(key).unwrap_or(key.as_str());
            prop_assert_eq!(mapped.get(out_key), Some(value));
        }
    }

    /// An already-mapped record passes through unchanged.
    #[test]
    fn prop_map_keys_idempotent(record in flat_record_strategy()) {
        let table = MappingTable::for_context(FieldContext::Metadata);
        let once = map_keys(&record, &table);
        let twice = map_keys(&once, &table);
        prop_assert_eq!(once, twice);
    }

    /// normalize(normalize(x)) == normalize(x)
    #[test]
    fn prop_normalize_document_idempotent(doc in document_strategy()) {
        let once = normalize_document_value(&Value::Object(doc));
        let twice = normalize_document_value(&once);
        prop_assert_eq!(once, twice);
    }

    /// Normalization never drops a top-level key.
    #[test]
    fn prop_normalize_document_total(doc in document_strategy()) {
        let normalized = normalize_document_value(&Value::Object(doc.clone()));
        let out = normalized.as_object().expect("object in, object out");
        prop_assert_eq!(out.len(), doc.len());
    }
}
