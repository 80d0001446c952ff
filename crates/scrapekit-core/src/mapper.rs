//! Key rewriting for flat records
//!
//! Copyright (c) 2025 ScrapeKit Team
//! Licensed under the Apache-2.0 license

use crate::tables::MappingTable;
use serde_json::{Map, Value};

/// Rewrite the keys of a flat record through a [`MappingTable`].
///
/// Every key the table maps is emitted under its canonical name; every other
/// key is carried through verbatim. Values are never inspected or
/// transformed. An empty table is the identity.
pub fn map_keys(record: &Map<String, Value>, table: &MappingTable) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, value) in record {
        match table.get(key) {
            Some(canonical) => out.insert(canonical.to_string(), value.clone()),
            None => out.insert(key.clone(), value.clone()),
        };
    }
    out
}
