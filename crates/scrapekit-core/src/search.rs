//! Search-result normalization
//!
//! Search results are flat; a single key-mapping pass selected by the
//! declared result type is all that is needed. No sub-structures recurse.

use crate::mapper::map_keys;
use crate::tables::{FieldContext, MappingTable};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The declared result-type tag of a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultKind {
    Web,
    Images,
    News,
}

impl SearchResultKind {
    /// The mapping context governing this result type.
    pub fn context(self) -> FieldContext {
        match self {
            SearchResultKind::Web => FieldContext::SearchWeb,
            SearchResultKind::Images => FieldContext::SearchImages,
            SearchResultKind::News => FieldContext::SearchNews,
        }
    }
}

/// Normalize a single search result record.
///
/// Web results carry no renames; image results rename `imageUrl`,
/// `imageWidth`, and `imageHeight`; news results rename `imageUrl` only.
pub fn normalize_search_result(
    result: &Map<String, Value>,
    kind: SearchResultKind,
) -> Map<String, Value> {
    map_keys(result, &MappingTable::for_context(kind.context()))
}
