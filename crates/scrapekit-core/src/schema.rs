//! Typed schema layer for document metadata
//!
//! This is the "construct from mapping" collaborator the document
//! normalizer hands a canonical-keyed metadata record to. Construction is
//! strict about value types but tolerant of unrecognized keys, which are
//! preserved through the flattened `extra` map.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Validated document metadata with canonical field names.
///
/// Every field is optional; absence on the wire is the common case. Fields
/// whose wire representation varies (`keywords` may be a string or a list,
/// `og_locale_alternate` is a list) stay as raw JSON values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,

    // OpenGraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_determiner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_locale_alternate: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_video: Option<String>,

    // Dublin Core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc_terms_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc_date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc_terms_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc_terms_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc_terms_subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc_subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc_terms_keywords: Option<String>,

    // Article
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_tag: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_section: Option<Value>,

    // Response-level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrape_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits_used: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency_limited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency_queue_duration_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Unrecognized keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentMetadata {
    /// Construct typed metadata from a canonical-keyed record.
    ///
    /// Unknown keys land in [`extra`](Self::extra); a value with an
    /// unexpected type for a known field is a construction failure.
    pub fn from_mapped(mapped: Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(mapped)).map_err(|source| {
            Error::MetadataConstruction {
                message: source.to_string(),
                source,
            }
        })
    }

    /// Serialize back to a flat record, omitting absent fields.
    pub fn to_record(&self) -> Result<Map<String, Value>> {
        let value = serde_json::to_value(self).map_err(|source| Error::Json {
            message: "failed to serialize document metadata".to_string(),
            source,
        })?;
        // Struct serialization always yields an object
        Ok(value.as_object().cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_construct_from_mapped_record() {
        let mapped = as_map(json!({
            "title": "Example",
            "status_code": 200,
            "source_url": "https://example.com",
        }));

        let metadata = DocumentMetadata::from_mapped(mapped).unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Example"));
        assert_eq!(metadata.status_code, Some(200));
        assert_eq!(metadata.source_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_unknown_keys_preserved_in_extra() {
        let mapped = as_map(json!({
            "title": "Example",
            "customHeader": "x-value",
        }));

        let metadata = DocumentMetadata::from_mapped(mapped).unwrap();
        assert_eq!(metadata.extra["customHeader"], json!("x-value"));

        let record = metadata.to_record().unwrap();
        assert_eq!(record["customHeader"], json!("x-value"));
    }

    #[test]
    fn test_unexpected_type_is_construction_failure() {
        let mapped = as_map(json!({"status_code": "not-a-number"}));
        let err = DocumentMetadata::from_mapped(mapped).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::MetadataConstruction { .. }
        ));
    }

    #[test]
    fn test_to_record_omits_absent_fields() {
        let mapped = as_map(json!({"title": "Example"}));
        let metadata = DocumentMetadata::from_mapped(mapped).unwrap();
        let record = metadata.to_record().unwrap();

        assert_eq!(record.len(), 1);
        assert_eq!(record["title"], json!("Example"));
    }

    #[test]
    fn test_varying_wire_shapes() {
        // keywords may arrive as a string or a list
        for keywords in [json!("a, b"), json!(["a", "b"])] {
            let mapped = as_map(json!({"keywords": keywords}));
            let metadata = DocumentMetadata::from_mapped(mapped).unwrap();
            assert_eq!(metadata.keywords, Some(keywords));
        }
    }
}
