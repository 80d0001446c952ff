//! ScrapeKit Core - Response normalization engine
//!
//! This crate sits between the remote API's wire responses and ScrapeKit's
//! typed domain objects. The API emits nested records with mixed-case
//! compound field names; the internal schemas expect snake_case. The engine
//! rewrites keys context by context without losing data and without the
//! typed schema layer knowing about wire naming quirks.
//!
//! # Main Components
//!
//! - **Mapping Tables**: Immutable per-context key-rename tables
//! - **Key Mapper**: Pure key rewrite over a flat record
//! - **Document Normalizer**: Orchestrates top-level and nested renames,
//!   status-code coercion, and typed metadata construction
//! - **Search Result Normalizer**: Single-pass renames per result type
//!
//! # Example
//!
//! ```
//! use scrapekit_core::normalize_document_value;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "rawHtml": "<html/>",
//!     "metadata": {"statusCode": "200"},
//! });
//! let canonical = normalize_document_value(&raw);
//! assert_eq!(canonical["raw_html"], json!("<html/>"));
//! assert_eq!(canonical["metadata"]["status_code"], json!(200));
//! ```

pub mod coerce;
pub mod document;
pub mod error;
pub mod mapper;
pub mod schema;
pub mod search;
pub mod tables;

#[cfg(test)]
mod prop_tests;

// Re-export main types for convenience
pub use coerce::coerce_status_code;
pub use document::{
    normalize_document, normalize_document_value, MetadataOutcome, NormalizedDocument,
};
pub use error::{Error, Result};
pub use mapper::map_keys;
pub use schema::DocumentMetadata;
pub use search::{normalize_search_result, SearchResultKind};
pub use tables::{FieldContext, MappingTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
