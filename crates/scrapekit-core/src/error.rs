//! Error types for the ScrapeKit core library
//!
//! Key mapping itself is total over any input record, so the normalization
//! transforms return plain values. Errors here originate in the typed schema
//! layer and are caught and downgraded by the document normalizer.

use thiserror::Error;

/// Main error type for ScrapeKit core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Typed metadata construction rejected a mapped record
    #[error("Metadata construction failed: {message}")]
    MetadataConstruction {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;
