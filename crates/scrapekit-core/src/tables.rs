//! Per-context key-mapping tables for wire-format field names
//!
//! The remote API emits compound field names with internal capitalization
//! (`statusCode`, `ogTitle`), while ScrapeKit's internal schemas expect
//! snake_case. Each structural context of a response carries its own table;
//! a name mapped in one context has no effect in another.
//!
//! Copyright (c) 2025 ScrapeKit Team
//! Licensed under the Apache-2.0 license

/// Structural context of a response sub-structure, selecting which
/// [`MappingTable`] governs its keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldContext {
    /// Top-level keys of a document record
    TopLevel,
    /// The `metadata` sub-structure of a document
    Metadata,
    /// The change-tracking block of a document
    ChangeTracking,
    /// The `branding` sub-structure of a document
    Branding,
    /// A web search result
    SearchWeb,
    /// An image search result
    SearchImages,
    /// A news search result
    SearchNews,
}

/// Top-level document renames. The document normalizer applies these with
/// the no-overwrite rule rather than through a blind key rewrite.
static TOP_LEVEL: &[(&str, &str)] = &[
    ("rawHtml", "raw_html"),
    ("changeTracking", "change_tracking"),
];

/// Metadata key renames, following the wire format's OpenGraph, Dublin Core,
/// and response-level field spellings.
static METADATA: &[(&str, &str)] = &[
    // OpenGraph
    ("ogTitle", "og_title"),
    ("ogDescription", "og_description"),
    ("ogUrl", "og_url"),
    ("ogImage", "og_image"),
    ("ogAudio", "og_audio"),
    ("ogDeterminer", "og_determiner"),
    ("ogLocale", "og_locale"),
    ("ogLocaleAlternate", "og_locale_alternate"),
    ("ogSiteName", "og_site_name"),
    ("ogVideo", "og_video"),
    // Dublin Core and misc
    ("dcTermsCreated", "dc_terms_created"),
    ("dcDateCreated", "dc_date_created"),
    ("dcDate", "dc_date"),
    ("dcTermsType", "dc_terms_type"),
    ("dcType", "dc_type"),
    ("dcTermsAudience", "dc_terms_audience"),
    ("dcTermsSubject", "dc_terms_subject"),
    ("dcSubject", "dc_subject"),
    ("dcDescription", "dc_description"),
    ("dcTermsKeywords", "dc_terms_keywords"),
    ("modifiedTime", "modified_time"),
    ("publishedTime", "published_time"),
    ("articleTag", "article_tag"),
    ("articleSection", "article_section"),
    // Response-level
    ("sourceURL", "source_url"),
    ("statusCode", "status_code"),
    ("scrapeId", "scrape_id"),
    ("numPages", "num_pages"),
    ("contentType", "content_type"),
    ("proxyUsed", "proxy_used"),
    ("cacheState", "cache_state"),
    ("cachedAt", "cached_at"),
    ("creditsUsed", "credits_used"),
    ("concurrencyLimited", "concurrency_limited"),
    ("concurrencyQueueDurationMs", "concurrency_queue_duration_ms"),
];

// "visibility" is already snake_case on the wire.
static CHANGE_TRACKING: &[(&str, &str)] = &[
    ("changeStatus", "change_status"),
    ("previousScrapeAt", "previous_scrape_at"),
];

static BRANDING: &[(&str, &str)] = &[("colorScheme", "color_scheme")];

static SEARCH_WEB: &[(&str, &str)] = &[];

static SEARCH_IMAGES: &[(&str, &str)] = &[
    ("imageUrl", "image_url"),
    ("imageWidth", "image_width"),
    ("imageHeight", "image_height"),
];

static SEARCH_NEWS: &[(&str, &str)] = &[("imageUrl", "image_url")];

/// An immutable, context-scoped association from an external field name to
/// its canonical equivalent.
///
/// Unmapped names are not stored; absence means "pass through unchanged".
/// Canonical names never appear as sources, so applying a table to an
/// already-canonical record is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingTable {
    entries: &'static [(&'static str, &'static str)],
}

impl MappingTable {
    /// Return the table governing the given context.
    ///
    /// The set of contexts is deliberately closed: recursion into
    /// sub-structures is enumerated here rather than performed by a generic
    /// deep key-walk, so opaque payload blocks (diff/comparison data) are
    /// never renamed by accident.
    pub fn for_context(context: FieldContext) -> Self {
        let entries = match context {
            FieldContext::TopLevel => TOP_LEVEL,
            FieldContext::Metadata => METADATA,
            FieldContext::ChangeTracking => CHANGE_TRACKING,
            FieldContext::Branding => BRANDING,
            FieldContext::SearchWeb => SEARCH_WEB,
            FieldContext::SearchImages => SEARCH_IMAGES,
            FieldContext::SearchNews => SEARCH_NEWS,
        };
        Self { entries }
    }

    /// Look up the canonical name for an external key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(external, _)| *external == key)
            .map(|(_, canonical)| *canonical)
    }

    /// Whether the table defines a rename for this key.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over `(external, canonical)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, &'static str)> {
        self.entries.iter()
    }

    /// Number of renames defined by this table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is the identity (no renames).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
