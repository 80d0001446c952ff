//! Value-level coercions applied after key mapping
//!
//! Copyright (c) 2025 ScrapeKit Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Coerce a textual status code into an integer.
///
/// The server sometimes sends `"200"` where the schema expects `200`. A
/// value that is not a base-10 integer string is returned unchanged; parse
/// failure is not an error.
pub fn coerce_status_code(value: Value) -> Value {
    match value {
        Value::String(s) => match s.parse::<i64>() {
            Ok(n) => Value::Number(n.into()),
            Err(_) => {
                log::debug!("status_code {s:?} is not an integer, leaving as-is");
                Value::String(s)
            }
        },
        other => other,
    }
}
