//! JSON output formatting

use serde::Serialize;

/// Format a single result as JSON
pub fn format_one<T: Serialize>(item: &T) -> String {
    serde_json::to_string_pretty(item)
        .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize result: {}"}}"#, e))
}

/// Format results as JSON; a single result is not wrapped in an array
pub fn format_many<T: Serialize>(items: &[T]) -> String {
    match items {
        [single] => format_one(single),
        _ => serde_json::to_string_pretty(items)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize results: {}"}}"#, e)),
    }
}
