//! Container-shape detection
//!
//! Three shapes have shipped over time:
//!
//! - Shape A (legacy nested): `{ "services": [ { "profile": { ... } } ] }`
//! - Shape B: `{ "intention": ..., "data": { ... } }`
//! - Shape C: `{ "intention": ..., <fields flattened at the root> }`
//!
//! The resolver normalizes whichever shape arrives into one canonical entry
//! sequence, preserving document order, so exactly one pipeline runs
//! downstream. A refused document or one matching no shape resolves to an
//! empty sequence: a defined no-op, not an error.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{ProfileDocument, RawFieldEntry};

/// Keys that belong to the response envelope, never to the form
const SYSTEM_KEYS: &[&str] = &[
    "intention",
    "status",
    "refused",
    "reason",
    "tokens_consumed",
    "tokens_breakdown",
    "model_used",
    "confidence",
    "processing_mode",
    "interaction_id",
    "processing_time_ms",
];

/// The extractor's own request summary, not a form field
const REQUEST_CONTEXT_KEY: &str = "request_context";

/// Known noise key the extractor sometimes emits alongside the real title
const NOISE_TITLE_KEY: &str = "title";

/// Which container shape a document matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    /// Legacy `services[0].profile` nesting
    ServiceProfile,
    /// `intention` + `data` object
    IntentionData,
    /// `intention` with fields flattened at the document root
    Flattened,
}

/// Result of shape resolution: the matched shape (if any) and the raw
/// entries in document order
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntries {
    pub shape: Option<DocumentShape>,
    pub entries: Vec<(String, RawFieldEntry)>,
}

impl ResolvedEntries {
    fn empty() -> Self {
        Self {
            shape: None,
            entries: Vec::new(),
        }
    }

    /// Raw entry for a key, if present
    pub fn get(&self, key: &str) -> Option<&RawFieldEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }
}

/// Detect the container shape and extract the raw field entries.
pub fn resolve_entries(doc: &ProfileDocument) -> ResolvedEntries {
    if doc.is_refused() {
        warn!(
            "extractor refused the request: {}",
            doc.refusal_reason().unwrap_or("no reason given")
        );
        return ResolvedEntries::empty();
    }

    let root = doc.as_value();

    // Shape A: services[0].profile
    if let Some(profile) = root
        .get("services")
        .and_then(Value::as_array)
        .and_then(|services| services.first())
        .and_then(|service| service.get("profile"))
        .and_then(Value::as_object)
    {
        debug!("document matched legacy service-profile shape");
        return ResolvedEntries {
            shape: Some(DocumentShape::ServiceProfile),
            entries: collect_entries(profile),
        };
    }

    // Shape B: intention + data
    if root.get("intention").is_some() {
        if let Some(data) = root.get("data").and_then(Value::as_object) {
            debug!("document matched intention+data shape");
            return ResolvedEntries {
                shape: Some(DocumentShape::IntentionData),
                entries: collect_entries(data),
            };
        }

        // Shape C: fields flattened at the root alongside envelope keys
        if let Some(map) = root.as_object() {
            debug!("document matched flattened shape");
            return ResolvedEntries {
                shape: Some(DocumentShape::Flattened),
                entries: collect_entries(map),
            };
        }
    }

    debug!("document matched no known shape, nothing to render");
    ResolvedEntries::empty()
}

/// Filter envelope/noise keys and parse the remaining entries, keeping
/// document order. Entries that are not objects or lack a type tag are
/// silently dropped.
fn collect_entries(map: &Map<String, Value>) -> Vec<(String, RawFieldEntry)> {
    let mut entries = Vec::new();

    for (key, raw) in map {
        if SYSTEM_KEYS.contains(&key.as_str())
            || key == REQUEST_CONTEXT_KEY
            || key == NOISE_TITLE_KEY
        {
            continue;
        }

        match serde_json::from_value::<RawFieldEntry>(raw.clone()) {
            Ok(entry) => entries.push((key.clone(), entry)),
            Err(_) => {
                debug!("dropping field '{}': no usable type tag", key);
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_a_service_profile() {
        let doc = ProfileDocument::from_value(json!({
            "services": [{
                "profile": {
                    "titre_service": {"type": "string", "value": "Plumbing"},
                    "request_context": {"type": "string", "value": "noise"}
                }
            }]
        }));

        let resolved = resolve_entries(&doc);
        assert_eq!(resolved.shape, Some(DocumentShape::ServiceProfile));
        assert_eq!(resolved.entries.len(), 1);
        assert_eq!(resolved.entries[0].0, "titre_service");
    }

    #[test]
    fn test_shape_b_intention_data() {
        let doc = ProfileDocument::from_value(json!({
            "intention": "create_service",
            "data": {
                "description": {"type": "string", "value": "Fix pipes"},
                "title": {"type": "string", "value": "noise"}
            }
        }));

        let resolved = resolve_entries(&doc);
        assert_eq!(resolved.shape, Some(DocumentShape::IntentionData));
        assert_eq!(resolved.entries.len(), 1);
        assert_eq!(resolved.entries[0].0, "description");
    }

    #[test]
    fn test_shape_c_flattened_filters_system_keys() {
        let doc = ProfileDocument::from_value(json!({
            "intention": "create_service",
            "status": "ok",
            "tokens_consumed": 812,
            "model_used": "extractor-v2",
            "category": {"type": "string", "value": "Repairs"},
            "confidence": 0.92
        }));

        let resolved = resolve_entries(&doc);
        assert_eq!(resolved.shape, Some(DocumentShape::Flattened));
        assert_eq!(resolved.entries.len(), 1);
        assert_eq!(resolved.entries[0].0, "category");
    }

    #[test]
    fn test_refusal_short_circuits() {
        let doc = ProfileDocument::from_value(json!({
            "refused": true,
            "reason": "cannot help with that",
            "intention": "create_service",
            "category": {"type": "string", "value": "x"}
        }));

        let resolved = resolve_entries(&doc);
        assert_eq!(resolved.shape, None);
        assert!(resolved.entries.is_empty());
    }

    #[test]
    fn test_no_shape_is_a_noop() {
        let doc = ProfileDocument::from_value(json!({"unrelated": 42}));
        let resolved = resolve_entries(&doc);
        assert_eq!(resolved.shape, None);
        assert!(resolved.entries.is_empty());
    }

    #[test]
    fn test_entries_without_type_tag_dropped() {
        let doc = ProfileDocument::from_value(json!({
            "intention": "create_service",
            "data": {
                "good": {"type": "string", "value": "kept"},
                "untyped": {"value": "dropped"},
                "scalar": "also dropped"
            }
        }));

        let resolved = resolve_entries(&doc);
        assert_eq!(resolved.entries.len(), 1);
        assert_eq!(resolved.entries[0].0, "good");
    }

    #[test]
    fn test_document_order_preserved() {
        let doc = ProfileDocument::from_value(json!({
            "intention": "create_service",
            "data": {
                "zeta": {"type": "string", "value": "1"},
                "alpha": {"type": "string", "value": "2"},
                "mid": {"type": "string", "value": "3"}
            }
        }));

        let keys: Vec<_> = resolve_entries(&doc)
            .entries
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
