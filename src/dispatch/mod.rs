//! The field dispatch pipeline
//!
//! One pass over a resolved document: map the base fields, synthesize
//! conditional fields, canonicalize product lists, guarantee the contact
//! channels, then order everything. Pure and side-effect free; safe to
//! re-invoke concurrently.

use tracing::debug;

use crate::config::DispatchConfig;
use crate::descriptor::{keys, priority, FieldDescriptor};
use crate::phone::lookup_calling_code;
use crate::profile::{resolve_entries, KnownContacts, KnownLocation, ProfileDocument};

pub mod conditional;
pub mod contact;
pub mod mapper;
pub mod products;

/// Turns raw profile documents into ordered field descriptors
#[derive(Debug, Clone, Default)]
pub struct FieldDispatcher {
    config: DispatchConfig,
}

impl FieldDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DispatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Run the full pipeline. Never fails: refused or unrecognizable
    /// documents produce an empty sequence.
    pub fn dispatch(
        &self,
        doc: &ProfileDocument,
        known_contacts: Option<&KnownContacts>,
        known_location: Option<&KnownLocation>,
    ) -> Vec<FieldDescriptor> {
        let resolved = resolve_entries(doc);

        // refusal or no recognizable shape: nothing to render
        if resolved.shape.is_none() {
            return Vec::new();
        }

        let calling_code = known_location
            .and_then(|l| l.zone_text.as_deref())
            .and_then(lookup_calling_code)
            .unwrap_or(&self.config.default_calling_code);

        // base fields in document order; product aliases handled separately
        let mut fields: Vec<FieldDescriptor> = Vec::with_capacity(resolved.entries.len() + 4);
        for (key, entry) in &resolved.entries {
            if key == keys::PRODUCTS || key == keys::PRODUCT_LIST {
                continue;
            }
            fields.push(mapper::map_entry(key, entry, &self.config, calling_code));
        }

        conditional::synthesize_conditional_fields(&mut fields, &resolved, known_location);

        for alias in [keys::PRODUCTS, keys::PRODUCT_LIST] {
            if let Some(entry) = resolved.get(alias) {
                fields.push(products::build_product_descriptor(
                    alias,
                    &entry.value,
                    &self.config,
                ));
            }
        }

        contact::merge_contact_channels(&mut fields, known_contacts);

        priority::order_fields(&mut fields);

        debug!("dispatched {} field descriptors", fields.len());
        fields
    }
}

/// Convenience entry point with default configuration and no session data
pub fn dispatch_fields(doc: &ProfileDocument) -> Vec<FieldDescriptor> {
    FieldDispatcher::new().dispatch(doc, None, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refused_document_yields_nothing() {
        let doc = ProfileDocument::from_value(json!({
            "refused": true,
            "reason": "out of scope"
        }));
        assert!(dispatch_fields(&doc).is_empty());
    }

    #[test]
    fn test_unrecognizable_document_yields_nothing() {
        let doc = ProfileDocument::from_value(json!({"totally": "unrelated"}));
        assert!(dispatch_fields(&doc).is_empty());
    }

    #[test]
    fn test_shaped_but_empty_document_still_gets_contacts() {
        let doc = ProfileDocument::from_value(json!({
            "intention": "create_service",
            "data": {}
        }));

        let fields = dispatch_fields(&doc);
        assert_eq!(fields.len(), 4);
        assert!(fields.iter().all(|f| f.is_contact_channel));
    }

    #[test]
    fn test_keys_are_unique() {
        let doc = ProfileDocument::from_value(json!({
            "intention": "create_service",
            "data": {
                "whatsapp": {"type": "whatsapp", "value": "+237690000000"},
                "fixed_gps": {"type": "boolean", "value": true},
                "fixed_gps_coords": {"type": "gps", "value": "4.0, 9.7"},
                "is_depletable": {"type": "boolean", "value": true},
                "depletable_speed": {"type": "string", "value": "48h"}
            }
        }));

        let fields = dispatch_fields(&doc);
        let mut keys: Vec<_> = fields.iter().map(|f| f.key.clone()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), fields.len());
    }

    #[test]
    fn test_dispatch_is_deterministic() {
        let doc = ProfileDocument::from_value(json!({
            "intention": "create_service",
            "data": {
                "description": {"type": "string", "value": "Pipe repairs"},
                "titre_service": {"type": "string", "value": "Plumbing"},
                "products": {"type": "product_list", "value": [{"nom": "Valve"}]},
                "is_depletable": {"type": "boolean", "value": true}
            }
        }));

        let first = dispatch_fields(&doc);
        let second = dispatch_fields(&doc);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zone_hint_drives_phone_prefix() {
        let doc = ProfileDocument::from_value(json!({
            "intention": "create_service",
            "data": {
                "telephone": {"type": "phone", "value": "0612345678"}
            }
        }));
        let location = KnownLocation {
            zone_text: Some("Paris, France".to_string()),
            fixed_coordinates: None,
        };

        let fields = FieldDispatcher::new().dispatch(&doc, None, Some(&location));
        let phone = fields.iter().find(|f| f.key == "telephone").unwrap();
        assert_eq!(
            phone.initial_value,
            crate::descriptor::FieldValue::Contact("+33612345678".to_string())
        );
    }

    #[test]
    fn test_both_product_aliases_dispatch_independently() {
        let doc = ProfileDocument::from_value(json!({
            "intention": "create_service",
            "data": {
                "products": {"type": "product_list", "value": [{"nom": "A"}]},
                "product_list": {"type": "product_list", "value": [{"nom": "B"}]}
            }
        }));

        let fields = dispatch_fields(&doc);
        let product_fields: Vec<_> = fields
            .iter()
            .filter(|f| f.render_hint == crate::descriptor::RenderHint::ProductListEditor)
            .collect();
        assert_eq!(product_fields.len(), 2);
    }
}
