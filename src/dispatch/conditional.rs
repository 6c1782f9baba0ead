//! Conditional field synthesis
//!
//! Exactly two rules exist. A true `is_depletable` flag implies a
//! depletion-speed field; a true `fixed_gps` flag implies a required
//! coordinate field, pre-filled from the session's known location when
//! available. Synthesized fields are ordinary descriptors downstream.

use tracing::debug;

use crate::descriptor::{
    display_label, keys, sort_key_for, FieldDescriptor, FieldValue, RenderHint, SemanticType,
};
use crate::profile::{KnownLocation, ResolvedEntries};

pub(crate) fn synthesize_conditional_fields(
    fields: &mut Vec<FieldDescriptor>,
    resolved: &ResolvedEntries,
    location: Option<&KnownLocation>,
) {
    if flag_is_true(resolved, keys::IS_DEPLETABLE) && !has_key(fields, keys::DEPLETABLE_SPEED) {
        debug!("synthesizing depletion-speed field");
        fields.push(FieldDescriptor {
            key: keys::DEPLETABLE_SPEED.to_string(),
            semantic_type: SemanticType::String,
            render_hint: RenderHint::TextInput,
            required: false,
            sort_key: sort_key_for(keys::DEPLETABLE_SPEED),
            tooltip: Some("How quickly the service runs out".to_string()),
            example: Some("e.g. immediate, 24h, 48h".to_string()),
            initial_value: FieldValue::empty(),
            constraints: None,
            is_contact_channel: false,
            is_general_info: false,
            display_label: display_label(keys::DEPLETABLE_SPEED),
        });
    }

    if flag_is_true(resolved, keys::FIXED_GPS) && !has_key(fields, keys::FIXED_GPS_COORDS) {
        debug!("synthesizing fixed-location coordinate field");
        let coords = location
            .and_then(|l| l.fixed_coordinates.clone())
            .unwrap_or_default();

        fields.push(FieldDescriptor {
            key: keys::FIXED_GPS_COORDS.to_string(),
            semantic_type: SemanticType::Gps,
            render_hint: RenderHint::MapPicker,
            required: true,
            sort_key: sort_key_for(keys::FIXED_GPS_COORDS),
            tooltip: Some("Fixed GPS coordinates of the service".to_string()),
            example: Some("e.g. 4.065, 9.712".to_string()),
            initial_value: FieldValue::GeoPair(coords),
            constraints: None,
            is_contact_channel: false,
            is_general_info: false,
            display_label: display_label(keys::FIXED_GPS_COORDS),
        });
    }
}

fn flag_is_true(resolved: &ResolvedEntries, key: &str) -> bool {
    resolved
        .get(key)
        .and_then(|entry| entry.value.as_bool())
        .unwrap_or(false)
}

fn has_key(fields: &[FieldDescriptor], key: &str) -> bool {
    fields.iter().any(|f| f.key == key)
}
