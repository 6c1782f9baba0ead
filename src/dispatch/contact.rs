//! Contact-channel guarantee and merge
//!
//! The output always carries exactly one descriptor for each of the four
//! canonical channels. Extracted channels keep their values (AI extraction
//! wins over session defaults) and only have their flags and ordering
//! raised; an extracted-but-empty channel is back-filled from the known
//! contacts; missing channels are appended.

use tracing::debug;

use crate::descriptor::{
    display_label, keys, sort_key_for, FieldDescriptor, FieldValue, RenderHint, SemanticType,
};
use crate::profile::KnownContacts;

struct ChannelSpec {
    key: &'static str,
    semantic: SemanticType,
    render_hint: RenderHint,
    required: bool,
    tooltip: &'static str,
    example: &'static str,
}

/// The four canonical channels; the messaging channel is the only
/// mandatory one
const CHANNELS: &[ChannelSpec] = &[
    ChannelSpec {
        key: keys::WHATSAPP,
        semantic: SemanticType::Whatsapp,
        render_hint: RenderHint::TextInput,
        required: true,
        tooltip: "WhatsApp number for direct contact (required)",
        example: "+237690000000",
    },
    ChannelSpec {
        key: keys::TELEPHONE,
        semantic: SemanticType::Phone,
        render_hint: RenderHint::TextInput,
        required: false,
        tooltip: "Contact phone number",
        example: "+237690000000",
    },
    ChannelSpec {
        key: keys::EMAIL,
        semantic: SemanticType::Email,
        render_hint: RenderHint::EmailInput,
        required: false,
        tooltip: "Contact email address",
        example: "contact@myservice.com",
    },
    ChannelSpec {
        key: keys::WEBSITE,
        semantic: SemanticType::Website,
        render_hint: RenderHint::TextInput,
        required: false,
        tooltip: "Your service's website",
        example: "https://myservice.com",
    },
];

pub(crate) fn merge_contact_channels(
    fields: &mut Vec<FieldDescriptor>,
    known: Option<&KnownContacts>,
) {
    for spec in CHANNELS {
        let known_value = known
            .and_then(|k| k.value_for(spec.key))
            .filter(|v| !v.is_empty());

        if let Some(idx) = fields.iter().position(|f| f.key == spec.key) {
            let existing = &mut fields[idx];
            existing.is_contact_channel = true;
            existing.sort_key = sort_key_for(spec.key);
            if spec.required {
                existing.required = true;
            }
            // extraction wins; only an empty slot is back-filled
            if existing.initial_value.is_empty() {
                if let Some(value) = known_value {
                    debug!("back-filling empty '{}' from known contacts", spec.key);
                    existing.initial_value = channel_value(spec, value);
                }
            }
        } else {
            fields.push(FieldDescriptor {
                key: spec.key.to_string(),
                semantic_type: spec.semantic.clone(),
                render_hint: spec.render_hint,
                required: spec.required,
                sort_key: sort_key_for(spec.key),
                tooltip: Some(spec.tooltip.to_string()),
                example: Some(spec.example.to_string()),
                initial_value: channel_value(spec, known_value.unwrap_or_default()),
                constraints: None,
                is_contact_channel: true,
                is_general_info: false,
                display_label: display_label(spec.key),
            });
        }
    }
}

/// Phone-shaped channels hold contact values; email and website stay text
fn channel_value(spec: &ChannelSpec, value: &str) -> FieldValue {
    if spec.semantic.is_phone_like() {
        FieldValue::Contact(value.to_string())
    } else {
        FieldValue::Text(value.to_string())
    }
}
