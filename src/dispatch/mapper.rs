//! Semantic-type to render-contract mapping
//!
//! One raw entry in, one partial descriptor out. Unrecognized type tags fall
//! back to a plain text input: the extractor is probabilistic and an unknown
//! tag is a data-quality condition, not an error.

use serde_json::Value;

use crate::config::DispatchConfig;
use crate::descriptor::{
    display_label, is_contact_key, is_general_info_key, keys, sort_key_for, Constraints,
    FieldDescriptor, FieldValue, RenderHint, SemanticType,
};
use crate::phone::normalize_phone_with_code;
use crate::profile::RawFieldEntry;

use super::products;

/// Map one raw entry to a descriptor. Sort key and classification flags are
/// assigned here; the contact merger may still adjust contact channels.
pub(crate) fn map_entry(
    key: &str,
    entry: &RawFieldEntry,
    config: &DispatchConfig,
    calling_code: &str,
) -> FieldDescriptor {
    let semantic = SemanticType::from_tag(&entry.type_tag);
    let render_hint = render_hint_for(key, &semantic, &entry.value, config);
    let required = matches!(semantic, SemanticType::Gps) && is_required_gps_key(key);

    let initial_value = if semantic.is_phone_like() {
        let raw = entry.value.as_str().unwrap_or_default();
        FieldValue::Contact(normalize_phone_with_code(raw, calling_code))
    } else {
        coerce_value(&semantic, &entry.value, config)
    };

    let constraints = Constraints {
        min: entry.min,
        max: entry.max,
        unit: entry.unit.clone(),
        regex: entry.regex.clone(),
        placeholder: entry.placeholder.clone(),
    };

    FieldDescriptor {
        key: key.to_string(),
        render_hint,
        required,
        sort_key: sort_key_for(key),
        tooltip: tooltip_for(&semantic).map(str::to_string),
        example: example_for(&semantic).map(str::to_string),
        initial_value,
        constraints: (!constraints.is_empty()).then_some(constraints),
        is_contact_channel: is_contact_key(key),
        is_general_info: is_general_info_key(key),
        display_label: display_label(key),
        semantic_type: semantic,
    }
}

/// Geo-coordinate fields are required when they denote the fixed location
fn is_required_gps_key(key: &str) -> bool {
    key == keys::FIXED_GPS || key == keys::FIXED_GPS_COORDS || key.contains("gps")
}

fn render_hint_for(
    key: &str,
    semantic: &SemanticType,
    value: &Value,
    config: &DispatchConfig,
) -> RenderHint {
    match semantic {
        SemanticType::String => {
            let long = value
                .as_str()
                .is_some_and(|s| s.len() > config.textarea_threshold);
            if long {
                RenderHint::TextArea
            } else {
                RenderHint::TextInput
            }
        }
        SemanticType::Number => RenderHint::NumberInput,
        SemanticType::Boolean => RenderHint::Checkbox,
        SemanticType::Gps => RenderHint::MapPicker,
        SemanticType::Image => RenderHint::ImageUpload,
        SemanticType::Video => RenderHint::VideoUpload,
        SemanticType::Audio => RenderHint::AudioUpload,
        SemanticType::Spreadsheet => RenderHint::SpreadsheetUpload,
        SemanticType::Document => RenderHint::DocumentUpload,
        SemanticType::List => {
            if key == keys::ITEM_CONDITION {
                RenderHint::ConditionSelect
            } else {
                RenderHint::TagSelect
            }
        }
        SemanticType::DateTime => RenderHint::DateTimePicker,
        SemanticType::Email => RenderHint::EmailInput,
        SemanticType::Whatsapp | SemanticType::Phone => RenderHint::TextInput,
        SemanticType::Website | SemanticType::Url => RenderHint::TextInput,
        SemanticType::ProductList => RenderHint::ProductListEditor,
        SemanticType::Object => RenderHint::ObjectViewer,
        SemanticType::Custom(_) => RenderHint::TextInput,
    }
}

/// Coerce a raw JSON value into the variant implied by the semantic type.
/// Mismatches degrade to the textual form; null becomes the empty value.
pub(crate) fn coerce_value(
    semantic: &SemanticType,
    raw: &Value,
    config: &DispatchConfig,
) -> FieldValue {
    if raw.is_null() {
        return FieldValue::empty();
    }

    match semantic {
        SemanticType::String
        | SemanticType::Email
        | SemanticType::Website
        | SemanticType::Url
        | SemanticType::Custom(_) => FieldValue::Text(text_of(raw)),

        SemanticType::Number => raw
            .as_f64()
            .or_else(|| raw.as_str().and_then(|s| s.trim().parse().ok()))
            .map(FieldValue::Number)
            .unwrap_or_else(|| FieldValue::Text(text_of(raw))),

        SemanticType::Boolean => raw
            .as_bool()
            .map(FieldValue::Bool)
            .unwrap_or_else(|| FieldValue::Text(text_of(raw))),

        SemanticType::Gps => FieldValue::GeoPair(text_of(raw)),

        SemanticType::Image
        | SemanticType::Video
        | SemanticType::Audio
        | SemanticType::Spreadsheet
        | SemanticType::Document => FieldValue::FileRef(text_of(raw)),

        SemanticType::List => match raw {
            Value::Array(items) => FieldValue::Choices(items.iter().map(text_of).collect()),
            Value::String(s) if s.is_empty() => FieldValue::Choices(Vec::new()),
            other => FieldValue::Choices(vec![text_of(other)]),
        },

        SemanticType::DateTime => FieldValue::DateTime(text_of(raw)),

        SemanticType::Whatsapp | SemanticType::Phone => FieldValue::Contact(text_of(raw)),

        SemanticType::ProductList => {
            FieldValue::Products(products::normalize_product_value(raw, config))
        }

        SemanticType::Object => FieldValue::Object(raw.clone()),
    }
}

fn text_of(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn tooltip_for(semantic: &SemanticType) -> Option<&'static str> {
    match semantic {
        SemanticType::String => Some("Free text field"),
        SemanticType::Number => Some("Numeric value expected"),
        SemanticType::Boolean => Some("Tick if applicable"),
        SemanticType::Gps => Some("Locate this field on a map"),
        SemanticType::Image => Some("Upload one or more images"),
        SemanticType::Video => Some("Add an explanatory video"),
        SemanticType::Audio => Some("Add an audio note"),
        SemanticType::Spreadsheet => Some("Spreadsheet data file (xlsx)"),
        SemanticType::Document => Some("Add a supporting document"),
        SemanticType::List => Some("Choose one or more options"),
        SemanticType::DateTime => Some("Pick a date and time"),
        SemanticType::Email => Some("Email address in a valid format"),
        SemanticType::Whatsapp => Some("WhatsApp number (required)"),
        SemanticType::Phone => Some("Phone number in international format"),
        SemanticType::Website => Some("Your service's website"),
        SemanticType::Url => Some("Valid web link"),
        SemanticType::Object => Some("Structure composed of sub-fields"),
        SemanticType::ProductList | SemanticType::Custom(_) => None,
    }
}

fn example_for(semantic: &SemanticType) -> Option<&'static str> {
    match semantic {
        SemanticType::String => Some("e.g. Bonamoussadi district"),
        SemanticType::Number => Some("e.g. 45000"),
        SemanticType::Gps => Some("e.g. 4.065, 9.712"),
        SemanticType::Image => Some("e.g. house_photo.jpg"),
        SemanticType::Video => Some("e.g. walkthrough.mp4"),
        SemanticType::Audio => Some("e.g. voice_note.mp3"),
        SemanticType::Spreadsheet => Some("e.g. schedule.xlsx"),
        SemanticType::Document => Some("e.g. quote.pdf"),
        SemanticType::DateTime => Some("e.g. 2025-06-10 14:00"),
        SemanticType::Email => Some("e.g. contact@myservice.com"),
        SemanticType::Whatsapp | SemanticType::Phone => Some("e.g. +237690000000"),
        SemanticType::Website | SemanticType::Url => Some("e.g. https://myservice.com"),
        _ => None,
    }
}
