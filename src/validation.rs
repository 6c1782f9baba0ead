//! Structural validation of edited field values
//!
//! The form layer calls this when the user edits a field. Checks are
//! structural only (JSON type against the semantic type, plus the forwarded
//! numeric and regex constraints); business rules stay with the caller.

use serde_json::Value;
use tracing::warn;

use crate::descriptor::{FieldDescriptor, SemanticType};
use crate::error::{ValidationError, ValidationResult};

/// Validate an edited value against a descriptor.
pub fn validate_value(field: &FieldDescriptor, value: &Value) -> ValidationResult<()> {
    if is_blank(value) {
        if field.required {
            return Err(ValidationError::MissingRequired {
                field: field.key.clone(),
            });
        }
        return Ok(());
    }

    check_type(field, value)?;
    check_constraints(field, value)?;
    Ok(())
}

fn check_type(field: &FieldDescriptor, value: &Value) -> ValidationResult<()> {
    let ok = match &field.semantic_type {
        SemanticType::Number => value.is_number(),
        SemanticType::Boolean => value.is_boolean(),
        SemanticType::String
        | SemanticType::Gps
        | SemanticType::DateTime
        | SemanticType::Email
        | SemanticType::Whatsapp
        | SemanticType::Phone
        | SemanticType::Website
        | SemanticType::Url
        | SemanticType::Image
        | SemanticType::Video
        | SemanticType::Audio
        | SemanticType::Spreadsheet
        | SemanticType::Document => value.is_string(),
        SemanticType::List => value.is_array() || value.is_string(),
        SemanticType::ProductList => value.is_array(),
        SemanticType::Object => value.is_object(),
        // unrecognized types stay unvalidated
        SemanticType::Custom(_) => true,
    };

    if ok {
        Ok(())
    } else {
        Err(ValidationError::TypeMismatch {
            field: field.key.clone(),
            expected: field.semantic_type.as_tag().to_string(),
            found: json_type_name(value).to_string(),
        })
    }
}

fn check_constraints(field: &FieldDescriptor, value: &Value) -> ValidationResult<()> {
    let Some(constraints) = &field.constraints else {
        return Ok(());
    };

    if let Some(num) = value.as_f64() {
        if let Some(min) = constraints.min {
            if num < min {
                return Err(ValidationError::ConstraintViolation {
                    field: field.key.clone(),
                    constraint: format!("value {num} below minimum {min}"),
                });
            }
        }
        if let Some(max) = constraints.max {
            if num > max {
                return Err(ValidationError::ConstraintViolation {
                    field: field.key.clone(),
                    constraint: format!("value {num} above maximum {max}"),
                });
            }
        }
    }

    if let (Some(pattern), Some(text)) = (&constraints.regex, value.as_str()) {
        match regex::Regex::new(pattern) {
            Ok(re) => {
                if !re.is_match(text) {
                    return Err(ValidationError::ConstraintViolation {
                        field: field.key.clone(),
                        constraint: format!("value does not match pattern {pattern}"),
                    });
                }
            }
            Err(_) => {
                // extractor-supplied patterns are untrusted; skip the check
                warn!("unusable regex constraint on '{}', skipping", field.key);
            }
        }
    }

    Ok(())
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{
        display_label, sort_key_for, Constraints, FieldValue, RenderHint,
    };
    use serde_json::json;

    fn field(key: &str, semantic: SemanticType, required: bool) -> FieldDescriptor {
        FieldDescriptor {
            key: key.to_string(),
            semantic_type: semantic,
            render_hint: RenderHint::TextInput,
            required,
            sort_key: sort_key_for(key),
            tooltip: None,
            example: None,
            initial_value: FieldValue::empty(),
            constraints: None,
            is_contact_channel: false,
            is_general_info: false,
            display_label: display_label(key),
        }
    }

    #[test]
    fn test_required_empty_rejected() {
        let f = field("whatsapp", SemanticType::Whatsapp, true);
        assert_eq!(
            validate_value(&f, &json!("")),
            Err(ValidationError::MissingRequired {
                field: "whatsapp".to_string()
            })
        );
        assert!(validate_value(&f, &json!("+237690000000")).is_ok());
    }

    #[test]
    fn test_optional_empty_accepted() {
        let f = field("email", SemanticType::Email, false);
        assert!(validate_value(&f, &Value::Null).is_ok());
        assert!(validate_value(&f, &json!("")).is_ok());
    }

    #[test]
    fn test_type_mismatch() {
        let f = field("quantity", SemanticType::Number, false);
        assert!(validate_value(&f, &json!(5)).is_ok());
        assert!(matches!(
            validate_value(&f, &json!("five")),
            Err(ValidationError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_min_max_constraints() {
        let mut f = field("weight", SemanticType::Number, false);
        f.constraints = Some(Constraints {
            min: Some(1.0),
            max: Some(10.0),
            ..Default::default()
        });

        assert!(validate_value(&f, &json!(5)).is_ok());
        assert!(matches!(
            validate_value(&f, &json!(0)),
            Err(ValidationError::ConstraintViolation { .. })
        ));
        assert!(matches!(
            validate_value(&f, &json!(11)),
            Err(ValidationError::ConstraintViolation { .. })
        ));
    }

    #[test]
    fn test_regex_constraint() {
        let mut f = field("ref_code", SemanticType::String, false);
        f.constraints = Some(Constraints {
            regex: Some("^[A-Z]{3}-\\d+$".to_string()),
            ..Default::default()
        });

        assert!(validate_value(&f, &json!("ABC-42")).is_ok());
        assert!(validate_value(&f, &json!("abc")).is_err());
    }

    #[test]
    fn test_broken_regex_skipped() {
        let mut f = field("ref_code", SemanticType::String, false);
        f.constraints = Some(Constraints {
            regex: Some("([unclosed".to_string()),
            ..Default::default()
        });
        assert!(validate_value(&f, &json!("anything")).is_ok());
    }

    #[test]
    fn test_custom_type_unvalidated() {
        let f = field("weird", SemanticType::Custom("hologram".to_string()), false);
        assert!(validate_value(&f, &json!({"any": "shape"})).is_ok());
    }
}
