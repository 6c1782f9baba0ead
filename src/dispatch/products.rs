//! Product-list canonicalization
//!
//! The nested product field has shipped in four encodings: an array of
//! type-tagged sub-objects, an array of raw objects, a single tagged object,
//! and a single raw object. Every encoding canonicalizes into the same
//! [`ProductEntry`] shape. Sub-field extraction tries the tagged accessor
//! (`field.value`), then the raw key, then the English alias, then a typed
//! default, so a malformed entry never propagates nulls into the output.

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::DispatchConfig;
use crate::descriptor::{
    display_label, sort_key_for, FieldDescriptor, FieldValue, ProductEntry, ProductPrice,
    RenderHint, SemanticType,
};

/// Normalize a raw product-list value into canonical entries.
/// Unrecognized encodings yield an empty list, never an error.
pub(crate) fn normalize_product_value(raw: &Value, config: &DispatchConfig) -> Vec<ProductEntry> {
    match raw {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_object())
            .map(|obj| normalize_product(obj, config))
            .collect(),
        Value::Object(obj) => vec![normalize_product(obj, config)],
        _ => {
            debug!("product list value is neither array nor object, ignoring");
            Vec::new()
        }
    }
}

/// Build the descriptor for a product-list field found under one of the
/// accepted aliases
pub(crate) fn build_product_descriptor(
    key: &str,
    raw: &Value,
    config: &DispatchConfig,
) -> FieldDescriptor {
    let entries = normalize_product_value(raw, config);
    debug!("normalized {} product entries under '{}'", entries.len(), key);

    FieldDescriptor {
        key: key.to_string(),
        semantic_type: SemanticType::ProductList,
        render_hint: RenderHint::ProductListEditor,
        required: false,
        sort_key: sort_key_for(key),
        tooltip: Some("Products and services on offer".to_string()),
        example: Some("Products detected from your request".to_string()),
        initial_value: FieldValue::Products(entries),
        constraints: None,
        is_contact_channel: false,
        is_general_info: false,
        display_label: display_label(key),
    }
}

fn normalize_product(obj: &Map<String, Value>, config: &DispatchConfig) -> ProductEntry {
    ProductEntry {
        name: field_str(obj, &["nom", "titre"]).unwrap_or_default(),
        category: field_str(obj, &["categorie", "category"]).unwrap_or_default(),
        nature_description: field_str(obj, &["description", "nature_produit"]).unwrap_or_default(),
        quantity: field_f64(obj, &["quantite", "quantity"]).unwrap_or(0.0),
        unit: field_str(obj, &["unite", "unit"]).unwrap_or_else(|| config.default_unit.clone()),
        price: extract_price(obj, config),
        brand: field_str(obj, &["marque", "brand"]).unwrap_or_default(),
        origin: field_str(obj, &["origine", "origin"]).unwrap_or_default(),
        is_second_hand: field_bool(obj, &["occasion"]).unwrap_or(false),
        is_depletable: field_bool(obj, &["est_tarissable"]).unwrap_or(false),
        depletion_speed: field_str(obj, &["vitesse_tarissement"])
            .unwrap_or_else(|| config.default_depletion_speed.clone()),
    }
}

/// Tagged accessor first, then the raw key, for each candidate key in order
fn field_value<'a>(obj: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a Value> {
    for key in candidates {
        if let Some(v) = obj.get(*key) {
            if let Some(tagged) = v.get("value") {
                return Some(tagged);
            }
            return Some(v);
        }
    }
    None
}

fn field_str(obj: &Map<String, Value>, candidates: &[&str]) -> Option<String> {
    field_value(obj, candidates)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn field_f64(obj: &Map<String, Value>, candidates: &[&str]) -> Option<f64> {
    let v = field_value(obj, candidates)?;
    v.as_f64()
        .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
}

fn field_bool(obj: &Map<String, Value>, candidates: &[&str]) -> Option<bool> {
    field_value(obj, candidates).and_then(Value::as_bool)
}

/// Price arrives as a tagged nested object, a raw nested object, or a bare
/// number; currency defaults when absent
fn extract_price(obj: &Map<String, Value>, config: &DispatchConfig) -> ProductPrice {
    let default_currency = || config.default_currency.clone();

    for key in ["prix", "price"] {
        let Some(p) = obj.get(key) else { continue };

        let amount = p
            .get("value")
            .and_then(|v| nested_amount(v))
            .or_else(|| nested_amount(p))
            .or_else(|| p.get("value").and_then(Value::as_f64))
            .or_else(|| p.as_f64());

        let currency = p
            .get("value")
            .and_then(nested_currency)
            .or_else(|| nested_currency(p))
            .map(str::to_string);

        return ProductPrice {
            amount: amount.unwrap_or(0.0),
            currency: currency.unwrap_or_else(default_currency),
        };
    }

    ProductPrice {
        amount: 0.0,
        currency: default_currency(),
    }
}

fn nested_amount(v: &Value) -> Option<f64> {
    v.get("montant")
        .or_else(|| v.get("amount"))
        .and_then(Value::as_f64)
}

fn nested_currency(v: &Value) -> Option<&str> {
    v.get("devise")
        .or_else(|| v.get("currency"))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> DispatchConfig {
        DispatchConfig::default()
    }

    /// The same logical product in all four historical encodings must
    /// canonicalize identically.
    #[test]
    fn test_four_encodings_one_canonical_shape() {
        let tagged = json!({
            "nom": {"type": "string", "value": "Cement bag"},
            "categorie": {"type": "string", "value": "Construction"},
            "quantite": {"type": "number", "value": 10},
            "unite": {"type": "string", "value": "bag"},
            "prix": {"type": "object", "value": {"montant": 5500, "devise": "XAF"}},
            "occasion": {"type": "boolean", "value": false}
        });
        let raw = json!({
            "nom": "Cement bag",
            "categorie": "Construction",
            "quantite": 10,
            "unite": "bag",
            "prix": {"montant": 5500, "devise": "XAF"},
            "occasion": false
        });

        let cfg = config();
        let from_tagged_array = normalize_product_value(&json!([tagged]), &cfg);
        let from_raw_array = normalize_product_value(&json!([raw]), &cfg);
        let from_tagged_single = normalize_product_value(&tagged, &cfg);
        let from_raw_single = normalize_product_value(&raw, &cfg);

        assert_eq!(from_tagged_array.len(), 1);
        assert_eq!(from_tagged_array, from_raw_array);
        assert_eq!(from_tagged_array, from_tagged_single);
        assert_eq!(from_tagged_array, from_raw_single);

        let product = &from_tagged_array[0];
        assert_eq!(product.name, "Cement bag");
        assert_eq!(product.category, "Construction");
        assert_eq!(product.quantity, 10.0);
        assert_eq!(product.unit, "bag");
        assert_eq!(product.price.amount, 5500.0);
        assert_eq!(product.price.currency, "XAF");
        assert!(!product.is_second_hand);
    }

    #[test]
    fn test_missing_fields_get_typed_defaults() {
        let products = normalize_product_value(&json!([{}]), &config());
        assert_eq!(products.len(), 1);

        let p = &products[0];
        assert_eq!(p.name, "");
        assert_eq!(p.category, "");
        assert_eq!(p.quantity, 0.0);
        assert_eq!(p.unit, "piece");
        assert_eq!(p.price.amount, 0.0);
        assert_eq!(p.price.currency, "XAF");
        assert_eq!(p.brand, "");
        assert_eq!(p.origin, "");
        assert!(!p.is_second_hand);
        assert!(!p.is_depletable);
        assert_eq!(p.depletion_speed, "medium");
    }

    #[test]
    fn test_english_alias_fallback() {
        let products = normalize_product_value(
            &json!([{
                "nom": "Drill",
                "category": "Tools",
                "quantity": "3",
                "unit": "piece",
                "brand": "MaxPro",
                "origin": "DE"
            }]),
            &config(),
        );

        let p = &products[0];
        assert_eq!(p.category, "Tools");
        assert_eq!(p.quantity, 3.0);
        assert_eq!(p.brand, "MaxPro");
        assert_eq!(p.origin, "DE");
    }

    #[test]
    fn test_name_falls_back_to_titre() {
        let products =
            normalize_product_value(&json!([{"titre": {"value": "Fallback name"}}]), &config());
        assert_eq!(products[0].name, "Fallback name");
    }

    #[test]
    fn test_bare_number_price() {
        let products = normalize_product_value(&json!([{"prix": 2000}]), &config());
        assert_eq!(products[0].price.amount, 2000.0);
        assert_eq!(products[0].price.currency, "XAF");

        let products = normalize_product_value(&json!([{"prix": {"value": 1500}}]), &config());
        assert_eq!(products[0].price.amount, 1500.0);
    }

    #[test]
    fn test_garbage_value_yields_empty_list() {
        assert!(normalize_product_value(&json!("not products"), &config()).is_empty());
        assert!(normalize_product_value(&json!(42), &config()).is_empty());
        assert!(normalize_product_value(&Value::Null, &config()).is_empty());
    }

    #[test]
    fn test_non_object_array_items_skipped() {
        let products =
            normalize_product_value(&json!([{"nom": "Real"}, "noise", 7]), &config());
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Real");
    }

    #[test]
    fn test_descriptor_shape() {
        let field = build_product_descriptor("products", &json!([{"nom": "X"}]), &config());
        assert_eq!(field.sort_key, 15);
        assert_eq!(field.render_hint, RenderHint::ProductListEditor);
        assert!(!field.required);
        match &field.initial_value {
            FieldValue::Products(items) => assert_eq!(items.len(), 1),
            other => panic!("expected products value, got {other:?}"),
        }
    }
}
