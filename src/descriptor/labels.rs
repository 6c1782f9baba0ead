//! Display labels for well-known field keys
//!
//! Unknown keys fall back to title-casing the snake_case key.

use super::keys;

/// Human-readable label for a field key
pub fn display_label(key: &str) -> String {
    let known = match key {
        k if k == keys::SERVICE_TITLE => Some("Service title"),
        k if k == keys::CATEGORY => Some("Category"),
        k if k == keys::DESCRIPTION => Some("Description"),
        k if k == keys::WHATSAPP => Some("WhatsApp"),
        k if k == keys::TELEPHONE => Some("Phone"),
        k if k == keys::EMAIL => Some("Email"),
        k if k == keys::WEBSITE => Some("Website"),
        k if k == keys::PRODUCTS || k == keys::PRODUCT_LIST => Some("Products/Services"),
        k if k == keys::FIXED_GPS => Some("Fixed location"),
        k if k == keys::FIXED_GPS_COORDS => Some("GPS coordinates"),
        k if k == keys::IS_DEPLETABLE => Some("Depletable service"),
        k if k == keys::DEPLETABLE_SPEED => Some("Depletion speed"),
        k if k == keys::ITEM_CONDITION => Some("Item condition"),
        "coverage_area" => Some("Coverage area"),
        "price" => Some("Price"),
        "amount" => Some("Amount"),
        "quantity" => Some("Quantity"),
        "unit" => Some("Unit"),
        _ => None,
    };

    match known {
        Some(label) => label.to_string(),
        None => title_case(key),
    }
}

/// "zone_details" -> "Zone Details"
fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(display_label("titre_service"), "Service title");
        assert_eq!(display_label("whatsapp"), "WhatsApp");
        assert_eq!(display_label("fixed_gps_coords"), "GPS coordinates");
    }

    #[test]
    fn test_fallback_title_case() {
        assert_eq!(display_label("opening_hours"), "Opening Hours");
        assert_eq!(display_label("zone"), "Zone");
        assert_eq!(display_label("a__b"), "A B");
    }
}
