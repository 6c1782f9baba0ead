//! Display-priority assignment and final ordering
//!
//! Every descriptor gets a numeric sort key from a fixed rule chain, checked
//! top to bottom, first hit wins. General information sorts first, then the
//! product block, then contact channels in a fixed sub-order, then location,
//! then depletion-related fields, with boolean flags trailing. Everything
//! else lands in a default bucket between general info and the contact block.

use super::{keys, FieldDescriptor};

/// Default bucket for keys no rule matches
pub const DEFAULT_SORT_KEY: u32 = 50;

/// Sort key for a field key. Rule order is load-bearing: substring rules
/// only apply when no earlier exact rule matched.
pub fn sort_key_for(key: &str) -> u32 {
    // General information block
    if key == keys::SERVICE_TITLE {
        return 10;
    }
    if key == keys::CATEGORY {
        return 11;
    }
    if key == keys::DESCRIPTION {
        return 12;
    }

    // Products directly after general information
    if key == keys::PRODUCTS || key == keys::PRODUCT_LIST {
        return 15;
    }
    if key.contains("price") || key.contains("amount") {
        return 16;
    }
    if key.contains("quantity") {
        return 17;
    }
    if key.contains("unit") {
        return 18;
    }

    // Contact block, fixed sub-order
    if key == keys::WHATSAPP {
        return 100;
    }
    if key == keys::TELEPHONE {
        return 101;
    }
    if key == keys::EMAIL {
        return 102;
    }
    if key == keys::WEBSITE {
        return 103;
    }

    // Fixed location right after contacts
    if key == keys::FIXED_GPS || key == keys::FIXED_GPS_COORDS {
        return 110;
    }
    if key.contains("gps") {
        return 111;
    }

    if key.contains("depletion") {
        return 120;
    }

    // Boolean flags at the end
    if key.contains("is_") {
        return 130;
    }

    DEFAULT_SORT_KEY
}

/// Stable ascending sort; equal keys keep their insertion order
pub fn order_fields(fields: &mut [FieldDescriptor]) {
    fields.sort_by_key(|f| f.sort_key);
}
