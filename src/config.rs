//! Dispatch engine configuration
//!
//! Tunable constants for one dispatcher instance. The lookup tables (type
//! mapping, geo zones, sort keys) stay static; only the handful of defaults
//! that differ per deployment live here.

/// Configuration for a [`FieldDispatcher`](crate::dispatch::FieldDispatcher)
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Calling code applied when no geographic zone hint matches
    pub default_calling_code: String,

    /// String values longer than this render as a textarea instead of an input
    pub textarea_threshold: usize,

    /// Default unit for product entries missing one
    pub default_unit: String,

    /// Default currency for product prices missing one
    pub default_currency: String,

    /// Default depletion speed for product entries missing one
    pub default_depletion_speed: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_calling_code: "+237".to_string(),
            textarea_threshold: 100,
            default_unit: "piece".to_string(),
            default_currency: "XAF".to_string(),
            default_depletion_speed: "medium".to_string(),
        }
    }
}
