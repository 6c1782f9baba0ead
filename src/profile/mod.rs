//! Wire model for AI-extracted profile documents
//!
//! The extractor returns loosely-structured JSON whose container shape has
//! drifted across schema versions. Everything here is deliberately lenient:
//! the document is held as raw JSON and individual field entries are parsed
//! with defaults, so an imperfect extraction degrades instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DispatchResult;

pub mod shape;

pub use shape::{resolve_entries, DocumentShape, ResolvedEntries};

/// One raw field entry as emitted by the extractor.
///
/// Only the `type` tag is mandatory; entries without one are dropped during
/// shape resolution. Everything else defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFieldEntry {
    /// Semantic type tag (`string`, `number`, `gps`, ...)
    #[serde(rename = "type")]
    pub type_tag: String,

    #[serde(default)]
    pub value: Value,

    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub regex: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
}

/// The full raw extractor response, one of three container shapes, or a
/// refusal. Held as raw JSON; the engine only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDocument(Value);

impl ProfileDocument {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parse a document from raw JSON text. The only fallible boundary of
    /// the engine.
    pub fn from_json_str(text: &str) -> DispatchResult<Self> {
        Ok(Self(serde_json::from_str(text)?))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// True when the extractor refused to process the request
    pub fn is_refused(&self) -> bool {
        self.0.get("refused").and_then(Value::as_bool) == Some(true)
    }

    pub fn refusal_reason(&self) -> Option<&str> {
        self.0.get("reason").and_then(Value::as_str)
    }
}

impl From<Value> for ProfileDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Contact values already known for the current user, used to pre-fill
/// channels the extractor did not populate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnownContacts {
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl KnownContacts {
    /// Known value for a canonical contact-channel key
    pub fn value_for(&self, key: &str) -> Option<&str> {
        use crate::descriptor::keys;

        match key {
            k if k == keys::WHATSAPP => self.whatsapp.as_deref(),
            k if k == keys::TELEPHONE => self.telephone.as_deref(),
            k if k == keys::EMAIL => self.email.as_deref(),
            k if k == keys::WEBSITE => self.website.as_deref(),
            _ => None,
        }
    }
}

/// Location hints from the user session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnownLocation {
    /// Free-text geographic zone, used only to bias phone-number prefixing
    #[serde(default)]
    pub zone_text: Option<String>,

    /// Previously captured fixed coordinates, pre-fills the synthesized
    /// coordinate field
    #[serde(default)]
    pub fixed_coordinates: Option<String>,
}
