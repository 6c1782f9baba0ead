//! Field descriptors - the normalized output consumed by the form renderer
//!
//! A descriptor carries everything the rendering layer needs to build one
//! editable form field: the widget to use, the typed initial value, the
//! validation constraints, and the display ordering. Descriptors are created
//! fresh per document and are immutable once produced.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod labels;
pub mod priority;

pub use labels::display_label;
pub use priority::sort_key_for;

/// Well-known field keys from the extractor wire contract.
///
/// The vocabulary is historically mixed-language: `titre_service` predates
/// the anglicized schema and is still what the deployed extractor emits.
pub mod keys {
    pub const SERVICE_TITLE: &str = "titre_service";
    pub const CATEGORY: &str = "category";
    pub const DESCRIPTION: &str = "description";

    pub const WHATSAPP: &str = "whatsapp";
    pub const TELEPHONE: &str = "telephone";
    pub const EMAIL: &str = "email";
    pub const WEBSITE: &str = "website";

    /// Two legacy aliases for the nested product list field
    pub const PRODUCTS: &str = "products";
    pub const PRODUCT_LIST: &str = "product_list";

    pub const FIXED_GPS: &str = "fixed_gps";
    pub const FIXED_GPS_COORDS: &str = "fixed_gps_coords";

    pub const IS_DEPLETABLE: &str = "is_depletable";
    pub const DEPLETABLE_SPEED: &str = "depletable_speed";

    pub const ITEM_CONDITION: &str = "item_condition";
}

/// The four canonical contact-channel keys, in display order
pub const CONTACT_KEYS: &[&str] = &[
    keys::WHATSAPP,
    keys::TELEPHONE,
    keys::EMAIL,
    keys::WEBSITE,
];

/// Keys classified as general listing information
pub const GENERAL_INFO_KEYS: &[&str] = &[keys::SERVICE_TITLE, keys::CATEGORY, keys::DESCRIPTION];

/// Semantic data type tag attached to each extracted field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SemanticType {
    String,
    Number,
    Boolean,
    Gps,
    Image,
    Video,
    Audio,
    Spreadsheet,
    Document,
    List,
    DateTime,
    Email,
    Whatsapp,
    Phone,
    Website,
    Url,
    ProductList,
    Object,
    /// Unrecognized tag, preserved verbatim (renders as a plain text input)
    Custom(String),
}

impl SemanticType {
    /// Parse a wire tag. Unknown tags are preserved, not rejected.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "gps" => Self::Gps,
            "image" => Self::Image,
            "video" => Self::Video,
            "audio" => Self::Audio,
            "excel" | "spreadsheet" => Self::Spreadsheet,
            "document" => Self::Document,
            "list" => Self::List,
            "datetime" => Self::DateTime,
            "email" => Self::Email,
            "whatsapp" => Self::Whatsapp,
            "phone" => Self::Phone,
            "website" => Self::Website,
            "url" => Self::Url,
            "product_list" => Self::ProductList,
            "object" => Self::Object,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Canonical wire tag for this type
    pub fn as_tag(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Gps => "gps",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Spreadsheet => "excel",
            Self::Document => "document",
            Self::List => "list",
            Self::DateTime => "datetime",
            Self::Email => "email",
            Self::Whatsapp => "whatsapp",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::Url => "url",
            Self::ProductList => "product_list",
            Self::Object => "object",
            Self::Custom(tag) => tag,
        }
    }

    /// Phone-shaped types get their values normalized to international form
    pub fn is_phone_like(&self) -> bool {
        matches!(self, Self::Whatsapp | Self::Phone)
    }
}

impl Serialize for SemanticType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for SemanticType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Rendering capability hint consumed by the widget layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderHint {
    TextInput,
    TextArea,
    NumberInput,
    Checkbox,
    MapPicker,
    ImageUpload,
    VideoUpload,
    AudioUpload,
    SpreadsheetUpload,
    DocumentUpload,
    ConditionSelect,
    TagSelect,
    DateTimePicker,
    EmailInput,
    ProductListEditor,
    ObjectViewer,
}

/// One product inside a product-list field, canonicalized from any of the
/// historical nested encodings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub category: String,
    pub nature_description: String,
    pub quantity: f64,
    pub unit: String,
    pub price: ProductPrice,
    pub brand: String,
    pub origin: String,
    pub is_second_hand: bool,
    pub is_depletable: bool,
    pub depletion_speed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPrice {
    pub amount: f64,
    pub currency: String,
}

/// Typed initial value of a descriptor.
///
/// One variant per semantic category, so downstream passes operate over a
/// closed set instead of untyped JSON. Serializes untagged: the renderer
/// sees plain JSON scalars and arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    GeoPair(String),
    FileRef(String),
    DateTime(String),
    Contact(String),
    Choices(Vec<String>),
    Products(Vec<ProductEntry>),
    Object(serde_json::Value),
}

impl FieldValue {
    /// The empty value new fields start from
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// True when the value carries no user-visible content
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s)
            | Self::GeoPair(s)
            | Self::FileRef(s)
            | Self::DateTime(s)
            | Self::Contact(s) => s.is_empty(),
            Self::Choices(items) => items.is_empty(),
            Self::Products(items) => items.is_empty(),
            Self::Object(v) => v.is_null(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// Borrow the textual content, if this is a string-shaped variant
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s)
            | Self::GeoPair(s)
            | Self::FileRef(s)
            | Self::DateTime(s)
            | Self::Contact(s) => Some(s),
            _ => None,
        }
    }
}

/// Dynamic validation constraints forwarded from the extractor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
            && self.max.is_none()
            && self.unit.is_none()
            && self.regex.is_none()
            && self.placeholder.is_none()
    }
}

/// The normalized, typed form-field record consumed by the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Field key, unique within one produced sequence
    pub key: String,

    pub semantic_type: SemanticType,
    pub render_hint: RenderHint,
    pub required: bool,

    /// Display ordering; ties keep original iteration order
    pub sort_key: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    pub initial_value: FieldValue,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,

    pub is_contact_channel: bool,
    pub is_general_info: bool,
    pub display_label: String,
}

/// True for the four canonical contact-channel keys
pub fn is_contact_key(key: &str) -> bool {
    CONTACT_KEYS.contains(&key)
}

/// True for general listing-information keys
pub fn is_general_info_key(key: &str) -> bool {
    GENERAL_INFO_KEYS.contains(&key)
}
