//! listing-forms - Dynamic field dispatch for AI-extracted listing profiles
//!
//! A marketplace's AI extraction step returns a semi-structured profile
//! document describing the fields of a service listing. This crate turns
//! that document into an ordered list of strongly-typed field descriptors a
//! form renderer can consume blindly: shape detection across the historical
//! container formats, semantic-type mapping, conditional field synthesis,
//! product-list canonicalization, contact-channel guarantees, phone-number
//! normalization, and deterministic display ordering.
//!
//! The whole engine is a pure, synchronous transform. It degrades instead of
//! erroring: an imperfect extraction produces a partial form, never a panic.
//!
//! ## Quick Start
//!
//! ```rust
//! use listing_forms::{dispatch_fields, ProfileDocument};
//!
//! let doc = ProfileDocument::from_json_str(
//!     r#"{"intention": "create_service",
//!         "data": {"titre_service": {"type": "string", "value": "Plumbing"}}}"#,
//! ).unwrap();
//!
//! let fields = dispatch_fields(&doc);
//! assert_eq!(fields[0].key, "titre_service");
//! ```

// Core error handling
pub mod error;

// Engine configuration
pub mod config;

// Wire model and container-shape resolution
pub mod profile;

// Output model: descriptors, labels, display priority
pub mod descriptor;

// The dispatch pipeline
pub mod dispatch;

// Phone-number normalization and the geo-zone heuristic
pub mod phone;

// Structural validation of edited values
pub mod validation;

// Public re-exports for the common call path
pub use config::DispatchConfig;
pub use descriptor::{
    Constraints, FieldDescriptor, FieldValue, ProductEntry, ProductPrice, RenderHint, SemanticType,
};
pub use dispatch::{dispatch_fields, FieldDispatcher};
pub use error::{DispatchError, DispatchResult, ValidationError, ValidationResult};
pub use phone::{normalize_phone, resolve_calling_code, DEFAULT_CALLING_CODE};
pub use profile::{
    DocumentShape, KnownContacts, KnownLocation, ProfileDocument, RawFieldEntry,
};
pub use validation::validate_value;
