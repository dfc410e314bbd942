//! # clinic-validate
//!
//! Validation and wire serialization for clinic records.
//!
//! Input mappings may use either a field's internal name or its wire key.
//! Validation walks the record's field table and reports every missing, null,
//! or mistyped field in one [`ValidationError`]. Valid input is constructed
//! into the typed record; serialization always emits wire keys.
//!
//! ## Usage
//!
//! ```rust
//! use clinic_types::Customer;
//! use clinic_validate::{from_value, SchemaError};
//! use serde_json::json;
//!
//! let err = from_value::<Customer>(&json!({"name": "A", "role": "eng"})).unwrap_err();
//! let SchemaError::Invalid(report) = err else { panic!() };
//! assert_eq!(report.paths(), vec!["email", "customerId"]);
//! ```

#![warn(missing_docs)]

mod codec;
mod types;
pub mod validate;

pub use codec::{from_json, from_value, to_json, to_value, WireRecord};
pub use types::{FieldIssue, IssueKind, SchemaError, SchemaResult, ValidationError};
pub use validate::normalize;

// Re-export clinic-types for convenience
pub use clinic_types;
