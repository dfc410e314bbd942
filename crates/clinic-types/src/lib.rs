//! # clinic-types
//!
//! Record definitions for customer and medical-problem data.
//!
//! Each record is a plain struct paired with an explicit field table
//! ([`Schema::FIELDS`]) that maps internal field names to their wire keys.
//! The `clinic-validate` crate walks these tables to validate untrusted
//! input; `clinic-mock` walks them to generate fake records.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use clinic_types::{Customer, Schema};
//!
//! let customer = Customer {
//!     name: "Grace Hopper".to_string(),
//!     email: "grace@example.com".to_string(),
//!     role: "Rear admiral".to_string(),
//!     customer_id: 1906,
//! };
//!
//! let id_field = Customer::field("customer_id").unwrap();
//! assert_eq!(id_field.wire_name, "customerId");
//! # let _ = customer;
//! ```

#![warn(missing_docs)]

mod customer;
mod dynamic;
pub mod problems;
mod schema;

// Re-export all public types at crate root
pub use customer::{BaseCustomer, Customer};
pub use dynamic::{AnyRecord, AnyValue};
pub use problems::{
    AssociatedDrug, AssociatedDrug2Item, BaseProblems, ClassName2Item, ClassNameItem, Diabetes,
    Lab, Medication, MedicationsClass, Problem,
};
pub use schema::{FieldKind, FieldSpec, KindTag, Schema};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        // Verify all types are accessible from crate root
        let _lab = Lab {
            missing_field: "pending".to_string(),
        };
        let _value = AnyValue::Null;
        let _tag = KindTag::Text;
        assert_eq!(BaseProblems::NAME, "BaseProblems");
        assert_eq!(<BaseCustomer as Schema>::NAME, "Customer");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let customer = Customer {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: "Engineer".to_string(),
            customer_id: 42,
        };

        let json = serde_json::to_string(&customer).unwrap();
        let parsed: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(customer, parsed);
    }
}
