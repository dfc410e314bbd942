//! Customer record type.

use crate::{FieldKind, FieldSpec, Schema};

/// A customer record.
///
/// All four fields are required. `customer_id` travels as `customerId` on the
/// wire; either key is accepted when deserializing.
///
/// # Examples
///
/// ```
/// use clinic_types::Customer;
///
/// let customer = Customer {
///     name: "Ada Lovelace".to_string(),
///     email: "ada@example.com".to_string(),
///     role: "Analyst".to_string(),
///     customer_id: 7,
/// };
///
/// assert_eq!(customer.customer_id, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Job role.
    pub role: String,
    /// Numeric customer identifier.
    #[cfg_attr(feature = "serde", serde(rename = "customerId", alias = "customer_id"))]
    pub customer_id: i64,
}

/// Base model the generated customer schema derives from. Same shape as
/// [`Customer`].
pub type BaseCustomer = Customer;

impl Schema for Customer {
    const NAME: &'static str = "Customer";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("email", FieldKind::Text),
        FieldSpec::new("role", FieldKind::Text),
        FieldSpec::aliased("customer_id", "customerId", FieldKind::Integer),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_field_table() {
        let wire: Vec<_> = Customer::FIELDS.iter().map(|f| f.wire_name).collect();
        assert_eq!(wire, vec!["name", "email", "role", "customerId"]);
        assert_eq!(
            Customer::field("customerId").map(|f| f.kind),
            Some(FieldKind::Integer)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_customer_serializes_alias() {
        let customer = Customer {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            role: "eng".to_string(),
            customer_id: 7,
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["customerId"], 7);
        assert!(value.get("customer_id").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_customer_accepts_internal_name() {
        let json = r#"{"name":"A","email":"a@b.com","role":"eng","customer_id":7}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.customer_id, 7);
    }
}
