//! Construction from and serialization to the wire format.

use clinic_types::Schema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::types::SchemaResult;
use crate::validate::normalize;

/// Validates `value` and constructs a `T` from it.
///
/// # Errors
/// Returns [`SchemaError::Invalid`](crate::SchemaError::Invalid) listing every
/// invalid field. Nothing is constructed unless the whole input is valid.
pub fn from_value<T: Schema + DeserializeOwned>(value: &Value) -> SchemaResult<T> {
    let normalized = normalize::<T>(value)?;
    let record = serde_json::from_value(Value::Object(normalized))?;
    Ok(record)
}

/// Parses JSON text, then validates and constructs a `T`.
///
/// # Errors
/// Returns [`SchemaError::Json`](crate::SchemaError::Json) if `text` is not
/// valid JSON, and [`SchemaError::Invalid`](crate::SchemaError::Invalid) if it
/// fails validation.
pub fn from_json<T: Schema + DeserializeOwned>(text: &str) -> SchemaResult<T> {
    let value: Value = serde_json::from_str(text)?;
    from_value(&value)
}

/// Serializes a record to a JSON value keyed by wire names.
///
/// # Errors
/// Returns [`SchemaError::Json`](crate::SchemaError::Json) if the record's
/// `Serialize` implementation fails.
pub fn to_value<T: Serialize>(record: &T) -> SchemaResult<Value> {
    Ok(serde_json::to_value(record)?)
}

/// Serializes a record to JSON text keyed by wire names.
///
/// # Errors
/// Returns [`SchemaError::Json`](crate::SchemaError::Json) if the record's
/// `Serialize` implementation fails.
pub fn to_json<T: Serialize>(record: &T) -> SchemaResult<String> {
    Ok(serde_json::to_string(record)?)
}

/// Validated construction and wire serialization as methods.
///
/// Implemented for every record type that has a field table and serde
/// support.
///
/// # Examples
///
/// ```
/// use clinic_types::Customer;
/// use clinic_validate::WireRecord;
/// use serde_json::json;
///
/// let customer = Customer::from_wire(&json!({
///     "name": "A", "email": "a@b.com", "role": "eng", "customerId": 7
/// })).unwrap();
///
/// assert_eq!(customer.customer_id, 7);
/// assert_eq!(customer.to_wire().unwrap()["customerId"], 7);
/// ```
pub trait WireRecord: Schema + Serialize + DeserializeOwned {
    /// See [`from_value`].
    fn from_wire(value: &Value) -> SchemaResult<Self> {
        from_value(value)
    }

    /// See [`from_json`].
    fn from_wire_str(text: &str) -> SchemaResult<Self> {
        from_json(text)
    }

    /// See [`to_value`].
    fn to_wire(&self) -> SchemaResult<Value> {
        to_value(self)
    }
}

impl<T: Schema + Serialize + DeserializeOwned> WireRecord for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaError;
    use clinic_types::{AnyValue, BaseProblems, Customer, Diabetes, Lab, Problem};
    use serde_json::json;

    fn customer_input(id_key: &str) -> Value {
        let mut value = json!({"name": "A", "email": "a@b.com", "role": "eng"});
        value[id_key] = json!(7);
        value
    }

    #[test]
    fn test_alias_and_internal_name_are_equivalent() {
        let by_alias: Customer = from_value(&customer_input("customerId")).unwrap();
        let by_name: Customer = from_value(&customer_input("customer_id")).unwrap();

        assert_eq!(by_alias.customer_id, 7);
        assert_eq!(by_alias, by_name);
    }

    #[test]
    fn test_missing_email_is_named() {
        let mut input = customer_input("customerId");
        input.as_object_mut().unwrap().remove("email");

        match from_value::<Customer>(&input) {
            Err(SchemaError::Invalid(err)) => {
                assert_eq!(err.paths(), vec!["email"]);
                assert!(err.to_string().contains("email: field required"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_customer_roundtrip_through_wire() {
        let original = Customer {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: "Engineer".to_string(),
            customer_id: -3,
        };

        let wire = original.to_wire().unwrap();
        assert_eq!(
            wire,
            json!({"name": "Ada", "email": "ada@example.com", "role": "Engineer", "customerId": -3})
        );
        assert_eq!(Customer::from_wire(&wire).unwrap(), original);
    }

    #[test]
    fn test_alias_with_special_characters_roundtrips() {
        let text = r#"{"problems":[{"Diabetes":[{"medications":[{"medicationsClasses":[{"className":[{"associatedDrug":[{"name":"asprin","dose":"","strength":"500 mg"}],"associatedDrug#2":[{"name":"somethingElse","dose":"","strength":"500 mg"}]}],"className2":[]}]}],"labs":[{"missing_field":"missing_value"}]}],"Asthma":[{}]}]}"#;

        let problems: BaseProblems = from_json(text).unwrap();
        let drug_2 = &problems.problems[0].diabetes[0].medications[0].medications_classes[0]
            .class_name[0]
            .associated_drug_2[0];
        assert_eq!(drug_2.name, "somethingElse");

        assert_eq!(to_json(&problems).unwrap(), text);
    }

    #[test]
    fn test_empty_diabetes_constructs() {
        let diabetes: Diabetes = from_value(&json!({"medications": [], "labs": []})).unwrap();
        assert!(diabetes.medications.is_empty());
        assert!(diabetes.labs.is_empty());
    }

    #[test]
    fn test_asthma_values_are_preserved() {
        let problem: Problem = from_value(&json!({
            "Diabetes": [],
            "Asthma": [{"inhaler": "albuterol", "puffs": 2}]
        }))
        .unwrap();

        assert_eq!(problem.asthma[0]["inhaler"], AnyValue::from("albuterol"));
        assert_eq!(problem.asthma[0]["puffs"], AnyValue::Integer(2));
    }

    #[test]
    fn test_asthma_large_unsigned_roundtrips_exactly() {
        let text = r#"{"Diabetes":[],"Asthma":[{"id":18446744073709551615,"peak_flow":-12}]}"#;

        let problem: Problem = from_json(text).unwrap();
        assert_eq!(problem.asthma[0]["id"], AnyValue::Unsigned(u64::MAX));
        assert_eq!(problem.asthma[0]["peak_flow"], AnyValue::Integer(-12));
        assert_eq!(to_json(&problem).unwrap(), text);
    }

    #[test]
    fn test_invalid_json_text() {
        let err = from_json::<Lab>("{not json").unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }
}
