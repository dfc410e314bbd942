//! Fake-value generators and their registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use clinic_types::{FieldSpec, KindTag};
use fake::faker::internet::en::SafeEmail;
use fake::faker::job::en::Title as JobTitle;
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::Rng;
use serde_json::{json, Map, Value};

/// Produces one JSON value for a field.
pub type Generator = Arc<dyn Fn(&mut StdRng) -> Value + Send + Sync>;

const DRUG_NAMES: &[&str] = &[
    "aspirin",
    "metformin",
    "insulin glargine",
    "glipizide",
    "sitagliptin",
    "lisinopril",
    "atorvastatin",
    "albuterol",
];

const STRENGTHS_MG: &[u32] = &[5, 10, 25, 50, 100, 250, 500, 850, 1000];

/// Generators keyed by field and by field kind.
///
/// Lookup order for a field is: `Record.field` (qualified internal name),
/// the internal name, the wire key, then the field's [`KindTag`].
///
/// # Examples
///
/// ```
/// use clinic_mock::GeneratorRegistry;
/// use clinic_types::{FieldKind, FieldSpec, KindTag};
/// use serde_json::json;
///
/// let registry = GeneratorRegistry::empty()
///     .with_field("Lab.missing_field", |_| json!("pending"))
///     .with_kind(KindTag::Text, |_| json!("text"));
///
/// let field = FieldSpec::new("missing_field", FieldKind::Text);
/// assert!(registry.resolve("Lab", &field).is_some());
/// assert!(registry.resolve("Other", &FieldSpec::new("x", FieldKind::Integer)).is_none());
/// ```
#[derive(Clone, Default)]
pub struct GeneratorRegistry {
    by_field: HashMap<String, Generator>,
    by_kind: HashMap<KindTag, Generator>,
}

impl GeneratorRegistry {
    /// A registry with no generators.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry covering every field kind, with semantic generators for
    /// the known customer and medication fields.
    pub fn standard() -> Self {
        Self::empty()
            .with_field("name", |rng| json!(Name().fake_with_rng::<String, _>(rng)))
            .with_field("email", |rng| {
                json!(SafeEmail().fake_with_rng::<String, _>(rng))
            })
            .with_field("role", |rng| {
                json!(JobTitle().fake_with_rng::<String, _>(rng))
            })
            .with_field("AssociatedDrug.name", |rng| {
                json!(DRUG_NAMES[rng.gen_range(0..DRUG_NAMES.len())])
            })
            .with_field("dose", |rng| json!(format!("{} tab", rng.gen_range(1..=4))))
            .with_field("strength", |rng| {
                json!(format!(
                    "{} mg",
                    STRENGTHS_MG[rng.gen_range(0..STRENGTHS_MG.len())]
                ))
            })
            .with_kind(KindTag::Text, |rng| {
                json!(Word().fake_with_rng::<String, _>(rng))
            })
            .with_kind(KindTag::Integer, |rng| {
                json!(rng.gen_range(1..=i64::from(i32::MAX)))
            })
            .with_kind(KindTag::Dynamic, fake_any_records)
    }

    /// Registers a generator for a field, by `Record.field`, internal name,
    /// or wire key.
    pub fn with_field<F>(mut self, key: impl Into<String>, generator: F) -> Self
    where
        F: Fn(&mut StdRng) -> Value + Send + Sync + 'static,
    {
        self.by_field.insert(key.into(), Arc::new(generator));
        self
    }

    /// Registers the fallback generator for a field kind.
    pub fn with_kind<F>(mut self, kind: KindTag, generator: F) -> Self
    where
        F: Fn(&mut StdRng) -> Value + Send + Sync + 'static,
    {
        self.by_kind.insert(kind, Arc::new(generator));
        self
    }

    /// Finds the generator for `field` of `record`.
    pub fn resolve(&self, record: &str, field: &FieldSpec) -> Option<&Generator> {
        self.by_field
            .get(&format!("{}.{}", record, field.name))
            .or_else(|| self.by_field.get(field.name))
            .or_else(|| self.by_field.get(field.wire_name))
            .or_else(|| self.by_kind.get(&field.kind.tag()))
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<_> = self.by_field.keys().collect();
        fields.sort();
        let mut kinds: Vec<_> = self.by_kind.keys().map(|k| k.to_string()).collect();
        kinds.sort();
        f.debug_struct("GeneratorRegistry")
            .field("fields", &fields)
            .field("kinds", &kinds)
            .finish()
    }
}

/// A short list of small free-form records.
fn fake_any_records(rng: &mut StdRng) -> Value {
    let count = rng.gen_range(0..=2);
    let records = (0..count)
        .map(|_| {
            let mut record = Map::new();
            for _ in 0..rng.gen_range(1..=3) {
                let key: String = Word().fake_with_rng(rng);
                let value: String = Sentence(1..4).fake_with_rng(rng);
                record.insert(key, json!(value));
            }
            Value::Object(record)
        })
        .collect();
    Value::Array(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_types::FieldKind;
    use rand::SeedableRng;

    fn generate(registry: &GeneratorRegistry, record: &str, field: FieldSpec) -> Value {
        let mut rng = StdRng::seed_from_u64(11);
        let generator = registry.resolve(record, &field).unwrap();
        generator(&mut rng)
    }

    #[test]
    fn test_qualified_key_wins() {
        let registry = GeneratorRegistry::standard();
        let drug = generate(
            &registry,
            "AssociatedDrug",
            FieldSpec::new("name", FieldKind::Text),
        );
        let drug = drug.as_str().unwrap();
        assert!(DRUG_NAMES.iter().any(|name| *name == drug));
    }

    #[test]
    fn test_dose_and_strength_format() {
        let registry = GeneratorRegistry::standard();
        let dose = generate(&registry, "AssociatedDrug", FieldSpec::new("dose", FieldKind::Text));
        let strength = generate(
            &registry,
            "AssociatedDrug",
            FieldSpec::new("strength", FieldKind::Text),
        );
        assert!(dose.as_str().unwrap().ends_with(" tab"));
        assert!(strength.as_str().unwrap().ends_with(" mg"));
    }

    #[test]
    fn test_wire_key_lookup() {
        let registry = GeneratorRegistry::empty().with_field("customerId", |_| json!(5));
        let field = FieldSpec::aliased("customer_id", "customerId", FieldKind::Integer);
        assert_eq!(generate(&registry, "Customer", field), json!(5));
    }

    #[test]
    fn test_kind_fallbacks() {
        let registry = GeneratorRegistry::standard();
        let id = generate(&registry, "X", FieldSpec::new("n", FieldKind::Integer));
        assert!(id.as_i64().unwrap() > 0);

        let word = generate(&registry, "X", FieldSpec::new("w", FieldKind::Text));
        assert!(!word.as_str().unwrap().is_empty());

        let any = generate(&registry, "X", FieldSpec::new("a", FieldKind::Dynamic));
        assert!(any.as_array().unwrap().iter().all(Value::is_object));
    }

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry = GeneratorRegistry::empty();
        assert!(registry
            .resolve("Lab", &FieldSpec::new("missing_field", FieldKind::Text))
            .is_none());
        assert_eq!(
            format!("{:?}", registry),
            "GeneratorRegistry { fields: [], kinds: [] }"
        );
    }
}
