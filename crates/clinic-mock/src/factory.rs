//! Schema-driven record factories.
//!
//! A [`ModelFactory`] is defined once per record type. Definition resolves a
//! generator for every field in the record tree up front, so a factory that
//! exists can always produce values. Each build generates a wire-keyed JSON
//! object, applies caller overrides, and constructs the record through
//! `clinic-validate`.

use std::marker::PhantomData;

use clinic_types::{BaseProblems, Customer, FieldKind, FieldSpec, Schema};
use clinic_validate::from_value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::generators::{Generator, GeneratorRegistry};
use crate::types::{FactoryConfig, FactoryConfigurationError, FactoryError, FactoryResult};

/// Factory for [`Customer`] records.
pub type MockCustomerFactory = ModelFactory<Customer>;

/// Factory for [`BaseProblems`] trees.
pub type MockProblemsFactory = ModelFactory<BaseProblems>;

#[derive(Clone)]
enum FieldPlan {
    Generated(Generator),
    Records(RecordPlan),
}

/// Resolved generators for one record type, in field order.
#[derive(Clone)]
struct RecordPlan {
    fields: Vec<(&'static str, FieldPlan)>,
}

impl RecordPlan {
    fn compile(
        root: &'static str,
        record: &'static str,
        fields: &'static [FieldSpec],
        registry: &GeneratorRegistry,
        path: &str,
    ) -> Result<Self, FactoryConfigurationError> {
        let mut planned = Vec::with_capacity(fields.len());
        for field in fields {
            let field_path = if path.is_empty() {
                field.wire_name.to_string()
            } else {
                format!("{}.{}", path, field.wire_name)
            };

            let plan = match (registry.resolve(record, field), &field.kind) {
                (Some(generator), _) => FieldPlan::Generated(generator.clone()),
                (None, FieldKind::Records { record, fields }) => FieldPlan::Records(
                    Self::compile(root, *record, *fields, registry, &field_path)?,
                ),
                (None, kind) => {
                    return Err(FactoryConfigurationError::UnsupportedField {
                        record: root,
                        path: field_path,
                        kind: kind.tag(),
                    })
                }
            };
            planned.push((field.wire_name, plan));
        }
        Ok(Self { fields: planned })
    }

    fn generate(&self, rng: &mut StdRng, config: &FactoryConfig) -> Map<String, Value> {
        let mut out = Map::with_capacity(self.fields.len());
        for (wire_name, plan) in &self.fields {
            let value = match plan {
                FieldPlan::Generated(generator) => generator(rng),
                FieldPlan::Records(nested) => {
                    let count = rng.gen_range(config.min_items..=config.max_items);
                    Value::Array(
                        (0..count)
                            .map(|_| Value::Object(nested.generate(rng, config)))
                            .collect(),
                    )
                }
            };
            out.insert(wire_name.to_string(), value);
        }
        out
    }
}

/// Builds fully populated fake records of type `T`.
///
/// # Examples
///
/// ```
/// use clinic_mock::{FactoryConfig, MockCustomerFactory};
///
/// let mut factory = MockCustomerFactory::with_config(FactoryConfig::seeded(7)).unwrap();
/// let customer = factory.build().unwrap();
///
/// assert!(!customer.name.is_empty());
/// assert!(customer.customer_id > 0);
/// ```
pub struct ModelFactory<T> {
    plan: RecordPlan,
    config: FactoryConfig,
    rng: StdRng,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Schema + DeserializeOwned> ModelFactory<T> {
    /// Defines a factory with the standard generators and default config.
    ///
    /// # Errors
    /// Returns an error if some field of `T` has no generator.
    pub fn new() -> Result<Self, FactoryConfigurationError> {
        Self::with_config(FactoryConfig::default())
    }

    /// Defines a factory with the standard generators.
    pub fn with_config(config: FactoryConfig) -> Result<Self, FactoryConfigurationError> {
        Self::with_registry(GeneratorRegistry::standard(), config)
    }

    /// Defines a factory from an explicit generator registry.
    ///
    /// # Errors
    /// Returns [`FactoryConfigurationError::UnsupportedField`] for the first
    /// field with no generator, or
    /// [`FactoryConfigurationError::InvalidListBounds`] for a bad config.
    pub fn with_registry(
        registry: GeneratorRegistry,
        config: FactoryConfig,
    ) -> Result<Self, FactoryConfigurationError> {
        config.validate()?;
        let plan = RecordPlan::compile(T::NAME, T::NAME, T::FIELDS, &registry, "")?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        tracing::debug!(record = T::NAME, seed = ?config.seed, "defined factory");

        Ok(Self {
            plan,
            config,
            rng,
            _marker: PhantomData,
        })
    }

    /// Returns the factory configuration.
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Builds one record with every field generated.
    pub fn build(&mut self) -> FactoryResult<T> {
        self.build_with(Map::new())
    }

    /// Builds one record, taking the given fields from `overrides`.
    ///
    /// Override keys may be internal names or wire keys of `T`'s top-level
    /// fields.
    ///
    /// # Errors
    /// Returns [`FactoryError::UnknownOverride`] for undeclared keys and
    /// [`FactoryError::Schema`] if an override value fails validation.
    pub fn build_with(&mut self, overrides: Map<String, Value>) -> FactoryResult<T> {
        let mut raw = self.plan.generate(&mut self.rng, &self.config);
        for (key, value) in overrides {
            let field = T::field(&key).ok_or(FactoryError::UnknownOverride { key })?;
            raw.insert(field.wire_name.to_string(), value);
        }

        tracing::trace!(record = T::NAME, "built record");
        Ok(from_value(&Value::Object(raw))?)
    }

    /// Builds `count` records.
    ///
    /// Per-record seeds are drawn from the factory's RNG first, so a seeded
    /// factory yields the same batch whether or not generation runs in
    /// parallel.
    pub fn batch(&mut self, count: usize) -> FactoryResult<Vec<T>> {
        let seeds: Vec<u64> = (0..count).map(|_| self.rng.gen()).collect();
        let raws = self.generate_seeded(seeds);

        tracing::debug!(record = T::NAME, count, "generated batch");
        raws.iter()
            .map(|raw| from_value(raw).map_err(FactoryError::from))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn generate_seeded(&self, seeds: Vec<u64>) -> Vec<Value> {
        let plan = &self.plan;
        let config = &self.config;
        seeds
            .into_par_iter()
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                Value::Object(plan.generate(&mut rng, config))
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn generate_seeded(&self, seeds: Vec<u64>) -> Vec<Value> {
        seeds
            .into_iter()
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                Value::Object(self.plan.generate(&mut rng, &self.config))
            })
            .collect()
    }
}
