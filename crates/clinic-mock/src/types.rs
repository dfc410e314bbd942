//! Factory configuration and error types.

use clinic_types::KindTag;
use clinic_validate::SchemaError;
use thiserror::Error;

/// Errors raised when defining a factory.
///
/// A factory that fails definition cannot be used; fix the registry or
/// configuration and define it again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryConfigurationError {
    /// A field has no generator for its type.
    #[error("no fake-value generator for {record} field '{path}' of kind {kind}")]
    UnsupportedField {
        /// Record type the factory targets.
        record: &'static str,
        /// Wire-key path of the field.
        path: String,
        /// Kind that has no generator.
        kind: KindTag,
    },

    /// List length bounds are inverted.
    #[error("invalid list bounds: min_items {min} > max_items {max}")]
    InvalidListBounds {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Errors raised when building records.
#[derive(Error, Debug)]
pub enum FactoryError {
    /// An override names a field the record does not declare.
    #[error("unknown override key: {key}")]
    UnknownOverride {
        /// The unrecognized key.
        key: String,
    },

    /// The generated record, with overrides applied, failed validation.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Result type for factory builds.
pub type FactoryResult<T> = Result<T, FactoryError>;

/// Configuration for a record factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryConfig {
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Minimum generated length for record lists.
    pub min_items: usize,
    /// Maximum generated length for record lists.
    pub max_items: usize,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_items: 0,
            max_items: 3,
        }
    }
}

impl FactoryConfig {
    /// Creates a config with a fixed seed and default list bounds.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Checks the list bounds.
    pub fn validate(&self) -> Result<(), FactoryConfigurationError> {
        if self.min_items > self.max_items {
            return Err(FactoryConfigurationError::InvalidListBounds {
                min: self.min_items,
                max: self.max_items,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_config_default() {
        let config = FactoryConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.min_items, 0);
        assert_eq!(config.max_items, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_factory_config_inverted_bounds() {
        let config = FactoryConfig {
            min_items: 4,
            max_items: 1,
            ..FactoryConfig::seeded(9)
        };
        assert_eq!(
            config.validate(),
            Err(FactoryConfigurationError::InvalidListBounds { min: 4, max: 1 })
        );
    }

    #[test]
    fn test_unsupported_field_message() {
        let err = FactoryConfigurationError::UnsupportedField {
            record: "Customer",
            path: "customerId".to_string(),
            kind: KindTag::Integer,
        };
        assert_eq!(
            err.to_string(),
            "no fake-value generator for Customer field 'customerId' of kind integer"
        );
    }
}
