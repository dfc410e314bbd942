//! # clinic-mock
//!
//! Fake data factories for clinic records.
//!
//! A [`ModelFactory`] walks a record's field table and fills every field with
//! a plausible fake value: person names, safe email addresses, job titles,
//! drug names, doses and strengths, and lorem text or positive integers as
//! fallbacks. Generated records go through `clinic-validate`, so a build only
//! fails when caller overrides are invalid.
//!
//! ## Features
//!
//! - `parallel` (default): Generates [`ModelFactory::batch`] items with rayon.
//!
//! ## Usage
//!
//! ```rust
//! use clinic_mock::{FactoryConfig, MockCustomerFactory};
//!
//! let mut factory = MockCustomerFactory::with_config(FactoryConfig::seeded(1)).unwrap();
//! let customers = factory.batch(25).unwrap();
//!
//! assert_eq!(customers.len(), 25);
//! assert!(customers.iter().all(|c| c.email.contains('@')));
//! ```

#![warn(missing_docs)]

mod factory;
mod generators;
mod types;

pub use factory::{MockCustomerFactory, MockProblemsFactory, ModelFactory};
pub use generators::{Generator, GeneratorRegistry};
pub use types::{FactoryConfig, FactoryConfigurationError, FactoryError, FactoryResult};

// Re-export clinic-validate for convenience
pub use clinic_validate;
