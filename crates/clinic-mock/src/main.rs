//! Prints fake clinic records as JSON lines.

use std::io::{self, Write};

use clinic_mock::{FactoryConfig, ModelFactory};
use clinic_types::{BaseProblems, Customer, Schema};
use clinic_validate::to_json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_COUNT: usize = 25;
const DEFAULT_MODEL: &str = "customer";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays valid JSON lines
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let model = std::env::var("CLINIC_MOCK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let count = match std::env::var("CLINIC_MOCK_COUNT") {
        Ok(raw) => raw.parse()?,
        Err(_) => DEFAULT_COUNT,
    };

    let seed = match std::env::var("CLINIC_MOCK_SEED") {
        Ok(raw) => Some(raw.parse()?),
        Err(_) => None,
    };

    let config = FactoryConfig {
        seed,
        ..Default::default()
    };

    match model.as_str() {
        "customer" => emit::<Customer>(config, count),
        "problems" => emit::<BaseProblems>(config, count),
        other => Err(format!("unknown model '{}' (expected customer or problems)", other).into()),
    }
}

fn emit<T>(config: FactoryConfig, count: usize) -> Result<(), Box<dyn std::error::Error>>
where
    T: Schema + Serialize + DeserializeOwned,
{
    tracing::info!("Generating {} {} record(s), seed {:?}", count, T::NAME, config.seed);

    let mut factory = ModelFactory::<T>::with_config(config)?;
    let records = factory.batch(count)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        writeln!(out, "{}", to_json(record)?)?;
    }

    tracing::info!("Wrote {} {} record(s)", records.len(), T::NAME);
    Ok(())
}
