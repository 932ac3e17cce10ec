//! PDM server
//!
//! Serves the product catalog and description endpoints over REST.
//!
//! Environment:
//! - `PDM_CONFIG`: path to a YAML config file (optional)
//! - `PDM_API_KEY` or `API_KEY`: text-generation API key, overrides the file
//! - `RUST_LOG`: log filter, defaults to `info`

use anyhow::Result;
use pdm::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::var("PDM_CONFIG").ok();
    let mut config = PdmConfig::load(config_path.as_deref())?;

    if let Some(api_key) = std::env::var("PDM_API_KEY")
        .ok()
        .or_else(|| std::env::var("API_KEY").ok())
    {
        config = config.with_api_key(api_key);
    }

    if config.description.api_key.is_none() {
        tracing::warn!("no API key configured; description endpoints will fail until one is set");
    }

    tracing::info!(
        bind = %config.server.bind,
        model = %config.description.model,
        materials = config.materials.len(),
        "starting pdm-server v{}",
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::from_config(&config)?
        .with_product_service(InMemoryProductService::new())
        .serve(&config.server.bind)
        .await
}
