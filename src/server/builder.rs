//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::PdmConfig;
use crate::core::events::EventBus;
use crate::core::product::MATERIALS;
use crate::core::service::ProductService;
use crate::description::{DescriptionService, GeminiGenerator, TextGenerator};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the PDM HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_product_service(InMemoryProductService::new())
///     .with_text_generator(GeminiGenerator::new(config.description.clone())?)
///     .with_event_bus(1024)
///     .build()?;
/// ```
pub struct ServerBuilder {
    product_service: Option<Arc<dyn ProductService>>,
    description_service: Option<DescriptionService>,
    materials: Option<Vec<String>>,
    custom_routes: Vec<Router>,
    event_bus: Option<EventBus>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            product_service: None,
            description_service: None,
            materials: None,
            custom_routes: Vec::new(),
            event_bus: None,
        }
    }

    /// Start from a loaded configuration.
    ///
    /// Sets the material catalog, the event bus and a Gemini-backed
    /// description service. The product service still has to be provided.
    pub fn from_config(config: &PdmConfig) -> Result<Self> {
        let generator = GeminiGenerator::new(config.description.clone())?;

        Ok(Self::new()
            .with_text_generator(generator)
            .with_materials(config.materials.clone())
            .with_event_bus(config.event_bus_capacity))
    }

    /// Set the product service (required)
    pub fn with_product_service(mut self, service: impl ProductService + 'static) -> Self {
        self.product_service = Some(Arc::new(service));
        self
    }

    /// Set the description service (required, or use `with_text_generator`)
    pub fn with_description_service(mut self, service: DescriptionService) -> Self {
        self.description_service = Some(service);
        self
    }

    /// Build the description service around a text generator
    pub fn with_text_generator(self, generator: impl TextGenerator + 'static) -> Self {
        self.with_description_service(DescriptionService::shared(Arc::new(generator)))
    }

    /// Override the material catalog offered by the form
    pub fn with_materials(mut self, materials: Vec<String>) -> Self {
        self.materials = Some(materials);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Enable the event bus for change notifications
    ///
    /// # Arguments
    ///
    /// * `capacity` - Buffer size for the broadcast channel (recommended: 1024)
    pub fn with_event_bus(mut self, capacity: usize) -> Self {
        self.event_bus = Some(EventBus::new(capacity));
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let products = self.product_service.take().ok_or_else(|| {
            anyhow::anyhow!("ProductService is required. Call .with_product_service()")
        })?;

        let descriptions = self.description_service.take().ok_or_else(|| {
            anyhow::anyhow!(
                "DescriptionService is required. Call .with_description_service() or .with_text_generator()"
            )
        })?;

        let materials = self
            .materials
            .take()
            .unwrap_or_else(|| MATERIALS.iter().map(|m| m.to_string()).collect());

        let mut host = ServerHost::new(products, descriptions, materials);

        if let Some(event_bus) = self.event_bus.take() {
            host = host.with_event_bus(event_bus);
        }

        Ok(host)
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr` and serves until SIGTERM or Ctrl+C.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
