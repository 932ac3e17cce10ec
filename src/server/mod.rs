//! Server module for building the HTTP server
//!
//! `ServerBuilder` wires a product store, a description service and an
//! optional event bus into a `ServerHost`, then exposes it over REST.

pub mod builder;
pub mod exposure;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
