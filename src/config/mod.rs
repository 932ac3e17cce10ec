//! Configuration for the PDM server

use crate::core::error::{ConfigError, PdmResult};
use crate::core::product::MATERIALS;
use crate::description::GeminiConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Root configuration
///
/// ```yaml
/// server:
///   bind: 0.0.0.0:8080
/// description:
///   model: gemini-2.5-flash
///   timeout_secs: 30
/// materials:
///   - Aluminum 6061-T6
///   - Brass C360
/// event_bus_capacity: 256
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdmConfig {
    pub server: ServerConfig,
    pub description: GeminiConfig,
    /// Material catalog offered by the form. The first entry is the default.
    pub materials: Vec<String>,
    pub event_bus_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl Default for PdmConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            description: GeminiConfig::default(),
            materials: MATERIALS.iter().map(|m| m.to_string()).collect(),
            event_bus_capacity: 1024,
        }
    }
}

impl PdmConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> PdmResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: format!("{}: {}", path.display(), e),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> PdmResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load(path: Option<&str>) -> PdmResult<Self> {
        match path {
            Some(path) => {
                tracing::info!(path, "loading configuration");
                Self::from_yaml_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Set the description API key, replacing any configured one
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.description = self.description.with_api_key(api_key);
        self
    }

    /// Parsed bind address
    pub fn bind_addr(&self) -> PdmResult<SocketAddr> {
        self.server
            .bind
            .parse()
            .map_err(|e: std::net::AddrParseError| {
                ConfigError::ParseError {
                    file: None,
                    message: format!("server.bind '{}': {}", self.server.bind, e),
                }
                .into()
            })
    }

    /// Check settings that serde defaults cannot guarantee
    pub fn validate(&self) -> PdmResult<()> {
        self.bind_addr()?;

        let required = [
            ("description.model", self.description.model.as_str()),
            ("description.base_url", self.description.base_url.as_str()),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingSetting {
                    key: key.to_string(),
                }
                .into());
            }
        }

        if self.materials.is_empty() {
            return Err(ConfigError::MissingSetting {
                key: "materials".to_string(),
            }
            .into());
        }
        if self.event_bus_capacity == 0 {
            return Err(ConfigError::MissingSetting {
                key: "event_bus_capacity".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
