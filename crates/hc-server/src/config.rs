use hc_core::{CompactorConfig, HcError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub compactor: CompactorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.compactor.validate()?;
        Ok(config)
    }

    /// Defaults, then the JSON file named by `HC_CONFIG`, then `HC_HOST` /
    /// `HC_PORT`.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var("HC_CONFIG") {
            Ok(path) => Self::from_json_file(&path)?,
            Err(_) => Self::default(),
        };
        if let Ok(host) = std::env::var("HC_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("HC_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| HcError::InvalidConfig(format!("HC_PORT is not a port: {port}")))?;
        }
        Ok(config)
    }
}
