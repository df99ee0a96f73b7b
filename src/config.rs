//! Server configuration
//!
//! Values come from an optional TOML file and are then overridden by CLI flags.
//!
//! ```toml
//! bind = "0.0.0.0"
//! port = 8888
//! data_dir = "/var/lib/labboard"
//! route = "/api/dashboard-state"
//! memory = false
//! ```

use crate::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_ROUTE: &str = "/api/dashboard-state";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: IpAddr,

    /// HTTP port
    pub port: u16,

    /// Root directory of the file store (default: ~/.labboard)
    pub data_dir: Option<PathBuf>,

    /// Keep the document in memory only
    pub memory: bool,

    /// Path of the state endpoint
    pub route: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            data_dir: None,
            memory: false,
            route: DEFAULT_ROUTE.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from a TOML file, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: ServerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.route.starts_with('/') {
            anyhow::bail!("Route must start with '/': {}", self.route);
        }
        if self.route == "/health" {
            anyhow::bail!("Route '/health' is reserved for the health check");
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Effective file store root
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}

/// ~/.labboard
pub fn default_data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
    Ok(home.join(".labboard"))
}
