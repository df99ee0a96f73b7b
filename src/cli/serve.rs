use crate::config::ServerConfig;
use crate::server::start_server;
use crate::Result;
use colored::Colorize;
use std::net::IpAddr;
use std::path::PathBuf;

/// Command-line overrides for the server configuration
#[derive(Debug, Clone, Default)]
pub struct ServeOptions {
    pub config: Option<PathBuf>,
    pub bind: Option<IpAddr>,
    pub port: Option<u16>,
    pub data_dir: Option<PathBuf>,
    pub memory: bool,
    pub route: Option<String>,
}

impl ServeOptions {
    /// Load the config file (if any) and apply flag overrides on top
    pub fn resolve(self) -> Result<ServerConfig> {
        let mut config = ServerConfig::load(self.config.as_deref())?;

        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = self.data_dir {
            config.data_dir = Some(dir);
        }
        if self.memory {
            config.memory = true;
        }
        if let Some(route) = self.route {
            config.route = route;
        }

        config.validate()?;
        Ok(config)
    }
}

pub async fn run(options: ServeOptions) -> Result<()> {
    let config = options.resolve()?;

    println!(
        "{}",
        format!("✓ Serving dashboard state on http://{}{}", config.socket_addr(), config.route).green()
    );
    if config.memory {
        println!("{}", "⚠ In-memory mode: changes are lost on shutdown".yellow());
    }

    start_server(config).await
}
