use clap::Parser;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use crate::utils::error::{DispatchError, Result};
use crate::utils::validation::Validate;

/// Service configuration. Defaults mirror the original deployment: gRPC on
/// 50051, HTTP on 5000, a 15-minute bound on any single run.
#[derive(Debug, Clone, Parser)]
#[command(name = "drift-dispatch")]
#[command(about = "Dispatch service for oceanographic drift simulations")]
pub struct ServiceConfig {
    /// Port for the gRPC listener
    #[arg(long, default_value_t = 50051)]
    pub grpc_port: u16,

    /// Port for the HTTP listener
    #[arg(long, default_value_t = 5000)]
    pub http_port: u16,

    /// Executable invoked to run the actual simulation
    #[arg(long, default_value = "opendrift-runner")]
    pub engine_cmd: String,

    /// Model names to expose, comma separated
    #[arg(long, value_delimiter = ',', default_value = "OceanDrift")]
    pub models: Vec<String>,

    /// Give up waiting for a run after this many seconds
    #[arg(long, default_value_t = 900)]
    pub engine_timeout_secs: u64,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// TOML file whose values override the flags above
    #[arg(long)]
    pub config: Option<String>,
}

/// The same settings as the CLI surface, loaded from a TOML file. Every
/// field is optional; absent fields keep the flag/default value.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub grpc_port: Option<u16>,
    pub http_port: Option<u16>,
    pub engine_cmd: Option<String>,
    pub models: Option<Vec<String>>,
    pub engine_timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DispatchError::Config {
            message: format!("cannot read config file {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| DispatchError::Config {
            message: format!("invalid config file {}: {e}", path.display()),
        })
    }
}

impl ServiceConfig {
    /// Apply the optional TOML file, then sanity-check the result.
    pub fn resolve(mut self) -> Result<Self> {
        if let Some(path) = self.config.clone() {
            let file = FileConfig::load(Path::new(&path))?;
            if let Some(port) = file.grpc_port {
                self.grpc_port = port;
            }
            if let Some(port) = file.http_port {
                self.http_port = port;
            }
            if let Some(cmd) = file.engine_cmd {
                self.engine_cmd = cmd;
            }
            if let Some(models) = file.models {
                self.models = models;
            }
            if let Some(secs) = file.engine_timeout_secs {
                self.engine_timeout_secs = secs;
            }
        }
        self.validate()?;
        Ok(self)
    }

    pub fn grpc_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.grpc_port))
    }

    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.http_port))
    }

    pub fn engine_timeout(&self) -> Duration {
        Duration::from_secs(self.engine_timeout_secs)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        if self.grpc_port == 0 || self.http_port == 0 {
            return Err(DispatchError::Config {
                message: "listener ports must be non-zero".to_string(),
            });
        }
        if self.grpc_port == self.http_port {
            return Err(DispatchError::Config {
                message: format!("gRPC and HTTP listeners share port {}", self.grpc_port),
            });
        }
        if self.engine_cmd.trim().is_empty() {
            return Err(DispatchError::Config {
                message: "engine_cmd must not be empty".to_string(),
            });
        }
        if self.models.is_empty() || self.models.iter().any(|m| m.trim().is_empty()) {
            return Err(DispatchError::Config {
                message: "at least one non-empty model name must be configured".to_string(),
            });
        }
        if self.engine_timeout_secs == 0 {
            return Err(DispatchError::Config {
                message: "engine_timeout_secs must be positive".to_string(),
            });
        }
        Ok(())
    }
}
