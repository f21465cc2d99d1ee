// ⚙️ Server configuration - listening address only

use anyhow::{Context as AnyhowContext, Result};
use std::net::SocketAddr;

/// Environment variable holding the listening address (e.g., "0.0.0.0:8080")
pub const ADDR_ENV: &str = "RECEIPT_POINTS_ADDR";

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_addr(std::env::var(ADDR_ENV).ok().as_deref())
    }

    /// Build from an optional address string; `None` means the default
    pub fn from_addr(addr: Option<&str>) -> Result<Self> {
        let Some(addr) = addr else {
            return Ok(Self::default());
        };

        let bind_addr = addr
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {:?}", ADDR_ENV, addr))?;

        Ok(Self { bind_addr })
    }
}
