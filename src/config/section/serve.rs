//! `[serve]` section configuration.
//!
//! Describes the development server the site is previewed on. In
//! `development` mode its address becomes the site URL.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # Network interface (127.0.0.1 = localhost only)
//! port = 3000                 # HTTP port number
//! ```

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};

/// Development server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface the dev server binds.
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 3000,
        }
    }
}

impl ServeConfig {
    /// Dev server address, e.g. `http://127.0.0.1:3000`.
    pub fn url(&self) -> String {
        match self.interface {
            IpAddr::V4(ip) => format!("http://{}:{}", ip, self.port),
            IpAddr::V6(ip) => format!("http://[{}]:{}", ip, self.port),
        }
    }
}
