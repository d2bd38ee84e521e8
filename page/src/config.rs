//! Host configuration loaded from environment variables.
//!
//! Loaded once at startup (after `.env` has been merged into the process
//! environment) and passed explicitly to whatever needs it.
//!
//! ## Variables
//!
//! - `NASA_API_KEY` - API key appended to every request (default: empty,
//!   which the provider rejects)
//! - `APOD_ENDPOINT` - APOD endpoint (default: `https://api.nasa.gov/planetary/apod`)
//! - `LISTEN` - Bind address of the page server (default: `127.0.0.1:8080`)
//! - `RUST_LOG` - Log filter (default: `info`)

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use apod_core::DEFAULT_ENDPOINT;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub listen_addr: SocketAddr,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN` is not a socket address.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("NASA_API_KEY").unwrap_or_default();
        let endpoint = lookup("APOD_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let listen = lookup("LISTEN").unwrap_or_else(|| DEFAULT_LISTEN.to_string());
        let listen_addr = listen
            .parse()
            .with_context(|| format!("LISTEN must be a socket address, got {listen:?}"))?;
        let log_level = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            api_key,
            endpoint,
            listen_addr,
            log_level,
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
