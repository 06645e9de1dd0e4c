//! Server configuration, read from the environment

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use crate::error::ServerError;

pub const LISTEN_VAR: &str = "UNITCONV_LISTEN";
pub const WEB_ROOT_VAR: &str = "UNITCONV_WEB_ROOT";
pub const CORS_VAR: &str = "UNITCONV_CORS";

const DEFAULT_LISTEN: &str = "0.0.0.0:9742";
const DEFAULT_WEB_ROOT: &str = "web";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Socket address to bind
    pub listen_addr: SocketAddr,
    /// Directory served at `/`
    pub web_root: PathBuf,
    /// Allow any origin to call the API
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 9742)),
            web_root: PathBuf::from(DEFAULT_WEB_ROOT),
            enable_cors: false,
        }
    }
}

impl ServerConfig {
    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen = lookup(LISTEN_VAR).unwrap_or_else(|| DEFAULT_LISTEN.to_string());
        let listen_addr = listen.trim().parse::<SocketAddr>().map_err(|_| ServerError::Config {
            var: LISTEN_VAR,
            value: listen.clone(),
        })?;

        let web_root = lookup(WEB_ROOT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WEB_ROOT));

        let enable_cors = match lookup(CORS_VAR) {
            None => false,
            Some(value) => parse_flag(&value).ok_or(ServerError::Config { var: CORS_VAR, value })?,
        };

        Ok(Self { listen_addr, web_root, enable_cors })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
