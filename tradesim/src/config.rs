use serde::{Deserialize, Serialize};
use std::env;
use tradesim_integration::error::SocketError;
use url::Url;

/// Environment variable overriding [`SimulatorConfig::api_url`].
pub const ENV_API_URL: &str = "TRADESIM_API_URL";

/// Environment variable overriding [`SimulatorConfig::ws_url`].
pub const ENV_WS_URL: &str = "TRADESIM_WS_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_WS_URL: &str = "wss://ws.gomarket-cpp.goquant.io/ws/l2-orderbook/okx/BTC-USDT-SWAP";

/// Resolved service endpoints, injected into the [`Simulator`](crate::simulator::Simulator) at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Base Url of the simulation service Http API.
    pub api_url: String,

    /// Order book WebSocket feed. Carried for completeness, the simulation flow never connects.
    pub ws_url: String,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            ws_url: DEFAULT_WS_URL.to_string(),
        }
    }
}

impl SimulatorConfig {
    /// Construct a [`SimulatorConfig`] from the process environment, falling back to the
    /// literal defaults per field.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct a [`SimulatorConfig`] using the provided variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        Self {
            api_url: resolve(ENV_API_URL, DEFAULT_API_URL),
            ws_url: resolve(ENV_WS_URL, DEFAULT_WS_URL),
        }
    }

    /// Replace the [`Self::api_url`].
    pub fn with_api_url<S>(mut self, api_url: S) -> Self
    where
        S: Into<String>,
    {
        self.api_url = api_url.into();
        self
    }

    /// Parse & validate the [`Self::api_url`], returning it without a trailing `/`.
    pub fn api_base_url(&self) -> Result<String, SocketError> {
        let url = Url::parse(&self.api_url)?;
        Ok(url.as_str().trim_end_matches('/').to_owned())
    }
}
