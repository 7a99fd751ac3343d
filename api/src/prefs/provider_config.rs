use crate::network::Network;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// Environment variable holding the node provider api key.
pub const API_KEY_VAR: &str = "ALCHEMY_API_KEY";
/// Environment variable selecting the provider network, eg `eth-mainnet`.
pub const NETWORK_VAR: &str = "ALCHEMY_NETWORK";

/// Everything needed to reach the node provider.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    api_key: Option<String>,
    network: Network,
}

impl ProviderConfig {
    pub fn new(api_key: Option<String>, network: Network) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            network,
        }
    }

    /// Creates a ProviderConfig from environment variables.
    ///
    /// The process environment is consulted first. Web builds have no process
    /// environment, so the value present at compile time is used as a fallback.
    ///
    /// # Environment Variables:
    /// - `ALCHEMY_API_KEY`: provider key. May be absent; requests then fail
    ///   with [crate::ChainError::MissingApiKey] instead of aborting startup.
    /// - `ALCHEMY_NETWORK`: "eth-mainnet" (default), "eth-sepolia" or "eth-holesky".
    pub fn from_env() -> Self {
        Self::from_lookup(|var| {
            env::var(var).ok().or_else(|| match var {
                API_KEY_VAR => option_env!("ALCHEMY_API_KEY").map(String::from),
                NETWORK_VAR => option_env!("ALCHEMY_NETWORK").map(String::from),
                _ => None,
            })
        })
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_VAR);

        let network = match lookup(NETWORK_VAR) {
            Some(raw) => Network::from_str(raw.trim()).unwrap_or_else(|_| {
                dioxus_logger::tracing::warn!(
                    "unknown {} `{}`, using {}",
                    NETWORK_VAR,
                    raw,
                    Network::default()
                );
                Network::default()
            }),
            None => Network::default(),
        };

        let config = Self::new(api_key, network);
        if config.api_key.is_none() {
            dioxus_logger::tracing::warn!("{} is not set; block data will be unavailable", API_KEY_VAR);
        }
        config
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// The JSON-RPC endpoint, or `None` when no api key is configured.
    pub fn endpoint(&self) -> Option<String> {
        self.api_key().map(|key| self.network.endpoint(key))
    }
}
