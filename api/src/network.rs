//! The networks the provider can be pointed at.

use serde::Deserialize;
use serde::Serialize;

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Network {
    #[default]
    EthMainnet,
    EthSepolia,
    EthHolesky,
}

impl Network {
    /// Alchemy JSON-RPC endpoint for this network, authenticated by `api_key`.
    pub fn endpoint(&self, api_key: &str) -> String {
        format!("https://{}.g.alchemy.com/v2/{}", self, api_key)
    }
}
