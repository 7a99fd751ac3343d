//! This crate contains the chain data types and the remote chain client
//! shared by every dashboard front end.

pub mod block;
pub mod chain_client;
pub mod error;
mod json_rpc;
pub mod network;
pub mod prefs;

pub use block::Block;
pub use block::BlockTag;
pub use block::Snapshot;
pub use chain_client::alchemy::AlchemyClient;
pub use chain_client::fetch_latest;
pub use chain_client::ChainClient;
pub use error::ChainError;
pub use network::Network;
pub use prefs::provider_config::ProviderConfig;
