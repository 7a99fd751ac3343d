//! Block data as reported by the node provider.

use serde::Deserialize;
use serde::Serialize;

/// Selects which block `eth_getBlockByNumber` should return.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BlockTag {
    #[default]
    Latest,
    Finalized,
}

/// A block finalized on the chain, decoded from the provider's JSON-RPC response.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Block {
    pub number: u64,
    /// seconds since the unix epoch.
    pub timestamp: u64,
    pub miner: String,
    pub hash: String,
    pub parent_hash: String,
    pub gas_used: u64,
    pub gas_limit: u64,
    /// transaction hashes, in block order.
    pub transactions: Vec<String>,
}

impl Block {
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

/// The result of one successful fetch: the chain height together with the
/// latest block.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub block_number: u64,
    pub block: Block,
}
