//! Ethereum JSON-RPC 2.0 envelopes and the decoding of hex-encoded results.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::block::Block;
use crate::block::BlockTag;
use crate::error::ChainError;

pub const ETH_BLOCK_NUMBER: &str = "eth_blockNumber";
pub const ETH_GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";

#[derive(Serialize, Debug)]
pub struct Request<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

impl<'a> Request<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }

    pub fn block_number(id: u64) -> Self {
        Self::new(id, ETH_BLOCK_NUMBER, Value::Array(vec![]))
    }

    /// Requests the block header plus transaction hashes only.
    pub fn block_by_tag(id: u64, tag: BlockTag) -> Self {
        Self::new(
            id,
            ETH_GET_BLOCK_BY_NUMBER,
            serde_json::json!([tag.to_string(), false]),
        )
    }
}

#[derive(Deserialize, Debug)]
struct ErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize, Debug)]
struct Response<T> {
    #[serde(default = "Option::default")]
    result: Option<T>,
    #[serde(default)]
    error: Option<ErrorObject>,
}

/// Unwraps the envelope. `Ok(None)` means the node answered with a null result.
fn unwrap_result<T: DeserializeOwned>(body: Value) -> Result<Option<T>, ChainError> {
    let response: Response<T> = serde_json::from_value(body)?;
    match response.error {
        Some(e) => Err(ChainError::Rpc {
            code: e.code,
            message: e.message,
        }),
        None => Ok(response.result),
    }
}

/// Parses a `0x`-prefixed hex quantity.
pub fn parse_quantity(raw: &str) -> Result<u64, ChainError> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .ok_or_else(|| ChainError::Decode(format!("quantity `{raw}` lacks 0x prefix")))?;
    if digits.is_empty() {
        return Err(ChainError::Decode(format!("quantity `{raw}` has no digits")));
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| ChainError::Decode(format!("quantity `{raw}`: {e}")))
}

pub fn decode_block_number(body: Value) -> Result<u64, ChainError> {
    let raw: String = unwrap_result(body)?.ok_or(ChainError::MissingResult(ETH_BLOCK_NUMBER))?;
    parse_quantity(&raw)
}

pub fn decode_block(body: Value, tag: BlockTag) -> Result<Block, ChainError> {
    let raw: RpcBlock = unwrap_result(body)?.ok_or(ChainError::BlockNotFound(tag))?;
    raw.try_into()
}

/// A transaction entry is a bare hash, or a full object when the block was
/// requested with hydrated transactions.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RpcTransaction {
    Hash(String),
    Object { hash: String },
}

impl From<RpcTransaction> for String {
    fn from(tx: RpcTransaction) -> Self {
        match tx {
            RpcTransaction::Hash(hash) | RpcTransaction::Object { hash } => hash,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RpcBlock {
    number: String,
    timestamp: String,
    #[serde(default)]
    miner: String,
    hash: String,
    parent_hash: String,
    gas_used: String,
    gas_limit: String,
    #[serde(default)]
    transactions: Vec<RpcTransaction>,
}

impl TryFrom<RpcBlock> for Block {
    type Error = ChainError;

    fn try_from(raw: RpcBlock) -> Result<Self, Self::Error> {
        Ok(Block {
            number: parse_quantity(&raw.number)?,
            timestamp: parse_quantity(&raw.timestamp)?,
            miner: raw.miner,
            hash: raw.hash,
            parent_hash: raw.parent_hash,
            gas_used: parse_quantity(&raw.gas_used)?,
            gas_limit: parse_quantity(&raw.gas_limit)?,
            transactions: raw.transactions.into_iter().map(String::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block_body(transactions: Value) -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "result": {
                "number": "0x12a05f2",
                "timestamp": "0x6553f100",
                "miner": "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5",
                "hash": "0xaa",
                "parentHash": "0xbb",
                "gasUsed": "0xe4e1c0",
                "gasLimit": "0x1c9c380",
                "transactions": transactions,
            }
        })
    }

    #[test]
    fn parse_quantity_accepts_hex() {
        assert_eq!(parse_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_quantity("0x12a05f2").unwrap(), 19_531_250);
        assert_eq!(parse_quantity("0XFF").unwrap(), 255);
    }

    #[test]
    fn parse_quantity_rejects_garbage() {
        assert!(matches!(parse_quantity("123"), Err(ChainError::Decode(_))));
        assert!(matches!(parse_quantity("0x"), Err(ChainError::Decode(_))));
        assert!(matches!(parse_quantity("0xzz"), Err(ChainError::Decode(_))));
    }

    #[test]
    fn block_number_request_shape() {
        let body = serde_json::to_value(Request::block_number(7)).unwrap();
        assert_eq!(
            body,
            json!({"jsonrpc": "2.0", "id": 7, "method": "eth_blockNumber", "params": []})
        );
    }

    #[test]
    fn block_request_asks_for_hashes_only() {
        let body = serde_json::to_value(Request::block_by_tag(1, BlockTag::Latest)).unwrap();
        assert_eq!(body["method"], "eth_getBlockByNumber");
        assert_eq!(body["params"], json!(["latest", false]));
    }

    #[test]
    fn decodes_block_number() {
        let body = json!({"jsonrpc": "2.0", "id": 1, "result": "0x10"});
        assert_eq!(decode_block_number(body).unwrap(), 16);
    }

    #[test]
    fn rpc_error_object_becomes_rpc_error() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32600, "message": "invalid request"}
        });
        match decode_block_number(body) {
            Err(ChainError::Rpc { code, message }) => {
                assert_eq!(code, -32600);
                assert_eq!(message, "invalid request");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_result_is_reported() {
        let body = json!({"jsonrpc": "2.0", "id": 1});
        assert!(matches!(
            decode_block_number(body),
            Err(ChainError::MissingResult(ETH_BLOCK_NUMBER))
        ));
    }

    #[test]
    fn decodes_block_with_hash_transactions() {
        let block = decode_block(block_body(json!(["0x01", "0x02"])), BlockTag::Latest).unwrap();
        assert_eq!(block.number, 19_531_250);
        assert_eq!(block.timestamp, 1_700_000_000);
        assert_eq!(block.gas_used, 15_000_000);
        assert_eq!(block.gas_limit, 30_000_000);
        assert_eq!(block.parent_hash, "0xbb");
        assert_eq!(block.transactions, vec!["0x01", "0x02"]);
    }

    #[test]
    fn decodes_hydrated_transactions_to_hashes() {
        let txs = json!([{"hash": "0x01", "nonce": "0x0"}, {"hash": "0x02"}]);
        let block = decode_block(block_body(txs), BlockTag::Latest).unwrap();
        assert_eq!(block.transactions, vec!["0x01", "0x02"]);
    }

    #[test]
    fn null_block_is_not_found() {
        let body = json!({"jsonrpc": "2.0", "id": 1, "result": null});
        assert!(matches!(
            decode_block(body, BlockTag::Finalized),
            Err(ChainError::BlockNotFound(BlockTag::Finalized))
        ));
    }

    #[test]
    fn malformed_block_is_decode_error() {
        let body = json!({"jsonrpc": "2.0", "id": 1, "result": {"number": "0x1"}});
        assert!(matches!(
            decode_block(body, BlockTag::Latest),
            Err(ChainError::Decode(_))
        ));
    }
}
