use reqwest::StatusCode;

use crate::block::BlockTag;

/// Every way a request to the node provider can fail.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("no provider api key configured")]
    MissingApiKey,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider rejected credentials (http {0})")]
    Unauthorized(StatusCode),

    #[error("provider returned http {0}")]
    Status(StatusCode),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("response to {0} carried no result")]
    MissingResult(&'static str),

    #[error("block `{0}` not found")]
    BlockNotFound(BlockTag),
}

impl From<serde_json::Error> for ChainError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
