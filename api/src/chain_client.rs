//! Defines the chain client trait and its provider implementations.

use crate::block::Block;
use crate::block::BlockTag;
use crate::block::Snapshot;
use crate::error::ChainError;

/// Read access to chain data. Every failure (network, credentials, decoding)
/// surfaces as a [ChainError]; nothing panics.
#[allow(async_fn_in_trait)]
pub trait ChainClient: Clone {
    /// Returns the current block height.
    async fn block_number(&self) -> Result<u64, ChainError>;

    /// Returns the block identified by `tag`.
    async fn block_by_tag(&self, tag: BlockTag) -> Result<Block, ChainError>;
}

/// One fetch cycle's worth of remote work: the height and the latest block,
/// requested concurrently. Either failure fails the pair.
pub async fn fetch_latest<C: ChainClient>(client: &C) -> Result<Snapshot, ChainError> {
    let (block_number, block) =
        futures::try_join!(client.block_number(), client.block_by_tag(BlockTag::Latest))?;
    Ok(Snapshot {
        block_number,
        block,
    })
}

/// Talks Ethereum JSON-RPC to the Alchemy node provider.
pub mod alchemy {
    use super::*;
    use crate::json_rpc;
    use crate::json_rpc::Request;
    use crate::prefs::provider_config::ProviderConfig;
    use reqwest::StatusCode;
    use serde_json::Value;
    use std::sync::atomic::AtomicU64;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    #[derive(Clone, Debug)]
    pub struct AlchemyClient {
        http: reqwest::Client,
        config: ProviderConfig,
        next_id: Arc<AtomicU64>,
    }

    impl AlchemyClient {
        pub fn new(config: ProviderConfig) -> Self {
            Self {
                http: reqwest::Client::new(),
                config,
                next_id: Arc::new(AtomicU64::new(1)),
            }
        }

        async fn call(
            &self,
            build: impl FnOnce(u64) -> Request<'static>,
        ) -> Result<Value, ChainError> {
            let url = self.config.endpoint().ok_or(ChainError::MissingApiKey)?;
            let request = build(self.next_id.fetch_add(1, Ordering::Relaxed));

            let resp = self.http.post(url).json(&request).send().await?;

            match resp.status() {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    return Err(ChainError::Unauthorized(resp.status()))
                }
                status if !status.is_success() => return Err(ChainError::Status(status)),
                _ => {}
            }

            Ok(resp.json::<Value>().await?)
        }
    }

    impl ChainClient for AlchemyClient {
        async fn block_number(&self) -> Result<u64, ChainError> {
            let body = self.call(Request::block_number).await?;
            json_rpc::decode_block_number(body)
        }

        async fn block_by_tag(&self, tag: BlockTag) -> Result<Block, ChainError> {
            let body = self.call(|id| Request::block_by_tag(id, tag)).await?;
            json_rpc::decode_block(body, tag)
        }
    }

}
