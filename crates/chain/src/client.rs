//! EVM JSON-RPC 客户端
//!
//! 基于 alloy 的 HTTP Provider，进程内只建立一个，整个运行期复用。

use std::sync::Arc;

use alloy::network::Ethereum;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};

use crate::error::{ChainError, Result};

/// HTTP Provider 的 trait object 别名
pub type BoxedProvider = Arc<dyn Provider<Ethereum> + Send + Sync>;

/// EVM 链客户端
pub struct EvmClient {
    http: BoxedProvider,
}

impl EvmClient {
    /// 创建 HTTP 客户端
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url: reqwest::Url = rpc_url
            .parse()
            .map_err(|e| ChainError::RpcUrl(format!("{rpc_url}: {e}")))?;

        let http = ProviderBuilder::new().connect_http(url);

        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// 获取 Provider 引用
    pub fn provider(&self) -> &BoxedProvider {
        &self.http
    }

    /// 当前 gas 价格（wei）
    pub async fn gas_price(&self) -> Result<u128> {
        self.http
            .get_gas_price()
            .await
            .map_err(|e| ChainError::RpcNode(e.to_string()))
    }

    /// 账户的起始交易序号
    pub async fn transaction_count(&self, address: Address) -> Result<u64> {
        self.http
            .get_transaction_count(address)
            .await
            .map_err(|e| ChainError::RpcNode(e.to_string()))
    }
}
