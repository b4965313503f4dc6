//! 链上铸币接口
//!
//! 服务层依赖此抽象而非具体的提交器实现，便于在测试中替换为 mock。

use async_trait::async_trait;
use xp_chain::{Address, MintSubmitter, OwnerAccount};

/// 代币铸币接口
///
/// 覆盖编排流程对链的全部依赖：起始序号查询与单笔铸币提交
#[async_trait]
pub trait TokenMinter: Send + Sync {
    /// 签名账户的起始交易序号
    async fn transaction_count(&self, address: Address) -> xp_chain::Result<u64>;

    /// 提交一笔铸币交易并等待回执
    ///
    /// 回执状态为 1 时返回交易哈希，否则返回 None；
    /// `owner` 为 None 时返回 MissingSigner 错误
    async fn mint(
        &self,
        to: &str,
        amount_xp: u64,
        nonce: u64,
        owner: Option<&OwnerAccount>,
    ) -> xp_chain::Result<Option<String>>;
}

#[async_trait]
impl TokenMinter for MintSubmitter {
    async fn transaction_count(&self, address: Address) -> xp_chain::Result<u64> {
        MintSubmitter::transaction_count(self, address).await
    }

    async fn mint(
        &self,
        to: &str,
        amount_xp: u64,
        nonce: u64,
        owner: Option<&OwnerAccount>,
    ) -> xp_chain::Result<Option<String>> {
        self.submit(to, amount_xp, nonce, owner).await
    }
}
