//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::{EligibleWallet, MintRecord};

/// 用户档案仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    /// 列出所有 XP 点数为正的钱包（资格查询）
    async fn list_eligible_wallets(&self) -> Result<Vec<EligibleWallet>>;

    /// 按钱包地址查找单个钱包，不做点数过滤
    async fn find_wallet_by_address(&self, address: &str) -> Result<Option<EligibleWallet>>;
}

/// 交易流水仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// 某档案在指定代币下的历史已铸总额，无记录时为 0
    async fn total_minted(&self, profile_id: i64, token: &str) -> Result<Decimal>;

    /// 追加一条铸币流水
    async fn create(&self, record: &MintRecord) -> Result<()>;
}
