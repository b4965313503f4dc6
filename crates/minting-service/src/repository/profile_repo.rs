//! 用户档案仓储
//!
//! 连接 user_user / user_userprofile / user_wallet 三张表做资格查询。
//! user_wallet.user_id 引用的是档案 ID，不是用户 ID，连接条件沿用既有约定。

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::ProfileRepositoryTrait;
use crate::error::Result;
use crate::models::EligibleWallet;

/// 用户档案仓储
pub struct UserProfileRepository {
    pool: PgPool,
}

impl UserProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 列出所有 XP 点数为正的钱包
    ///
    /// 返回顺序即查询顺序，批量模式按此顺序逐个处理
    pub async fn list_eligible_wallets(&self) -> Result<Vec<EligibleWallet>> {
        let wallets = sqlx::query_as::<_, EligibleWallet>(
            r#"
            SELECT u.username, up.id AS profile_id, up.xp_points, w.wallet_address, w.id AS wallet_id
            FROM user_userprofile up
            JOIN user_user u ON up.user_id = u.id
            JOIN user_wallet w ON w.user_id = up.id
            WHERE up.xp_points > 0
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(wallets)
    }

    /// 按钱包地址查找单个钱包
    ///
    /// 单钱包模式使用，不过滤点数，余额判断交给调用方
    pub async fn find_wallet_by_address(&self, address: &str) -> Result<Option<EligibleWallet>> {
        let wallet = sqlx::query_as::<_, EligibleWallet>(
            r#"
            SELECT u.username, up.id AS profile_id, up.xp_points, w.wallet_address, w.id AS wallet_id
            FROM user_userprofile up
            JOIN user_user u ON up.user_id = u.id
            JOIN user_wallet w ON w.user_id = up.id
            WHERE w.wallet_address = $1
            "#,
        )
        .bind(address)
        .fetch_optional(&self.pool)
        .await?;

        Ok(wallet)
    }
}

#[async_trait]
impl ProfileRepositoryTrait for UserProfileRepository {
    async fn list_eligible_wallets(&self) -> Result<Vec<EligibleWallet>> {
        self.list_eligible_wallets().await
    }

    async fn find_wallet_by_address(&self, address: &str) -> Result<Option<EligibleWallet>> {
        self.find_wallet_by_address(address).await
    }
}
