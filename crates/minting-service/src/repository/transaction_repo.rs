//! 交易流水仓储
//!
//! 提供铸币流水的追加写入与历史已铸总额统计。
//! user_transaction.user_id 列存放的是档案 ID，沿用既有 schema。

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::traits::TransactionRepositoryTrait;
use crate::error::Result;
use crate::models::MintRecord;

/// 交易流水仓储
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 某档案在指定代币下的历史已铸总额
    ///
    /// 无记录时返回 0；不加锁，是时点快照而非对账
    pub async fn total_minted(&self, profile_id: i64, token: &str) -> Result<Decimal> {
        let total: Decimal = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM user_transaction
            WHERE user_id = $1 AND token = $2
            "#,
        )
        .bind(profile_id)
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// 追加一条铸币流水
    ///
    /// 不设幂等键，同一交易哈希重复插入不会被拦截
    pub async fn create(&self, record: &MintRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_transaction
                (wallet_id, tx_hash, user_id, amount, token, chain_id, status, retry_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(record.wallet_id)
        .bind(&record.tx_hash)
        .bind(record.profile_id)
        .bind(record.amount)
        .bind(&record.token)
        .bind(record.chain_id)
        .bind(&record.status)
        .bind(record.retry_count)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn total_minted(&self, profile_id: i64, token: &str) -> Result<Decimal> {
        self.total_minted(profile_id, token).await
    }

    async fn create(&self, record: &MintRecord) -> Result<()> {
        self.create(record).await
    }
}
