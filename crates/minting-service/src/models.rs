//! 铸币相关实体定义
//!
//! 消费既有的用户库表结构（user_user / user_userprofile / user_wallet /
//! user_transaction），本服务不负责建表和迁移。

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 符合铸币条件的钱包
///
/// 资格查询的一行结果：用户、档案与钱包三表连接后的扁平视图
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EligibleWallet {
    /// 用户名
    pub username: String,
    /// 档案 ID（user_userprofile.id）
    pub profile_id: i64,
    /// 当前累计 XP 点数
    pub xp_points: i32,
    /// 链上钱包地址
    pub wallet_address: String,
    /// 钱包 ID（user_wallet.id）
    pub wallet_id: i64,
}

impl EligibleWallet {
    /// 本次应铸的点数：余额减一
    ///
    /// 减一的预留口径是历史约定，意图未见文档说明
    pub fn amount_to_mint(&self) -> u64 {
        (self.xp_points - 1).max(0) as u64
    }
}

/// 铸币流水记录
///
/// 追加写入 user_transaction，插入后不再更新；失败的铸币不落行。
/// 表中 user_id 列实际存放档案 ID，沿用既有 schema 的命名。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MintRecord {
    /// 钱包 ID
    pub wallet_id: i64,
    /// 链上交易哈希
    pub tx_hash: String,
    /// 档案 ID（落库到 user_id 列）
    pub profile_id: i64,
    /// 铸造数量（XP 点数口径，非最小单位）
    pub amount: Decimal,
    /// 代币符号
    pub token: String,
    /// 链 ID
    pub chain_id: i64,
    /// 状态，当前只会写入 "success"
    pub status: String,
    /// 重试次数，当前流程不做重试，恒为 0
    pub retry_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MintRecord {
    /// 创建一条成功铸币的流水记录
    pub fn success(
        wallet_id: i64,
        tx_hash: &str,
        profile_id: i64,
        amount: u64,
        token: &str,
        chain_id: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            wallet_id,
            tx_hash: tx_hash.to_string(),
            profile_id,
            amount: Decimal::from(amount),
            token: token.to_string(),
            chain_id,
            status: "success".to_string(),
            retry_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
