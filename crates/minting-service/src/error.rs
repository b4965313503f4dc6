//! 铸币服务专用错误类型
//!
//! 在共享库 MintError 基础上定义本服务特有的错误变体，
//! 链交互错误与数据库错误分别透传，便于调用方按来源区分。

use xp_chain::ChainError;
use xp_shared::error::MintError;

/// 铸币服务错误
#[derive(Debug, thiserror::Error)]
pub enum MintingError {
    /// 单钱包模式下目标地址在库中不存在
    #[error("钱包未找到: {address}")]
    WalletNotFound { address: String },

    /// 链交互失败（RPC、签名或等待回执出错）
    #[error("链交互失败: {0}")]
    Chain(#[from] ChainError),

    /// 数据库操作失败
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    /// 透传共享库错误，避免在每个 match 分支手动转换
    #[error(transparent)]
    Shared(#[from] MintError),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, MintingError>;
