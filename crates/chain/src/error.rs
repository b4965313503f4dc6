//! 链交互错误类型

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChainError>;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("rpc url error {0}")]
    RpcUrl(String),

    #[error("address parse error {0}")]
    AddressParse(String),

    #[error("rpc node return error: {0}")]
    RpcNode(String),

    #[error("sign error {0}")]
    Sign(String),

    /// 调用方未提供签名账户（legacy_unsigned_batch 兼容路径会触发）
    #[error("signing account not provided")]
    MissingSigner,

    #[error("receipt error {0}")]
    Receipt(String),
}
