//! 统一错误处理模块
//!
//! 定义铸币服务共享的错误类型，使用 thiserror 提供良好的错误信息。

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum MintError {
    // ==================== 数据库错误 ====================
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("记录未找到: {entity} id={id}")]
    NotFound { entity: String, id: String },

    // ==================== 链交互错误 ====================
    #[error("外部服务错误: {service} - {message}")]
    ExternalService { service: String, message: String },

    #[error("外部服务超时: {service}")]
    ExternalServiceTimeout { service: String },

    // ==================== 配置错误 ====================
    #[error("配置错误: {0}")]
    Config(String),

    // ==================== 验证错误 ====================
    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },

    // ==================== 通用错误 ====================
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, MintError>;

impl MintError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            Self::ExternalServiceTimeout { .. } => "EXTERNAL_SERVICE_TIMEOUT",
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 是否为可重试错误
    ///
    /// 当前流程不做自动重试，分类保留给调用方做统一判断
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::ExternalService { .. } | Self::ExternalServiceTimeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = MintError::NotFound {
            entity: "Wallet".to_string(),
            id: "0xabc".to_string(),
        };
        assert_eq!(err.code(), "NOT_FOUND");

        let err = MintError::Config("缺少私钥".to_string());
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_error_display() {
        let err = MintError::ExternalService {
            service: "chain-rpc".to_string(),
            message: "连接被拒绝".to_string(),
        };
        assert_eq!(err.to_string(), "外部服务错误: chain-rpc - 连接被拒绝");

        let err = MintError::ExternalServiceTimeout {
            service: "chain-rpc".to_string(),
        };
        assert_eq!(err.to_string(), "外部服务超时: chain-rpc");
    }

    #[test]
    fn test_is_retryable() {
        let db_err = MintError::Database(sqlx::Error::PoolTimedOut);
        assert!(db_err.is_retryable());

        let not_found = MintError::NotFound {
            entity: "Wallet".to_string(),
            id: "1".to_string(),
        };
        assert!(!not_found.is_retryable());

        let config = MintError::Config("bad".to_string());
        assert!(!config.is_retryable());
    }
}
