//! 服务层
//!
//! 编排资格查询、已铸校验、链上铸币与流水落库的完整流程。

pub mod mint_service;

pub use mint_service::{BatchSummary, MintOutcome, MintService, MintServiceConfig, SkipReason};
