//! 链交互库
//!
//! 封装铸币流程所需的 EVM JSON-RPC 访问：HTTP Provider、代币合约调用、
//! 私钥签名与原始交易提交。只覆盖 `mint(address,uint256)` 一个写入口。

pub mod client;
pub mod contract;
pub mod error;
pub mod signer;
pub mod submitter;
pub mod units;

pub use alloy::primitives::Address;
pub use client::EvmClient;
pub use error::{ChainError, Result};
pub use signer::OwnerAccount;
pub use submitter::MintSubmitter;
pub use units::xp_to_base_units;
