//! XP 代币铸币服务
//!
//! 从既有的用户库读取 XP 点数余额，为每个符合条件的钱包在链上铸造
//! 对应数量的代币，并把结果写回交易流水表。支持两种运行模式：
//! 批量模式遍历全部符合条件的用户；单钱包模式只处理配置的目标地址。

pub mod error;
pub mod minter;
pub mod models;
pub mod repository;
pub mod service;
