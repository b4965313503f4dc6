//! 签名账户
//!
//! 从配置的私钥派生 owner 账户，持有签名钱包与对应地址。

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::error::{ChainError, Result};

/// 合约 owner 签名账户
pub struct OwnerAccount {
    wallet: EthereumWallet,
    address: Address,
}

impl OwnerAccount {
    /// 从十六进制私钥派生账户
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        let signer: PrivateKeySigner = private_key
            .trim()
            .parse()
            .map_err(|_| ChainError::Sign("get signer from key error".to_string()))?;

        let address = signer.address();
        let wallet = EthereumWallet::from(signer);

        Ok(Self { wallet, address })
    }

    pub fn wallet(&self) -> &EthereumWallet {
        &self.wallet
    }

    pub fn address(&self) -> Address {
        self.address
    }
}
