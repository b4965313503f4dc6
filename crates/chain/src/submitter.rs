//! 铸币交易提交器
//!
//! 构造 `mint(to, amount)` 调用，固定 gas 上限，按当前 gas 价格以
//! legacy 交易签名提交，并同步等待回执。回执状态非 1 视为软失败，
//! 返回空结果而非错误。

use std::time::Duration;

use alloy::network::{eip2718::Encodable2718, TransactionBuilder};
use alloy::primitives::{Address, Bytes};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use tracing::debug;

use crate::client::EvmClient;
use crate::contract::mintCall;
use crate::error::{ChainError, Result};
use crate::signer::OwnerAccount;
use crate::units::xp_to_base_units;

/// 铸币提交器
///
/// 持有链客户端与合约地址，交易参数（gas 上限、回执超时、chain id）
/// 来自配置，运行期不变。
pub struct MintSubmitter {
    client: EvmClient,
    contract: Address,
    chain_id: u64,
    gas_limit: u64,
    receipt_timeout: Duration,
}

impl MintSubmitter {
    pub fn new(
        client: EvmClient,
        contract_address: &str,
        chain_id: u64,
        gas_limit: u64,
        receipt_timeout_seconds: u64,
    ) -> Result<Self> {
        let contract: Address = contract_address
            .parse()
            .map_err(|_| ChainError::AddressParse(contract_address.to_string()))?;

        Ok(Self {
            client,
            contract,
            chain_id,
            gas_limit,
            receipt_timeout: Duration::from_secs(receipt_timeout_seconds),
        })
    }

    /// 账户的起始交易序号
    pub async fn transaction_count(&self, address: Address) -> Result<u64> {
        self.client.transaction_count(address).await
    }

    /// 提交一笔铸币交易并等待回执
    ///
    /// - `to`: 接收地址（十六进制字符串）
    /// - `amount_xp`: 铸币点数，内部按 18 位精度换算为最小单位
    /// - `nonce`: 调用方维护的交易序号
    /// - `owner`: 签名账户；为 None 时直接返回 MissingSigner
    ///
    /// 回执状态为 1 时返回交易哈希，否则返回 None。
    /// 传输、签名、等待回执的失败以错误形式向上传播。
    pub async fn submit(
        &self,
        to: &str,
        amount_xp: u64,
        nonce: u64,
        owner: Option<&OwnerAccount>,
    ) -> Result<Option<String>> {
        let owner = owner.ok_or(ChainError::MissingSigner)?;

        let to_address: Address = to
            .parse()
            .map_err(|_| ChainError::AddressParse(to.to_string()))?;

        let call = mintCall {
            to: to_address,
            amount: xp_to_base_units(amount_xp),
        };

        let gas_price = self.client.gas_price().await?;

        let tx = TransactionRequest::default()
            .with_from(owner.address())
            .with_to(self.contract)
            .with_input(Bytes::from(call.abi_encode()))
            .with_gas_limit(self.gas_limit)
            .with_gas_price(gas_price)
            .with_nonce(nonce)
            .with_chain_id(self.chain_id);

        // 签名交易
        let tx_envelope = tx
            .build(owner.wallet())
            .await
            .map_err(|e| ChainError::Sign(e.to_string()))?;
        let tx_encoded = tx_envelope.encoded_2718();

        let pending = self
            .client
            .provider()
            .send_raw_transaction(&tx_encoded)
            .await
            .map_err(|e| ChainError::RpcNode(e.to_string()))?;

        debug!(
            tx_hash = %pending.tx_hash(),
            nonce,
            gas_price,
            "transaction submitted, waiting for receipt"
        );

        let receipt = pending
            .with_timeout(Some(self.receipt_timeout))
            .get_receipt()
            .await
            .map_err(|e| ChainError::Receipt(e.to_string()))?;

        if receipt.status() {
            Ok(Some(receipt.transaction_hash.to_string()))
        } else {
            Ok(None)
        }
    }
}
