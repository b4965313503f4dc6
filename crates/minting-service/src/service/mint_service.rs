//! 铸币编排服务
//!
//! 实现两条运行路径：
//! - **批量模式**: 遍历所有 XP 点数为正的钱包，逐个做已铸校验后铸币
//! - **单钱包模式**: 只处理配置的目标地址，不做已铸校验（两条路径的既有差异）
//!
//! 每个钱包的处理结果用显式的 `MintOutcome` 表达（铸成 / 跳过 / 失败），
//! 编排层据此统一分支和计数，不依赖隐式的异常控制流。
//!
//! 两处保留的历史行为需要注意：
//! - 铸造数量恒为余额减一，预留口径未见文档说明
//! - 批量模式的交易序号每轮前进一位，与该轮是否真正提交无关，
//!   跳过或失败之后本地序号可能与链上期望脱节

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{error, info};
use xp_chain::OwnerAccount;
use xp_shared::config::AppConfig;

use crate::error::Result;
use crate::minter::TokenMinter;
use crate::models::{EligibleWallet, MintRecord};
use crate::repository::{ProfileRepositoryTrait, TransactionRepositoryTrait};

/// 服务配置
///
/// 从 AppConfig 中提取编排流程所需的业务参数
#[derive(Debug, Clone)]
pub struct MintServiceConfig {
    /// 写入流水并参与已铸总额统计的代币符号
    pub token_symbol: String,
    /// 落库到流水行的链 ID
    pub chain_id: u64,
    /// 单钱包模式的目标地址
    pub target_wallet_address: String,
    /// 兼容开关：批量路径不携带签名账户
    pub legacy_unsigned_batch: bool,
}

impl MintServiceConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            token_symbol: config.minting.token_symbol.clone(),
            chain_id: config.chain.chain_id,
            target_wallet_address: config.minting.target_wallet_address.clone(),
            legacy_unsigned_batch: config.chain.legacy_unsigned_batch,
        }
    }
}

/// 跳过原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 历史已铸总额不低于当前余额
    AlreadyMinted,
    /// 余额不足一个可铸单位（余额减一后无可铸数量）
    InsufficientBalance,
    /// 目标钱包在库中不存在
    WalletNotFound,
}

/// 单个钱包的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintOutcome {
    /// 铸币成功并已落流水
    Minted { tx_hash: String, amount: u64 },
    /// 本轮无需铸币
    Skipped { reason: SkipReason },
    /// 铸币失败，未落流水
    Failed { reason: String },
}

/// 批量运行汇总
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub minted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// 铸币编排服务
///
/// 组合三个依赖完成流程：
/// - `profile_repo`: 资格查询与单钱包查找
/// - `tx_repo`: 已铸总额统计与流水落库
/// - `minter`: 链上铸币提交
///
/// 使用 trait object 而非泛型参数，避免泛型传播到整个调用链。
pub struct MintService {
    profile_repo: Arc<dyn ProfileRepositoryTrait>,
    tx_repo: Arc<dyn TransactionRepositoryTrait>,
    minter: Arc<dyn TokenMinter>,
    owner: OwnerAccount,
    config: MintServiceConfig,
}

impl MintService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepositoryTrait>,
        tx_repo: Arc<dyn TransactionRepositoryTrait>,
        minter: Arc<dyn TokenMinter>,
        owner: OwnerAccount,
        config: MintServiceConfig,
    ) -> Self {
        Self {
            profile_repo,
            tx_repo,
            minter,
            owner,
            config,
        }
    }

    /// 批量模式：遍历所有符合条件的钱包
    ///
    /// 资格查询失败直接向上传播；单个钱包的处理失败只记录日志并继续。
    pub async fn run_batch(&self) -> Result<BatchSummary> {
        info!("开始铸造 XP 代币");

        let wallets = self.profile_repo.list_eligible_wallets().await?;
        if wallets.is_empty() {
            info!("没有持有 XP 的用户");
            return Ok(BatchSummary::default());
        }

        let mut summary = BatchSummary {
            total: wallets.len(),
            ..Default::default()
        };

        let mut nonce = self.minter.transaction_count(self.owner.address()).await?;

        // 批量路径默认携带签名账户；legacy_unsigned_batch 打开时
        // 不传签名账户，逐笔提交失败，只用于与旧版部署做行为比对
        let owner = (!self.config.legacy_unsigned_batch).then_some(&self.owner);

        for wallet in &wallets {
            match self.mint_for_wallet(wallet, nonce, owner).await {
                Ok(MintOutcome::Minted { tx_hash, amount }) => {
                    info!(
                        username = %wallet.username,
                        amount,
                        tx_hash = %tx_hash,
                        "铸币成功"
                    );
                    summary.minted += 1;
                }
                Ok(MintOutcome::Skipped { .. }) => {
                    info!(username = %wallet.username, "XP 已铸满或相等，跳过");
                    summary.skipped += 1;
                }
                Ok(MintOutcome::Failed { reason }) => {
                    error!(username = %wallet.username, reason = %reason, "铸币交易失败");
                    summary.failed += 1;
                }
                Err(e) => {
                    error!(username = %wallet.username, error = %e, "铸币处理出错");
                    summary.failed += 1;
                }
            }

            // 序号每轮前进一位，与该轮结果无关；
            // 跳过或失败之后本地序号可能与链上期望脱节（已知风险，待确认后再改）
            nonce += 1;
        }

        info!(
            total = summary.total,
            minted = summary.minted,
            skipped = summary.skipped,
            failed = summary.failed,
            "批量铸币完成"
        );

        Ok(summary)
    }

    /// 单钱包模式：只处理配置的目标地址
    ///
    /// 查找失败（连接、查询出错）向上传播；铸币与落库的失败
    /// 记录日志后以 Failed 结果返回。本路径不做已铸总额校验。
    pub async fn run_single(&self) -> Result<MintOutcome> {
        let target = self.config.target_wallet_address.clone();

        let Some(wallet) = self.profile_repo.find_wallet_by_address(&target).await? else {
            error!(address = %target, "钱包未找到");
            return Ok(MintOutcome::Skipped {
                reason: SkipReason::WalletNotFound,
            });
        };

        if wallet.xp_points <= 1 {
            info!(
                username = %wallet.username,
                xp_points = wallet.xp_points,
                "没有可铸的 XP"
            );
            return Ok(MintOutcome::Skipped {
                reason: SkipReason::InsufficientBalance,
            });
        }

        let nonce = self.minter.transaction_count(self.owner.address()).await?;
        let amount = wallet.amount_to_mint();

        info!(
            username = %wallet.username,
            wallet_address = %wallet.wallet_address,
            amount,
            "铸造 XP"
        );

        match self
            .submit_and_record(&wallet, amount, nonce, Some(&self.owner))
            .await
        {
            Ok(MintOutcome::Minted { tx_hash, amount }) => {
                info!(amount, tx_hash = %tx_hash, "铸币成功");
                Ok(MintOutcome::Minted { tx_hash, amount })
            }
            Ok(outcome) => {
                error!(username = %wallet.username, "铸币交易失败");
                Ok(outcome)
            }
            Err(e) => {
                error!(username = %wallet.username, error = %e, "铸币处理出错");
                Ok(MintOutcome::Failed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// 处理批量模式中的单个钱包：已铸校验 -> 铸币 -> 落流水
    async fn mint_for_wallet(
        &self,
        wallet: &EligibleWallet,
        nonce: u64,
        owner: Option<&OwnerAccount>,
    ) -> Result<MintOutcome> {
        if self
            .already_minted(wallet.profile_id, wallet.xp_points)
            .await?
        {
            return Ok(MintOutcome::Skipped {
                reason: SkipReason::AlreadyMinted,
            });
        }

        let amount = wallet.amount_to_mint();
        info!(
            username = %wallet.username,
            wallet_address = %wallet.wallet_address,
            amount,
            "铸造 XP"
        );

        self.submit_and_record(wallet, amount, nonce, owner).await
    }

    /// 提交铸币交易，成功则写入流水
    ///
    /// 回执状态非 1 视为软失败：不落流水，返回 Failed 结果
    async fn submit_and_record(
        &self,
        wallet: &EligibleWallet,
        amount: u64,
        nonce: u64,
        owner: Option<&OwnerAccount>,
    ) -> Result<MintOutcome> {
        match self
            .minter
            .mint(&wallet.wallet_address, amount, nonce, owner)
            .await?
        {
            Some(tx_hash) => {
                let record = MintRecord::success(
                    wallet.wallet_id,
                    &tx_hash,
                    wallet.profile_id,
                    amount,
                    &self.config.token_symbol,
                    self.config.chain_id as i64,
                );
                self.tx_repo.create(&record).await?;

                Ok(MintOutcome::Minted { tx_hash, amount })
            }
            None => Ok(MintOutcome::Failed {
                reason: "交易回执状态非成功".to_string(),
            }),
        }
    }

    /// 已铸校验：历史已铸总额是否覆盖当前余额
    ///
    /// 时点快照，不加锁；并发运行可能导致重复铸币
    async fn already_minted(&self, profile_id: i64, current_xp: i32) -> Result<bool> {
        let total = self
            .tx_repo
            .total_minted(profile_id, &self.config.token_symbol)
            .await?;

        Ok(total >= Decimal::from(current_xp))
    }
}
