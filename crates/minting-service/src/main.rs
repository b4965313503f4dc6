//! 铸币服务入口
//!
//! 默认执行单钱包模式（与旧部署的接线一致），批量模式通过子命令触发。

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

use xp_chain::{EvmClient, MintSubmitter, OwnerAccount};
use xp_minting::repository::{TransactionRepository, UserProfileRepository};
use xp_minting::service::{MintService, MintServiceConfig};
use xp_shared::{config::AppConfig, database::Database, observability};

/// XP 代币铸币工具
#[derive(Parser, Debug)]
#[command(name = "xp-minting")]
#[command(version, about = "按 XP 点数余额在链上铸造代币")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// 运行模式
#[derive(Subcommand, Debug)]
enum Commands {
    /// 单钱包模式：只处理配置的目标地址（默认）
    Single,
    /// 批量模式：遍历所有 XP 点数为正的钱包
    Batch,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 文件（不存在则忽略）
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 1. 统一加载配置：分层配置文件 + 环境变量覆盖
    let config = AppConfig::load("xp-minting-service").unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    // 2. 初始化日志
    observability::init(&config.observability)?;

    info!("Starting xp-minting-service...");
    info!(
        environment = %config.environment,
        chain_id = config.chain.chain_id,
        "Configuration loaded"
    );

    // 3. 初始化数据库连接
    let db = Database::connect(&config.database).await?;
    let pool = db.pool().clone();
    info!("Database connection established");

    // 4. 创建仓储
    let profile_repo = Arc::new(UserProfileRepository::new(pool.clone()));
    let tx_repo = Arc::new(TransactionRepository::new(pool));
    info!("Repositories initialized");

    // 5. 创建链客户端、提交器与签名账户
    let client = EvmClient::new(&config.chain.rpc_url)?;
    let submitter = Arc::new(MintSubmitter::new(
        client,
        &config.chain.token_contract_address,
        config.chain.chain_id,
        config.chain.gas_limit,
        config.chain.receipt_timeout_seconds,
    )?);
    let owner = OwnerAccount::from_private_key(&config.chain.owner_private_key)?;
    info!(owner = %owner.address(), "Chain client initialized");

    // 6. 创建服务并按模式运行
    let service = MintService::new(
        profile_repo,
        tx_repo,
        submitter,
        owner,
        MintServiceConfig::from_app_config(&config),
    );

    match cli.command.unwrap_or(Commands::Single) {
        Commands::Single => {
            let outcome = service.run_single().await?;
            info!(?outcome, "Single-wallet run complete");
        }
        Commands::Batch => {
            let summary = service.run_batch().await?;
            info!(?summary, "Batch run complete");
        }
    }

    db.close().await;
    Ok(())
}
