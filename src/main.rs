//! MON Swap Runner
//!
//! Main entry point. Loads the TOML configuration, connects to the chain
//! over JSON-RPC, derives the sender account from the configured key, then
//! runs one sequential swap cycle: one MON→token swap per configured token
//! with a fixed delay between attempts. Per-swap failures are logged and
//! skipped; the process exits 0 once the list is exhausted.
//!
//! The token→MON path (approve + swap back) lives in the library and is
//! not wired into this cycle.
//!
//! Author: AI-Generated
//! Created: 2026-02-03

use anyhow::{Context, Result};
use clap::Parser;
use alloy::network::EthereumWallet;
use alloy::primitives::utils::format_ether;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use monswap_bot::amounts::{to_base_units, NATIVE_DECIMALS};
use monswap_bot::{run_swap_cycle, SwapConfig, SwapExecutor, SwapLog};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// MON Swap Runner — Monad testnet
#[derive(Parser)]
#[command(name = "monswap-bot")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, env = "SWAP_CONFIG", default_value = "config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG overrides, INFO default)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = SwapConfig::load(&args.config)?;
    info!("Configuration loaded from {} (chain_id: {})", args.config, config.chain_id);
    info!("Router: {:?}", config.router_address);
    info!("Tokens configured: {}", config.token_contracts.len());

    // Derive the sender account from the configured key
    let key = config.private_key();
    let signer: PrivateKeySigner = key
        .strip_prefix("0x")
        .unwrap_or(key)
        .parse()
        .context("Invalid private key")?;
    let sender = signer.address();
    let wallet = EthereumWallet::from(signer);

    info!("Connecting to {}...", config.rpc_url);
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect(&config.rpc_url)
        .await
        .context("Failed to connect to RPC endpoint")?;
    let provider = Arc::new(provider);

    // Verify connection
    let block = provider.get_block_number().await?;
    let balance = provider.get_balance(sender).await?;
    info!("Connected! Current block: {}", block);
    info!("Wallet loaded: {:?} | balance: {} MON", sender, format_ether(balance));

    // Convert the configured native amount to wei once
    let amount_in_wei = to_base_units(config.amount_native_to_swap, NATIVE_DECIMALS)?;
    info!("Swapping {} MON per token ({} wei)", config.amount_native_to_swap, amount_in_wei);

    let executor = SwapExecutor::new(Arc::clone(&provider), sender, &config);
    let mut swap_log = SwapLog::new(&config.swap_log_file)?;

    let attempts = run_swap_cycle(
        &executor,
        &mut swap_log,
        &config.token_contracts,
        amount_in_wei,
        Duration::from_secs(config.delay_between_swaps_secs),
    )
    .await;

    info!("Swap completed: {} tokens attempted", attempts);
    Ok(())
}
