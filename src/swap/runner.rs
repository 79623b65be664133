//! Sequential Swap Driver
//!
//! Iterates the configured token list in order and performs one MON→token
//! swap per entry, with a fixed delay between attempts. Failures are
//! logged (console + swap log) and the loop continues — one bad token
//! never halts the run.
//!
//! Generic over the `TokenSwapper` seam so the loop is testable without a
//! network.
//!
//! Author: AI-Generated
//! Created: 2026-02-03

use crate::swap_log::SwapLog;
use crate::types::SwapDirection;
use alloy::primitives::{Address, TxHash, U256};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{error, info};

/// Submits a single MON→token swap. Implemented by `SwapExecutor`.
#[async_trait]
pub trait TokenSwapper: Send + Sync {
    async fn swap_native_to_token(&self, token: Address, amount_in_wei: U256) -> Result<TxHash>;
}

/// Run one swap cycle over the configured token list.
///
/// Attempts exactly one swap per entry, in list order, sleeping `delay`
/// after each attempt. Returns the number of attempts made.
pub async fn run_swap_cycle<S: TokenSwapper>(
    swapper: &S,
    swap_log: &mut SwapLog,
    tokens: &[String],
    amount_in_wei: U256,
    delay: Duration,
) -> usize {
    info!("Starting swap cycle for {} tokens...", tokens.len());

    let mut attempts = 0;
    for raw_token in tokens {
        attempts += 1;

        match swap_one(swapper, raw_token, amount_in_wei).await {
            Ok(tx_hash) => {
                info!("Swap MON -> {} | TX: {}", raw_token, tx_hash);
                swap_log.success(SwapDirection::NativeToToken, raw_token, tx_hash);
            }
            Err(e) => {
                error!("Error swap to {}: {:#}", raw_token, e);
                swap_log.failure(SwapDirection::NativeToToken, raw_token, &e);
            }
        }

        tokio::time::sleep(delay).await;
    }

    info!("Swap cycle complete: {} attempts", attempts);
    attempts
}

async fn swap_one<S: TokenSwapper>(swapper: &S, raw_token: &str, amount_in_wei: U256) -> Result<TxHash> {
    let token: Address = raw_token
        .parse()
        .with_context(|| format!("Invalid token address '{}'", raw_token))?;
    swapper.swap_native_to_token(token, amount_in_wei).await
}
