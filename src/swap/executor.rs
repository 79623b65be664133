//! Swap Executor
//!
//! Builds, signs, and submits swap transactions against the configured
//! UniswapV2-style router:
//! - MON → token: swapExactETHForTokens, value-carried native asset
//! - token → MON: approve + swapExactTokensForETH (approval confirmed first)
//!
//! Both paths submit with zero minimum output and a short on-chain
//! deadline, matching the router's fixed interface. Nonce and gas price
//! are fetched fresh per transaction; signing happens in the provider's
//! wallet layer and the transaction goes out raw.
//!
//! Author: AI-Generated
//! Created: 2026-02-03

use crate::amounts::to_base_units;
use crate::config::SwapConfig;
use crate::contracts::{IERC20, ISwapRouter};
use crate::swap::TokenSwapper;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::Provider;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Builds and submits router swaps for a single sender account
pub struct SwapExecutor<P> {
    provider: Arc<P>,
    sender: Address,
    router: Address,
    gas_limit_swap: u64,
    gas_limit_approve: u64,
    deadline_secs: u64,
}

impl<P: Provider + 'static> SwapExecutor<P> {
    /// Create a new SwapExecutor for the given sender address.
    pub fn new(provider: Arc<P>, sender: Address, config: &SwapConfig) -> Self {
        Self {
            provider,
            sender,
            router: config.router_address,
            gas_limit_swap: config.gas_limit_swap,
            gas_limit_approve: config.gas_limit_approve,
            deadline_secs: config.deadline_secs,
        }
    }

    /// Swap `amount_in_wei` of MON for `token`.
    ///
    /// Returns the transaction hash once the raw transaction is accepted by
    /// the node; it does not wait for inclusion.
    pub async fn swap_native_to_token(&self, token: Address, amount_in_wei: U256) -> Result<TxHash> {
        if amount_in_wei.is_zero() {
            bail!("swap amount must be positive");
        }

        let router = ISwapRouter::new(self.router, self.provider.clone());
        // Zero address = native-asset placeholder in the router's path encoding
        let path = vec![Address::ZERO, token];
        let deadline = self.deadline()?;

        let nonce = self
            .provider
            .get_transaction_count(self.sender)
            .await
            .context("Failed to fetch account nonce")?;
        let gas_price = self
            .provider
            .get_gas_price()
            .await
            .context("Failed to fetch gas price")?;

        let pending = router
            .swapExactETHForTokens(U256::ZERO, path, self.sender, deadline)
            .from(self.sender)
            .value(amount_in_wei)
            .nonce(nonce)
            .gas(self.gas_limit_swap)
            .gas_price(gas_price)
            .send()
            .await
            .context("Failed to broadcast swap transaction")?;

        Ok(*pending.tx_hash())
    }

    /// Swap `amount_tokens` (human units) of `token` back to MON.
    ///
    /// Reads the token's decimals from the chain, approves the router for
    /// the scaled amount, waits until the approval is confirmed, then
    /// submits the swap back. Not wired into the swap cycle — callable on
    /// its own.
    pub async fn swap_token_to_native(&self, token: Address, amount_tokens: Decimal) -> Result<TxHash> {
        if amount_tokens <= Decimal::ZERO {
            bail!("swap amount must be positive");
        }

        let erc20 = IERC20::new(token, self.provider.clone());
        let decimals = erc20
            .decimals()
            .call()
            .await
            .context("Failed to read token decimals")?;
        let amount_in = to_base_units(amount_tokens, decimals)?;

        let nonce = self
            .provider
            .get_transaction_count(self.sender)
            .await
            .context("Failed to fetch account nonce")?;
        let gas_price = self
            .provider
            .get_gas_price()
            .await
            .context("Failed to fetch gas price")?;

        let pending = erc20
            .approve(self.router, amount_in)
            .from(self.sender)
            .nonce(nonce)
            .gas(self.gas_limit_approve)
            .gas_price(gas_price)
            .send()
            .await
            .context("Failed to broadcast approval transaction")?;

        let approve_hash = *pending.tx_hash();
        info!("Approve {:?} | TX: {}", token, approve_hash);

        // The router must see the allowance before the swap lands
        let receipt = pending
            .get_receipt()
            .await
            .context("Approval transaction not confirmed")?;
        if !receipt.status() {
            bail!("approval transaction {} reverted", approve_hash);
        }

        let router = ISwapRouter::new(self.router, self.provider.clone());
        let path = vec![token, Address::ZERO];
        let deadline = self.deadline()?;

        let nonce = self
            .provider
            .get_transaction_count(self.sender)
            .await
            .context("Failed to fetch account nonce")?;
        let gas_price = self
            .provider
            .get_gas_price()
            .await
            .context("Failed to fetch gas price")?;

        let pending = router
            .swapExactTokensForETH(amount_in, U256::ZERO, path, self.sender, deadline)
            .from(self.sender)
            .nonce(nonce)
            .gas(self.gas_limit_swap)
            .gas_price(gas_price)
            .send()
            .await
            .context("Failed to broadcast swap transaction")?;

        Ok(*pending.tx_hash())
    }

    /// Unix timestamp `deadline_secs` from now, for the router's expiry check
    fn deadline(&self) -> Result<U256> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("System clock before Unix epoch")?
            .as_secs();
        Ok(U256::from(now + self.deadline_secs))
    }
}

#[async_trait]
impl<P: Provider + 'static> TokenSwapper for SwapExecutor<P> {
    async fn swap_native_to_token(&self, token: Address, amount_in_wei: U256) -> Result<TxHash> {
        SwapExecutor::swap_native_to_token(self, token, amount_in_wei).await
    }
}
