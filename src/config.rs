//! Configuration management
//!
//! Reads the swap runner configuration from a TOML file. The private key
//! may come from the config file or, preferably, from a `PRIVATE_KEY`
//! environment variable (a `.env` file is honored via dotenv).
//!
//! All required keys are validated at load time; a missing or malformed
//! key fails the whole process at startup.
//!
//! Author: AI-Generated
//! Created: 2026-02-03

use alloy::primitives::Address;
use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Top-level swap runner configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SwapConfig {
    /// JSON-RPC endpoint of the chain node
    pub rpc_url: String,
    pub chain_id: u64,
    /// Hex-encoded signing key; overridden by the PRIVATE_KEY env var
    #[serde(default)]
    pub private_key: Option<String>,
    /// UniswapV2-style router handling the swaps
    pub router_address: Address,
    /// Token contract addresses to buy, as strings — parsed per attempt so
    /// one malformed entry cannot halt the run
    pub token_contracts: Vec<String>,
    /// Amount of MON spent per token, in whole MON
    pub amount_native_to_swap: Decimal,
    /// Amount used by the token→MON path, in human token units
    pub amount_token_to_swap: Decimal,
    #[serde(default = "default_delay_secs")]
    pub delay_between_swaps_secs: u64,
    #[serde(default = "default_swap_log_file")]
    pub swap_log_file: String,
    #[serde(default = "default_gas_limit_swap")]
    pub gas_limit_swap: u64,
    #[serde(default = "default_gas_limit_approve")]
    pub gas_limit_approve: u64,
    /// Seconds until the router rejects the swap on-chain
    #[serde(default = "default_deadline_secs")]
    pub deadline_secs: u64,
}

fn default_delay_secs() -> u64 { 5 }
fn default_swap_log_file() -> String { "logs/swap_log.txt".to_string() }
fn default_gas_limit_swap() -> u64 { 300_000 }
fn default_gas_limit_approve() -> u64 { 100_000 }
fn default_deadline_secs() -> u64 { 600 }

impl SwapConfig {
    /// Load configuration from a TOML file, apply the .env overlay, validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        dotenv::dotenv().ok();

        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let mut config: Self = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;

        if let Ok(key) = std::env::var("PRIVATE_KEY") {
            if !key.trim().is_empty() {
                config.private_key = Some(key);
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.private_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            bail!("private_key not set (config file or PRIVATE_KEY env var)");
        }
        if self.amount_native_to_swap <= Decimal::ZERO {
            bail!("amount_native_to_swap must be positive, got {}", self.amount_native_to_swap);
        }
        if self.amount_token_to_swap <= Decimal::ZERO {
            bail!("amount_token_to_swap must be positive, got {}", self.amount_token_to_swap);
        }
        Ok(())
    }

    /// The validated signing key (validate() guarantees presence)
    pub fn private_key(&self) -> &str {
        self.private_key.as_deref().unwrap_or_default()
    }
}
