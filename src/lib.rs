//! MON Swap Runner Library
//!
//! Components for the automated MON⇄token swap runner: configuration,
//! router/ERC20 contract bindings, transaction submission, the sequential
//! driver, and the swap activity log.
//!
//! Author: AI-Generated
//! Created: 2026-02-03

pub mod amounts;
pub mod config;
pub mod contracts;
pub mod swap;
pub mod swap_log;
pub mod types;

// Re-export commonly used types
pub use config::SwapConfig;
pub use swap::{run_swap_cycle, SwapExecutor, TokenSwapper};
pub use swap_log::SwapLog;
pub use types::SwapDirection;
