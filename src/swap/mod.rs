//! Swap Module
//!
//! Transaction construction/submission and the sequential driver loop.
//!
//! Author: AI-Generated
//! Created: 2026-02-03

pub mod executor;
pub mod runner;

pub use executor::SwapExecutor;
pub use runner::{run_swap_cycle, TokenSwapper};
