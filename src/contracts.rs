//! Centralized Contract Definitions
//!
//! The two Solidity interfaces the swap runner talks to, defined using
//! alloy's `sol!` macro. Each interface is annotated with `#[sol(rpc)]`
//! to generate contract instance types that can make RPC calls via any
//! alloy Provider.
//!
//! The router is the minimal UniswapV2-style surface deployed on Monad
//! testnet. The native asset (MON) is represented in swap paths by the
//! zero address.
//!
//! Author: AI-Generated
//! Created: 2026-02-03

use alloy::sol;

// ── ERC20 ─────────────────────────────────────────────────────────────

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

// ── Swap router ──────────────────────────────────────────────────────

sol! {
    #[sol(rpc)]
    interface ISwapRouter {
        function swapExactETHForTokens(uint256 amountOutMin, address[] calldata path, address to, uint256 deadline) external payable returns (uint256[] memory amounts);
        function swapExactTokensForETH(uint256 amountIn, uint256 amountOutMin, address[] calldata path, address to, uint256 deadline) external returns (uint256[] memory amounts);
    }
}
