// Core data structures shared across the swap runner.

use std::fmt;

/// Direction of a swap attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    /// Native asset (MON) in, token out
    NativeToToken,
    /// Token in, native asset (MON) out
    TokenToNative,
}

impl SwapDirection {
    /// Human-readable route label for a specific token, e.g. "MON -> 0xabc…"
    pub fn describe(&self, token: &str) -> String {
        match self {
            SwapDirection::NativeToToken => format!("MON -> {}", token),
            SwapDirection::TokenToNative => format!("{} -> MON", token),
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SwapDirection::NativeToToken => write!(f, "MON->token"),
            SwapDirection::TokenToNative => write!(f, "token->MON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_includes_token() {
        let token = "0x7ceb23fd6bc0add59e62ac25578270cff1b9f619";
        assert_eq!(
            SwapDirection::NativeToToken.describe(token),
            format!("MON -> {}", token)
        );
        assert_eq!(
            SwapDirection::TokenToNative.describe(token),
            format!("{} -> MON", token)
        );
    }
}
