//! Amount Scaling
//!
//! Converts human-unit amounts from the configuration (e.g. 1.5 tokens)
//! into on-chain base units (e.g. 1500000000000000000 at 18 decimals).
//! Uses rust_decimal mantissa/scale arithmetic so the conversion is exact;
//! digits beyond the token's precision are truncated toward zero.
//!
//! Author: AI-Generated
//! Created: 2026-02-03

use alloy::primitives::U256;
use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;

/// Decimals of the native asset (MON), fixed by the chain
pub const NATIVE_DECIMALS: u8 = 18;

/// 10^77 < 2^256 < 10^78 — largest power of ten U256 can hold
const MAX_POW10_EXP: u32 = 77;

/// Scale a human-unit amount to base units for a token with the given decimals.
///
/// amount = mantissa × 10^-scale, so base units = mantissa × 10^(decimals - scale).
/// When the amount carries more fractional digits than the token supports,
/// the excess is truncated toward zero.
pub fn to_base_units(amount: Decimal, decimals: u8) -> Result<U256> {
    if amount.is_sign_negative() {
        bail!("amount must not be negative, got {}", amount);
    }

    // Non-negative mantissa fits u128 (Decimal mantissa is 96 bits)
    let mantissa = U256::from(amount.mantissa() as u128);
    let scale = amount.scale();

    if u32::from(decimals) >= scale {
        let exp = u32::from(decimals) - scale;
        if exp > MAX_POW10_EXP {
            bail!("token decimals {} out of range", decimals);
        }
        mantissa
            .checked_mul(U256::from(10u64).pow(U256::from(exp)))
            .with_context(|| format!("amount {} overflows 256 bits at {} decimals", amount, decimals))
    } else {
        let exp = scale - u32::from(decimals);
        Ok(mantissa / U256::from(10u64).pow(U256::from(exp)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scales_18_decimals_exactly() {
        assert_eq!(
            to_base_units(dec!(1.5), 18).unwrap(),
            U256::from(1_500_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_whole_amount() {
        assert_eq!(
            to_base_units(dec!(2), 18).unwrap(),
            U256::from(2_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_small_fraction() {
        assert_eq!(
            to_base_units(dec!(0.1), 18).unwrap(),
            U256::from(100_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_six_decimal_token() {
        // USDC-style precision
        assert_eq!(to_base_units(dec!(12.34), 6).unwrap(), U256::from(12_340_000u64));
    }

    #[test]
    fn test_truncates_excess_precision() {
        // 1.23456789 at 6 decimals — the trailing 89 is dropped, not rounded
        assert_eq!(to_base_units(dec!(1.23456789), 6).unwrap(), U256::from(1_234_567u64));
    }

    #[test]
    fn test_zero_decimals() {
        assert_eq!(to_base_units(dec!(7.9), 0).unwrap(), U256::from(7u64));
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(to_base_units(dec!(0), 18).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_negative_rejected() {
        assert!(to_base_units(dec!(-1), 18).is_err());
    }

    #[test]
    fn test_huge_decimals_rejected() {
        assert!(to_base_units(dec!(1), 255).is_err());
    }
}
