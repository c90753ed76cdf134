// ============================================================================
// Scaled Decimal Library
// Arbitrary-precision fixed-point decimals for token balances and rates
// ============================================================================

//! # Scaled Decimal
//!
//! Fixed-point money and rate math without binary floating-point drift.
//!
//! A [`ScaledDecimal`](numeric::ScaledDecimal) is an unbounded signed integer
//! plus an explicit scale: `value / 10^scale`. Token amounts are built from
//! raw on-chain integers with a known decimal count (6, 8, 18, ...) and stay
//! exact all the way up to `2^256`.
//!
//! ## Features
//!
//! - **Bignum storage**: no wrapping at 64 or 128 bits
//! - **Per-value scale**: mixed-scale add/sub/compare align automatically
//! - **Explicit rounding**: scale reduction always names a
//!   [`RoundingPolicy`](numeric::RoundingPolicy)
//! - **Tagged raw operands**: [`RawInteger`](numeric::RawInteger) marks an
//!   integer already in the receiver's scale
//! - **Truncating parse**: [`to_fp`](numeric::to_fp) never rounds
//!
//! ## Example
//!
//! ```rust
//! use scaled_decimal::prelude::*;
//!
//! // USDC-style amounts, 6 decimals
//! let deposit = to_fp("100.5", 6).unwrap();
//! let fee = to_fp("0.333333", 6).unwrap();
//!
//! let net = deposit.sub(&fee);
//! assert_eq!(net.format(None), "100.166667");
//!
//! // 4.25% APR on the net amount, cut back to cents
//! let interest = net.percent(rust_decimal::Decimal::new(425, 2));
//! let shown = interest.scale_down(2, RoundingPolicy::HalfUp).unwrap();
//! assert_eq!(shown.format(None), "4.26");
//! ```

pub mod config;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::DecimalConfig;
    pub use crate::numeric::{
        max, max_uint256, min, minus_one, one, to_fp, zero, DecimalLiteral, NumericError,
        NumericResult, RawInteger, RoundingPolicy, ScaledDecimal,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use num_bigint::BigInt;

    #[test]
    fn test_end_to_end_add_sub() {
        let a = to_fp("100.5", 6).unwrap();
        let b = to_fp("0.333333", 6).unwrap();

        // 100_500_000 + 333_333 and 100_500_000 - 333_333
        let sum = a.add(&b);
        assert_eq!(sum.value(), &BigInt::from(100_833_333));
        assert_eq!(sum.scale(), 6);
        assert_eq!(sum.format(None), "100.833333");

        let diff = a.sub(&b);
        assert_eq!(diff.value(), &BigInt::from(100_166_667));
        assert_eq!(diff.scale(), 6);
        assert_eq!(diff.format(None), "100.166667");
    }

    #[test]
    fn test_price_times_amount_then_scale_down() {
        // 1.5 ETH (18 decimals) at 2500.25 USDC (6 decimals)
        let amount = ScaledDecimal::from_value("1500000000000000000", Some(18)).unwrap();
        let price = to_fp("2500.25", 6).unwrap();

        let notional = amount.mul(&price).unwrap();
        assert_eq!(notional.scale(), 24);

        let usdc = notional.scale_down(6, RoundingPolicy::Down).unwrap();
        assert_eq!(usdc.format(None), "3750.375000");
    }

    #[test]
    fn test_utilization_rate() {
        let borrowed = to_fp("750000", 6).unwrap();
        let supplied = to_fp("1000000", 6).unwrap();

        let config = DecimalConfig::default().with_division_guard_digits(18);
        let utilization = borrowed.div_with(&supplied, &config).unwrap();
        assert_eq!(utilization.scale(), 18);
        assert!(utilization.eq(&to_fp("0.75", 2).unwrap()));
    }

    #[test]
    fn test_amounts_near_max_uint256_do_not_wrap() {
        let cap = max_uint256();
        let bumped = cap.add(&one());
        assert_eq!(
            bumped.value(),
            &(BigInt::from(2u8).pow(256))
        );
        assert!(bumped.gt(&cap));

        let back = bumped.sub(&one());
        assert_eq!(back, cap);
    }

    #[test]
    fn test_min_max_pick_caps() {
        let wallet = to_fp("12.5", 8).unwrap();
        let cap = to_fp("10", 0).unwrap();

        let spendable = min(&wallet, &cap);
        assert_eq!(spendable.scale(), 0);
        assert_eq!(spendable.format(None), "10");
        assert_eq!(max(&wallet, &cap).scale(), 8);
    }

    #[test]
    fn test_constants_are_independent_values() {
        assert!(minus_one().add(&one()).eq(&zero()));
        assert!(zero().lt(&one()));
        assert!(minus_one().lt(&zero()));
    }
}
