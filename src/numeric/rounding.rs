// ============================================================================
// Rounding Policy
// How the last retained digit is collapsed when a scale is reduced
// ============================================================================

use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy applied by [`ScaledDecimal::scale_down`](super::ScaledDecimal::scale_down).
///
/// Every policy works on a provisional value that keeps exactly one digit
/// beyond the target scale, and collapses that digit with a fixed bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingPolicy {
    /// Drop the extra digit (truncate toward zero)
    #[default]
    Down,
    /// Drop the extra digit, then add one unit. Exact values are bumped too.
    Up,
    /// Bias of 5 on the extra digit
    HalfUp,
    /// Bias of 4 on the extra digit: `.5` goes down, `.6` and above go up
    HalfDown,
}

impl RoundingPolicy {
    /// All policies, in declaration order.
    pub const ALL: [RoundingPolicy; 4] = [
        RoundingPolicy::Down,
        RoundingPolicy::Up,
        RoundingPolicy::HalfUp,
        RoundingPolicy::HalfDown,
    ];

    /// Collapse the trailing digit of `provisional`.
    pub(crate) fn collapse(self, provisional: BigInt) -> BigInt {
        let ten = BigInt::from(10u8);
        match self {
            RoundingPolicy::Down => provisional / ten,
            RoundingPolicy::Up => provisional / ten + 1u8,
            RoundingPolicy::HalfUp => (provisional + 5u8) / ten,
            RoundingPolicy::HalfDown => (provisional + 4u8) / ten,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collapse(policy: RoundingPolicy, provisional: i64) -> BigInt {
        policy.collapse(BigInt::from(provisional))
    }

    #[test]
    fn test_down_truncates() {
        assert_eq!(collapse(RoundingPolicy::Down, 1239), BigInt::from(123));
        assert_eq!(collapse(RoundingPolicy::Down, -1239), BigInt::from(-123));
    }

    #[test]
    fn test_up_bumps_exact_values() {
        assert_eq!(collapse(RoundingPolicy::Up, 1231), BigInt::from(124));
        assert_eq!(collapse(RoundingPolicy::Up, 120), BigInt::from(13));
    }

    #[test]
    fn test_half_up() {
        assert_eq!(collapse(RoundingPolicy::HalfUp, 1234), BigInt::from(123));
        assert_eq!(collapse(RoundingPolicy::HalfUp, 1235), BigInt::from(124));
    }

    #[test]
    fn test_half_down_bias() {
        assert_eq!(collapse(RoundingPolicy::HalfDown, 1235), BigInt::from(123));
        assert_eq!(collapse(RoundingPolicy::HalfDown, 1236), BigInt::from(124));
    }

    #[test]
    fn test_default_is_down() {
        assert_eq!(RoundingPolicy::default(), RoundingPolicy::Down);
        assert_eq!(RoundingPolicy::ALL.len(), 4);
    }
}
