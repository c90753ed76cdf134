// ============================================================================
// Decimal Configuration
// Call-site defaults for division precision, rounding and display
// ============================================================================

use crate::numeric::RoundingPolicy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of extra dividend digits in decimal/decimal division
pub const DEFAULT_DIVISION_GUARD_DIGITS: u32 = 3;

/// Defaults applied by the `*_with`, `rescale` and `display` operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecimalConfig {
    /// Minimum number of fractional digits the dividend carries beyond the
    /// divisor before integer division
    pub division_guard_digits: u32,

    /// Policy used when `rescale` lowers the scale
    pub rounding: RoundingPolicy,

    /// Optional: fractional digits shown by `display`
    /// None shows the full scale
    pub display_decimals: Option<u32>,
}

impl DecimalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the division guard
    pub fn with_division_guard_digits(mut self, digits: u32) -> Self {
        self.division_guard_digits = digits;
        self
    }

    /// Set the rescale rounding policy
    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }

    /// Set the display truncation
    pub fn with_display_decimals(mut self, decimals: Option<u32>) -> Self {
        self.display_decimals = decimals;
        self
    }
}

impl Default for DecimalConfig {
    fn default() -> Self {
        Self {
            division_guard_digits: DEFAULT_DIVISION_GUARD_DIGITS,
            rounding: RoundingPolicy::Down,
            display_decimals: None,
        }
    }
}
