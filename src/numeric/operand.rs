// ============================================================================
// Operands and Sources
// Tagged inputs that keep "same-scale raw integer" apart from "decimal literal"
// ============================================================================
//
// A bare integer handed to add/sub/mul/div/compare is NOT a real-world number:
// it is a raw digit sequence already expressed in the receiver's scale. Those
// inputs travel as `RawInteger`. Human-readable decimals that still need a
// scale applied travel as `DecimalLiteral` and only enter through `to_fp`.

use num_bigint::BigInt;
use std::fmt;

use super::ScaledDecimal;

/// Raw integer interpreted in the receiver's own scale.
///
/// `RawInteger::from(5)` added to `1.00` (scale 2) yields `1.05`, not `6.00`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawInteger(BigInt);

impl RawInteger {
    pub fn new(value: impl Into<BigInt>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> BigInt {
        self.0
    }
}

/// Right-hand side of arithmetic and comparison operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand<'a> {
    /// Another scaled decimal; scales are reconciled
    Decimal(&'a ScaledDecimal),
    /// Raw integer in the receiver's scale; no conversion
    Raw(RawInteger),
}

impl<'a> From<&'a ScaledDecimal> for Operand<'a> {
    fn from(value: &'a ScaledDecimal) -> Self {
        Operand::Decimal(value)
    }
}

impl From<RawInteger> for Operand<'_> {
    fn from(value: RawInteger) -> Self {
        Operand::Raw(value)
    }
}

/// Source accepted by [`ScaledDecimal::from_value`].
///
/// Only `Decimal` carries its own scale; the integral variants must be paired
/// with an explicit one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    Decimal(ScaledDecimal),
    Integer(BigInt),
    /// Integral digit string, optionally signed
    Digits(String),
}

impl From<ScaledDecimal> for ValueSource {
    fn from(value: ScaledDecimal) -> Self {
        ValueSource::Decimal(value)
    }
}

impl From<&ScaledDecimal> for ValueSource {
    fn from(value: &ScaledDecimal) -> Self {
        ValueSource::Decimal(value.clone())
    }
}

impl From<&str> for ValueSource {
    fn from(value: &str) -> Self {
        ValueSource::Digits(value.to_string())
    }
}

impl From<String> for ValueSource {
    fn from(value: String) -> Self {
        ValueSource::Digits(value)
    }
}

/// Plain decimal text (`-?[0-9]+(\.[0-9]+)?`) awaiting a scale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalLiteral(String);

impl DecimalLiteral {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DecimalLiteral {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DecimalLiteral {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for DecimalLiteral {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<rust_decimal::Decimal> for DecimalLiteral {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value.to_string())
    }
}

/// Display output of `f64` never uses exponent notation; NaN and infinities
/// produce text that the parser rejects.
impl From<f64> for DecimalLiteral {
    fn from(value: f64) -> Self {
        Self(value.to_string())
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawInteger {
                fn from(value: $t) -> Self {
                    Self(BigInt::from(value))
                }
            }

            impl From<$t> for ValueSource {
                fn from(value: $t) -> Self {
                    ValueSource::Integer(BigInt::from(value))
                }
            }

            impl From<$t> for DecimalLiteral {
                fn from(value: $t) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i32, u32, i64, u64, i128, u128, BigInt);
