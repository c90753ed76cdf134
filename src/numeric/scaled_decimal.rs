// ============================================================================
// Scaled Decimal
// Arbitrary-precision fixed-point value with an explicit, per-value scale
// ============================================================================

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use super::errors::{NumericError, NumericResult};
use super::math;
use super::operand::{Operand, ValueSource};
use super::rounding::RoundingPolicy;
use crate::config::DecimalConfig;

/// Real number stored as `value / 10^scale`.
///
/// `value` is an unbounded signed integer, so on-chain amounts up to and past
/// `2^256` are exact. Instances are immutable: every operation returns a new
/// value.
///
/// # Example
/// ```ignore
/// use scaled_decimal::numeric::{to_fp, ScaledDecimal};
///
/// let balance = to_fp("100.5", 6)?;           // 100500000 @ 6
/// let fee = to_fp("0.333333", 6)?;            // 333333 @ 6
/// let net = balance.sub(&fee);                // 100.166667
/// ```
#[derive(Clone)]
pub struct ScaledDecimal {
    value: BigInt,
    scale: u32,
}

/// Compute 10^exp as a bignum
#[inline]
pub(crate) fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

impl ScaledDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw digits already expressed at `scale`.
    #[inline]
    pub fn new(value: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            value: value.into(),
            scale,
        }
    }

    /// Create from another decimal, an integer, or an integral digit string.
    ///
    /// A `ScaledDecimal` source is copied with its own scale and `scale` is
    /// ignored. Every other source requires `scale`.
    ///
    /// # Errors
    /// - `MissingScale` if a raw source comes without a scale
    /// - `ParseError` if a digit string is not an optionally signed integer
    pub fn from_value(source: impl Into<ValueSource>, scale: Option<u32>) -> NumericResult<Self> {
        match source.into() {
            ValueSource::Decimal(decimal) => Ok(decimal),
            ValueSource::Integer(value) => {
                let scale = scale.ok_or(NumericError::MissingScale)?;
                Ok(Self { value, scale })
            },
            ValueSource::Digits(digits) => {
                let scale = scale.ok_or(NumericError::MissingScale)?;
                let (negative, int_digits, frac_digits) = math::split_literal(&digits)?;
                if frac_digits.is_some() {
                    return Err(NumericError::ParseError { input: digits });
                }
                let value = math::digits_to_bigint(negative, int_digits, "");
                Ok(Self { value, scale })
            },
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unscaled digit sequence.
    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Number of implied fractional digits.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn into_parts(self) -> (BigInt, u32) {
        (self.value, self.scale)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.value.is_positive()
    }

    pub fn abs(&self) -> Self {
        Self {
            value: self.value.abs(),
            scale: self.scale,
        }
    }

    /// Numerically equal value with trailing fractional zeros removed.
    pub fn trim(&self) -> Self {
        let ten = BigInt::from(10u8);
        let mut value = self.value.clone();
        let mut scale = self.scale;
        while scale > 0 {
            let (quotient, remainder) = value.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            value = quotient;
            scale -= 1;
        }
        Self { value, scale }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Both values raised to the larger of the two scales.
    fn aligned(&self, other: &Self) -> (BigInt, BigInt, u32) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.value.clone(), other.value.clone(), self.scale),
            Ordering::Less => (
                &self.value * pow10(other.scale - self.scale),
                other.value.clone(),
                other.scale,
            ),
            Ordering::Greater => (
                self.value.clone(),
                &other.value * pow10(self.scale - other.scale),
                self.scale,
            ),
        }
    }

    /// Addition.
    ///
    /// A decimal operand is aligned to the larger scale first. A raw operand
    /// is added to `value` as-is, in this value's scale.
    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Self {
        match rhs.into() {
            Operand::Decimal(other) => {
                let (lhs, rhs, scale) = self.aligned(other);
                Self {
                    value: lhs + rhs,
                    scale,
                }
            },
            Operand::Raw(raw) => Self {
                value: &self.value + raw.value(),
                scale: self.scale,
            },
        }
    }

    /// Subtraction, with the same operand rules as [`add`](Self::add).
    pub fn sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Self {
        match rhs.into() {
            Operand::Decimal(other) => {
                let (lhs, rhs, scale) = self.aligned(other);
                Self {
                    value: lhs - rhs,
                    scale,
                }
            },
            Operand::Raw(raw) => Self {
                value: &self.value - raw.value(),
                scale: self.scale,
            },
        }
    }

    /// Fixed-point multiplication. Scales compose: the result carries
    /// `scale_a + scale_b`, and callers usually `scale_down` afterwards.
    ///
    /// A raw operand shares this value's scale, so the result scale is
    /// `scale * 2`.
    ///
    /// # Errors
    /// Returns `InvalidScale` if the composed scale overflows `u32`.
    pub fn mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        let (value, scale) = match rhs.into() {
            Operand::Decimal(other) => (
                &self.value * &other.value,
                self.scale.checked_add(other.scale),
            ),
            Operand::Raw(raw) => (&self.value * raw.value(), self.scale.checked_mul(2)),
        };
        let scale = scale.ok_or(NumericError::InvalidScale {
            current: self.scale,
            target: u32::MAX,
        })?;
        Ok(Self { value, scale })
    }

    /// Multiply by a dimensionless count; scale unchanged.
    pub fn scale_mul(&self, factor: impl Into<BigInt>) -> Self {
        Self {
            value: &self.value * factor.into(),
            scale: self.scale,
        }
    }

    /// Division under the default [`DecimalConfig`].
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor.
    pub fn div<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.div_with(rhs, &DecimalConfig::default())
    }

    /// Division.
    ///
    /// - Raw divisor: plain integer division of `value`; the result scale is
    ///   forced to 0 whatever this value's scale was.
    /// - Decimal divisor: the dividend is first raised so its scale exceeds
    ///   the divisor's by at least `config.division_guard_digits`. The result
    ///   scale is the raised dividend scale minus the divisor scale.
    ///
    /// The quotient truncates toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero divisor
    /// - `InvalidScale` if the guarded scale overflows `u32`
    pub fn div_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        config: &DecimalConfig,
    ) -> NumericResult<Self> {
        match rhs.into() {
            Operand::Raw(raw) => {
                if raw.value().is_zero() {
                    return Err(NumericError::DivisionByZero);
                }
                Ok(Self {
                    value: &self.value / raw.value(),
                    scale: 0,
                })
            },
            Operand::Decimal(divisor) => {
                if divisor.value.is_zero() {
                    return Err(NumericError::DivisionByZero);
                }
                let min_scale = divisor
                    .scale
                    .checked_add(config.division_guard_digits)
                    .ok_or(NumericError::InvalidScale {
                        current: divisor.scale,
                        target: u32::MAX,
                    })?;
                let (dividend, dividend_scale) = if self.scale < min_scale {
                    (&self.value * pow10(min_scale - self.scale), min_scale)
                } else {
                    (self.value.clone(), self.scale)
                };
                tracing::trace!(
                    dividend_scale,
                    divisor_scale = divisor.scale,
                    "dividing scaled decimals"
                );
                Ok(Self {
                    value: dividend / &divisor.value,
                    scale: dividend_scale - divisor.scale,
                })
            },
        }
    }

    /// Integer division of `value` by a dimensionless count; scale unchanged.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor.
    pub fn scale_div(&self, divisor: impl Into<BigInt>) -> NumericResult<Self> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self {
            value: &self.value / divisor,
            scale: self.scale,
        })
    }

    /// Raise `value` to `exponent`; the scale becomes `scale ^ exponent`.
    ///
    /// Note this does NOT compose like [`mul`](Self::mul): `x.pow(2)` and
    /// `x.mul(&x)` only agree in scale when `scale` is 0 or 2. Use
    /// [`pow_composed`](Self::pow_composed) for the multiplicative rule.
    ///
    /// # Errors
    /// Returns `InvalidScale` if `scale ^ exponent` overflows `u32`.
    pub fn pow(&self, exponent: u32) -> NumericResult<Self> {
        let scale = self
            .scale
            .checked_pow(exponent)
            .ok_or(NumericError::InvalidScale {
                current: self.scale,
                target: u32::MAX,
            })?;
        Ok(Self {
            value: self.value.pow(exponent),
            scale,
        })
    }

    /// Raise to `exponent` with the scale composed as `scale * exponent`,
    /// i.e. the same result as repeated [`mul`](Self::mul).
    ///
    /// # Errors
    /// Returns `InvalidScale` if `scale * exponent` overflows `u32`.
    pub fn pow_composed(&self, exponent: u32) -> NumericResult<Self> {
        let scale = self
            .scale
            .checked_mul(exponent)
            .ok_or(NumericError::InvalidScale {
                current: self.scale,
                target: u32::MAX,
            })?;
        Ok(Self {
            value: self.value.pow(exponent),
            scale,
        })
    }

    /// `value * percentage / 100` at this value's scale.
    ///
    /// The percentage's own fractional digits become an integer
    /// numerator/denominator pair, so `12.5` is applied as `125 / 1000`.
    /// The quotient truncates toward zero.
    pub fn percent(&self, percentage: rust_decimal::Decimal) -> Self {
        let numerator = BigInt::from(percentage.mantissa());
        let denominator = pow10(percentage.scale()) * 100u8;
        let scaled = self.scale_mul(numerator);
        Self {
            value: scaled.value / denominator,
            scale: self.scale,
        }
    }

    // ========================================================================
    // Scale Conversion
    // ========================================================================

    /// Raise the scale without changing the numeric value.
    ///
    /// # Errors
    /// Returns `InvalidScale` if `target` is below the current scale.
    pub fn scale_up(&self, target: u32) -> NumericResult<Self> {
        if target < self.scale {
            return Err(NumericError::InvalidScale {
                current: self.scale,
                target,
            });
        }
        Ok(Self {
            value: &self.value * pow10(target - self.scale),
            scale: target,
        })
    }

    /// Lower the scale, collapsing the discarded digits with `policy`.
    ///
    /// Only the first discarded digit takes part in rounding: the value is
    /// truncated to `target + 1` digits and that last digit is collapsed.
    /// A `target` equal to the current scale returns an identical value.
    ///
    /// # Errors
    /// Returns `InvalidScale` if `target` is above the current scale.
    pub fn scale_down(&self, target: u32, policy: RoundingPolicy) -> NumericResult<Self> {
        match target.cmp(&self.scale) {
            Ordering::Greater => Err(NumericError::InvalidScale {
                current: self.scale,
                target,
            }),
            Ordering::Equal => Ok(self.clone()),
            Ordering::Less => {
                tracing::trace!(from = self.scale, to = target, ?policy, "reducing scale");
                let provisional = &self.value / pow10(self.scale - target - 1);
                Ok(Self {
                    value: policy.collapse(provisional),
                    scale: target,
                })
            },
        }
    }

    /// Move to `target` in either direction, rounding down-scales with
    /// `config.rounding`.
    pub fn rescale(&self, target: u32, config: &DecimalConfig) -> NumericResult<Self> {
        if target >= self.scale {
            self.scale_up(target)
        } else {
            self.scale_down(target, config.rounding)
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Numeric ordering of two decimals at their common scale.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.value.cmp(&other.value);
        }
        let (lhs, rhs, _) = self.aligned(other);
        lhs.cmp(&rhs)
    }

    fn compare_operand(&self, rhs: Operand<'_>) -> Ordering {
        match rhs {
            Operand::Decimal(other) => self.compare(other),
            Operand::Raw(raw) => self.value.cmp(raw.value()),
        }
    }

    /// Numeric equality. A raw operand is compared against `value` directly.
    pub fn eq<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        self.compare_operand(rhs.into()) == Ordering::Equal
    }

    pub fn lt<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        self.compare_operand(rhs.into()) == Ordering::Less
    }

    pub fn lte<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        self.compare_operand(rhs.into()) != Ordering::Greater
    }

    pub fn gt<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        self.compare_operand(rhs.into()) == Ordering::Greater
    }

    pub fn gte<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        self.compare_operand(rhs.into()) != Ordering::Less
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render as `-?\d+(\.\d+)?`.
    ///
    /// `visible_decimals` truncates (never rounds) the fractional part. When
    /// no fractional digits remain the decimal point is omitted.
    pub fn format(&self, visible_decimals: Option<u32>) -> String {
        let scale = self.scale as usize;
        let digits = self.value.magnitude().to_string();
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        let frac_part = match visible_decimals {
            Some(visible) => &frac_part[..frac_part.len().min(visible as usize)],
            None => frac_part,
        };
        let sign = if self.value.sign() == Sign::Minus {
            "-"
        } else {
            ""
        };

        if frac_part.is_empty() {
            format!("{}{}", sign, int_part)
        } else {
            format!("{}{}.{}", sign, int_part, frac_part)
        }
    }

    /// Format with the configured number of visible decimals.
    pub fn display(&self, config: &DecimalConfig) -> String {
        self.format(config.display_decimals)
    }

    /// Lossy conversion for display only. Never feed the result back into
    /// arithmetic or comparisons.
    pub fn to_number(&self) -> f64 {
        self.format(None).parse().unwrap_or(f64::NAN)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for ScaledDecimal {
    fn from(d: rust_decimal::Decimal) -> Self {
        Self::new(d.mantissa(), d.scale())
    }
}

impl ScaledDecimal {
    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `Overflow` if the digits exceed 96 bits or the scale exceeds 28.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let mantissa = self.value.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, self.scale)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for ScaledDecimal {
    #[inline]
    fn default() -> Self {
        math::zero()
    }
}

impl PartialEq for ScaledDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for ScaledDecimal {}

impl PartialOrd for ScaledDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for ScaledDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for ScaledDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let trimmed = self.trim();
        trimmed.value.hash(state);
        trimmed.scale.hash(state);
    }
}

impl Add<&ScaledDecimal> for &ScaledDecimal {
    type Output = ScaledDecimal;

    fn add(self, rhs: &ScaledDecimal) -> Self::Output {
        ScaledDecimal::add(self, rhs)
    }
}

impl Sub<&ScaledDecimal> for &ScaledDecimal {
    type Output = ScaledDecimal;

    fn sub(self, rhs: &ScaledDecimal) -> Self::Output {
        ScaledDecimal::sub(self, rhs)
    }
}

impl Neg for ScaledDecimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            scale: self.scale,
        }
    }
}

impl Neg for &ScaledDecimal {
    type Output = ScaledDecimal;

    #[inline]
    fn neg(self) -> Self::Output {
        ScaledDecimal {
            value: -&self.value,
            scale: self.scale,
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScaledDecimal({}, value={}, scale={})",
            self, self.value, self.scale
        )
    }
}

impl fmt::Display for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(None))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for ScaledDecimal {
    type Err = NumericError;

    /// Parse at the literal's natural scale, losslessly.
    ///
    /// # Examples
    /// - "123" -> 123 @ 0
    /// - "1.50" -> 150 @ 2
    /// - "-0.001" -> -1 @ 3
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, int_digits, frac_digits) = math::split_literal(s)?;
        let frac_digits = frac_digits.unwrap_or("");
        let scale = u32::try_from(frac_digits.len()).map_err(|_| NumericError::ParseError {
            input: s.to_string(),
        })?;
        Ok(Self {
            value: math::digits_to_bigint(negative, int_digits, frac_digits),
            scale,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
