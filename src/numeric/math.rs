// ============================================================================
// Decimal Math
// Stateless helpers over ScaledDecimal: min/max, truncating parse, constants
// ============================================================================

use num_bigint::BigInt;

use super::errors::{NumericError, NumericResult};
use super::operand::DecimalLiteral;
use super::ScaledDecimal;

// ============================================================================
// Constants
// ============================================================================
//
// Plain constructors rather than shared statics: each call builds a fresh
// value, so there is no initialization order to get wrong.

/// `0` at scale 0
#[inline]
pub fn zero() -> ScaledDecimal {
    ScaledDecimal::new(0, 0)
}

/// `1` at scale 0
#[inline]
pub fn one() -> ScaledDecimal {
    ScaledDecimal::new(1, 0)
}

/// `-1` at scale 0
#[inline]
pub fn minus_one() -> ScaledDecimal {
    ScaledDecimal::new(-1, 0)
}

/// `2^256 - 1` at scale 0, the largest on-chain token amount
pub fn max_uint256() -> ScaledDecimal {
    ScaledDecimal::new(BigInt::from(2u8).pow(256) - 1u8, 0)
}

// ============================================================================
// Min / Max
// ============================================================================

/// The smaller of `a` and `b`, compared at their common scale.
///
/// The returned reference is one of the inputs, so its original scale is
/// kept. Ties return `a`.
pub fn min<'a>(a: &'a ScaledDecimal, b: &'a ScaledDecimal) -> &'a ScaledDecimal {
    if a.lte(b) {
        a
    } else {
        b
    }
}

/// The larger of `a` and `b`, compared at their common scale.
///
/// The returned reference is one of the inputs, so its original scale is
/// kept. Ties return `a`.
pub fn max<'a>(a: &'a ScaledDecimal, b: &'a ScaledDecimal) -> &'a ScaledDecimal {
    if a.gte(b) {
        a
    } else {
        b
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Truncating parse of a plain decimal into a value at `scale`.
///
/// Extra fractional digits are dropped, never rounded; missing ones are
/// zero-filled.
///
/// # Examples
/// - ("1.23456", 2) -> 123 @ 2
/// - ("1.5", 4) -> 15000 @ 4
/// - ("-7", 2) -> -700 @ 2
///
/// # Errors
/// Returns `ParseError` unless the input matches `-?[0-9]+(\.[0-9]+)?`.
/// Exponent notation such as `1e5` is rejected.
pub fn to_fp(source: impl Into<DecimalLiteral>, scale: u32) -> NumericResult<ScaledDecimal> {
    let literal = source.into();
    let input = literal.as_str();
    let (negative, int_digits, frac_digits) = split_literal(input)?;
    let frac_digits = frac_digits.unwrap_or("");

    let width = scale as usize;
    let kept = if frac_digits.len() >= width {
        frac_digits[..width].to_string()
    } else {
        format!("{:0<width$}", frac_digits, width = width)
    };

    Ok(ScaledDecimal::new(
        digits_to_bigint(negative, int_digits, &kept),
        scale,
    ))
}

/// Split `-?int(.frac)?` into sign, integer digits and fractional digits.
pub(crate) fn split_literal(input: &str) -> NumericResult<(bool, &str, Option<&str>)> {
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (int_digits, frac_digits) = match body.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits, Some(frac_digits)),
        None => (body, None),
    };

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(int_digits) || !frac_digits.map_or(true, is_digits) {
        tracing::debug!(input, "rejected decimal literal");
        return Err(NumericError::ParseError {
            input: input.to_string(),
        });
    }

    Ok((negative, int_digits, frac_digits))
}

/// Combine pre-validated ASCII digit runs into a signed bignum.
pub(crate) fn digits_to_bigint(negative: bool, int_digits: &str, frac_digits: &str) -> BigInt {
    let ten = BigInt::from(10u8);
    let magnitude = int_digits
        .bytes()
        .chain(frac_digits.bytes())
        .fold(BigInt::from(0u8), |acc, digit| acc * &ten + (digit - b'0'));
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
