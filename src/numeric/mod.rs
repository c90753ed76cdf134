// ============================================================================
// Numeric Module
// Arbitrary-precision fixed-point arithmetic for token amounts and rates
// ============================================================================
//
// This module provides:
// - ScaledDecimal: bignum value with an explicit per-value scale
// - RoundingPolicy: how scale reduction collapses discarded digits
// - RawInteger / DecimalLiteral: tagged inputs for same-scale raw integers
//   and human-readable decimals
// - min/max/to_fp and named constants
// - NumericError: error types for arithmetic operations
//
// Design principles:
// - No floating-point operations (to_number is display-only)
// - All fallible arithmetic returns Result (no panics)
// - Unbounded integers: amounts up to 2^256 never wrap
// - Values are immutable; every operation returns a new instance

mod errors;
mod math;
mod operand;
mod rounding;
mod scaled_decimal;

pub use errors::{NumericError, NumericResult};
pub use math::{max, max_uint256, min, minus_one, one, to_fp, zero};
pub use operand::{DecimalLiteral, Operand, RawInteger, ValueSource};
pub use rounding::RoundingPolicy;
pub use scaled_decimal::ScaledDecimal;
