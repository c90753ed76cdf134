// ============================================================================
// Numeric Errors
// Error types for scaled-decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during scaled-decimal arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Requested scale is not reachable from the current one
    InvalidScale { current: u32, target: u32 },
    /// Raw source given without an explicit scale
    MissingScale,
    /// Attempted division by zero
    DivisionByZero,
    /// Input literal is not a plain decimal
    ParseError { input: String },
    /// Value does not fit the requested bounded representation
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidScale { current, target } => write!(
                f,
                "invalid scale: cannot move from scale {} to scale {}",
                current, target
            ),
            NumericError::MissingScale => {
                write!(f, "missing scale: raw values need an explicit scale")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::ParseError { input } => {
                write!(f, "parse error: {:?} is not a plain decimal", input)
            },
            NumericError::Overflow => {
                write!(f, "overflow: value does not fit the target representation")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::InvalidScale {
                current: 6,
                target: 2
            }
            .to_string(),
            "invalid scale: cannot move from scale 6 to scale 2"
        );
        assert_eq!(
            NumericError::ParseError {
                input: "1e5".to_string()
            }
            .to_string(),
            "parse error: \"1e5\" is not a plain decimal"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::MissingScale, NumericError::MissingScale);
        assert_ne!(NumericError::MissingScale, NumericError::DivisionByZero);
    }
}
