use thiserror::Error;

/// Result type for fallible polynomial operations.
pub type Result<T> = core::result::Result<T, PolyError>;

/// Errors raised by polynomial division and its derived operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    /// The divisor of `div_rem`, `quot` or `rem` was the zero polynomial.
    #[error("division by the zero polynomial")]
    ZeroDivisor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_divisor_message() {
        assert_eq!(
            PolyError::ZeroDivisor.to_string(),
            "division by the zero polynomial"
        );
    }
}
