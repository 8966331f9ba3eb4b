//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

use super::MAX_POINTS;

/// Domain-specific errors
///
/// These errors represent business rule violations and domain invariant failures.
/// They are independent of the web/storage layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Charge would push the balance above the cap
    #[error("Point limit exceeded: balance {current} + {requested} exceeds maximum {max}")]
    LimitExceeded {
        current: i64,
        requested: i64,
        max: i64,
    },

    /// Insufficient balance for a use
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: i64, available: i64 },

    /// User ids are positive integers
    #[error("Invalid user id: {0}")]
    InvalidUserId(i64),

    /// Balance outside `[0, MAX_POINTS]`
    #[error("Points out of range: {0}")]
    PointsOutOfRange(i64),
}

impl DomainError {
    /// Create a limit exceeded error against the fixed cap
    pub fn limit_exceeded(current: i64, requested: i64) -> Self {
        Self::LimitExceeded {
            current,
            requested,
            max: MAX_POINTS,
        }
    }

    /// Create an insufficient balance error
    pub fn insufficient_balance(required: i64, available: i64) -> Self {
        Self::InsufficientBalance {
            required,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_exceeded_error() {
        let err = DomainError::limit_exceeded(200, 900);

        assert!(err.to_string().contains("200"));
        assert!(err.to_string().contains("900"));
        assert!(err.to_string().contains("1000"));
    }

    #[test]
    fn test_insufficient_balance_error() {
        let err = DomainError::insufficient_balance(100, 50);

        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("50"));
    }

    #[test]
    fn test_invalid_user_id_error() {
        let err = DomainError::InvalidUserId(-3);
        assert_eq!(err.to_string(), "Invalid user id: -3");
    }
}
