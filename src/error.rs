//! Error handling module
//!
//! Centralized error types for the point service. Transport mapping lives
//! in `api::error`.

use crate::domain::{AmountError, DomainError, UserId};
use crate::store::StoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("User not found: {0}")]
    NotFound(UserId),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error taxonomy exposed to callers, independent of any transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    LimitExceeded,
    InsufficientBalance,
    Storage,
    Internal,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Domain(DomainError::LimitExceeded { .. }) => ErrorKind::LimitExceeded,
            AppError::Domain(DomainError::InsufficientBalance { .. }) => {
                ErrorKind::InsufficientBalance
            }
            AppError::Domain(_) => ErrorKind::InvalidArgument,
            AppError::Storage(_) => ErrorKind::Storage,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Stable snake_case code for the error kind
    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::NotFound => "not_found",
            ErrorKind::LimitExceeded => "limit_exceeded",
            ErrorKind::InsufficientBalance => "insufficient_balance",
            ErrorKind::Storage => "storage_error",
            ErrorKind::Internal => "internal_error",
        }
    }
}

impl From<AmountError> for AppError {
    fn from(err: AmountError) -> Self {
        AppError::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Amount;

    #[test]
    fn test_domain_errors_map_to_kinds() {
        let err: AppError = DomainError::limit_exceeded(200, 900).into();
        assert_eq!(err.kind(), ErrorKind::LimitExceeded);
        assert_eq!(err.error_code(), "limit_exceeded");

        let err: AppError = DomainError::insufficient_balance(10, 5).into();
        assert_eq!(err.kind(), ErrorKind::InsufficientBalance);

        let err: AppError = DomainError::InvalidUserId(0).into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_amount_error_is_invalid_argument() {
        let err: AppError = Amount::new(0).unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_storage_and_not_found_kinds() {
        let user_id = UserId::new(3).unwrap();

        let err = AppError::NotFound(user_id);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "User not found: 3");

        let err: AppError = StoreError::Unavailable("closed".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert_eq!(err.error_code(), "storage_error");
    }
}
