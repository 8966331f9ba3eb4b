//! Ledger Store Errors
//!
//! Error types for store operations.

use crate::domain::UserId;

/// Errors that can occur in the ledger store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Backend could not be reached or is shutting down
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Backend refused to persist a write
    #[error("Write rejected for user {user_id}: {reason}")]
    WriteRejected { user_id: UserId, reason: String },
}

impl StoreError {
    /// Create a write rejected error
    pub fn write_rejected(user_id: UserId, reason: impl Into<String>) -> Self {
        Self::WriteRejected {
            user_id,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_rejected_message() {
        let user_id = UserId::new(4).unwrap();
        let err = StoreError::write_rejected(user_id, "disk full");

        assert_eq!(err.to_string(), "Write rejected for user 4: disk full");
    }
}
