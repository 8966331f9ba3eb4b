//! Point records
//!
//! Immutable value records for a user's balance and the history of
//! balance-changing operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Amount, DomainError, Points};

/// Identifier of a point holder. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidUserId(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for UserId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        UserId::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Kind of balance-changing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Charge,
    Use,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Charge => "CHARGE",
            TransactionType::Use => "USE",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current balance of one user.
///
/// A user that has never been charged is represented by [`UserPoint::empty`]:
/// zero points and no `updated_at` timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPoint {
    pub user_id: UserId,
    pub points: Points,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserPoint {
    pub fn new(user_id: UserId, points: Points, updated_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            points,
            updated_at: Some(updated_at),
        }
    }

    /// The absent sentinel
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            points: Points::zero(),
            updated_at: None,
        }
    }

    /// True if no mutation was ever stored for this user
    pub fn is_empty(&self) -> bool {
        self.updated_at.is_none()
    }
}

/// One completed charge or use. Never updated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointHistory {
    pub sequence_id: i64,
    pub user_id: UserId,
    pub amount: Amount,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub timestamp: DateTime<Utc>,
}
