//! Amount and Points types
//!
//! Domain primitives for point quantities with business rule validation.
//! Amounts are validated at construction time, ensuring invalid values
//! cannot reach the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DomainError;

/// Maximum balance a single user may hold
pub const MAX_POINTS: i64 = 1000;

/// Amount represents the magnitude of a single charge or use.
///
/// # Invariants
/// - Value is always positive (> 0)
///
/// # Example
/// ```
/// use point_ledger::domain::Amount;
///
/// let amount = Amount::new(100).unwrap();
/// assert_eq!(amount.value(), 100);
/// assert!(Amount::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Amount(i64);

/// Errors that can occur when creating an Amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount must be positive (got {0})")]
    NotPositive(i64),
}

impl Amount {
    /// Create a new Amount with validation.
    ///
    /// # Errors
    /// - `AmountError::NotPositive` if value <= 0
    pub fn new(value: i64) -> Result<Self, AmountError> {
        if value <= 0 {
            return Err(AmountError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Get the underlying value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Amount {
    type Error = AmountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Points represents a user's balance.
/// Unlike Amount, Points can be zero, and never exceeds `MAX_POINTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Points(i64);

impl Points {
    /// Create a balance within `[0, MAX_POINTS]`
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(0..=MAX_POINTS).contains(&value) {
            return Err(DomainError::PointsOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Create a zero balance
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get the underlying value
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Check if balance is sufficient for a use
    pub fn is_sufficient_for(&self, amount: &Amount) -> bool {
        self.0 >= amount.value()
    }

    /// Add amount to balance, failing if the cap would be exceeded
    pub fn credit(&self, amount: &Amount) -> Result<Points, DomainError> {
        match self.0.checked_add(amount.value()) {
            Some(total) if total <= MAX_POINTS => Ok(Self(total)),
            _ => Err(DomainError::limit_exceeded(self.0, amount.value())),
        }
    }

    /// Subtract amount from balance, failing if the balance is too small
    pub fn debit(&self, amount: &Amount) -> Result<Points, DomainError> {
        if !self.is_sufficient_for(amount) {
            return Err(DomainError::insufficient_balance(amount.value(), self.0));
        }
        Ok(Self(self.0 - amount.value()))
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Points {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Points::new(value)
    }
}

impl From<Points> for i64 {
    fn from(points: Points) -> Self {
        points.0
    }
}
