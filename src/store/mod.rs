//! Ledger Store module
//!
//! Storage layer for balances and point history.
//! Pure storage: no business rules, per-call atomicity only. Composing a
//! read with a later write is the caller's job.

mod error;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Amount, PointHistory, Points, TransactionType, UserId, UserPoint};

pub use error::StoreError;
pub use memory::InMemoryLedgerStore;

/// Storage contract for balances and history.
///
/// Every method is atomic on its own. Calls for different users never
/// interfere; calls for the same user must be serialized by the caller when
/// they form a read-then-write pair.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Current balance, or [`UserPoint::empty`] if the user was never written.
    async fn get(&self, user_id: UserId) -> Result<UserPoint, StoreError>;

    /// Overwrite the balance with a fresh timestamp and return the stored record.
    async fn set_balance(&self, user_id: UserId, points: Points) -> Result<UserPoint, StoreError>;

    /// Append an immutable history entry with the next sequence id.
    async fn append_history(
        &self,
        user_id: UserId,
        amount: Amount,
        transaction_type: TransactionType,
        timestamp: DateTime<Utc>,
    ) -> Result<PointHistory, StoreError>;

    /// All entries for the user in insertion order. Empty if none.
    async fn list_history(&self, user_id: UserId) -> Result<Vec<PointHistory>, StoreError>;

    /// Put back a record previously returned by [`LedgerStore::get`].
    /// Restoring the absent sentinel removes the record.
    async fn restore_balance(&self, previous: UserPoint) -> Result<(), StoreError>;
}

pub type DynLedgerStore = Arc<dyn LedgerStore>;
