//! Common test utilities

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use point_ledger::{
    Amount, InMemoryLedgerStore, LedgerStore, PointHistory, PointService, Points, StoreError,
    TransactionType, UserId, UserPoint,
};

pub fn user(id: i64) -> UserId {
    UserId::new(id).unwrap()
}

pub fn amount(value: i64) -> Amount {
    Amount::new(value).unwrap()
}

/// Service over a fresh in-memory store
pub fn setup_service() -> PointService {
    PointService::new(Arc::new(InMemoryLedgerStore::new()))
}

/// In-memory store with switchable write failures
#[derive(Default)]
pub struct FaultyStore {
    inner: InMemoryLedgerStore,
    pub fail_set_balance: AtomicBool,
    pub fail_append_history: AtomicBool,
    pub fail_restore: AtomicBool,
    /// Store zero instead of the requested points
    pub drop_balance_writes: AtomicBool,
}

impl FaultyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set(flag: &AtomicBool, value: bool) {
        flag.store(value, Ordering::SeqCst);
    }
}

#[async_trait]
impl LedgerStore for FaultyStore {
    async fn get(&self, user_id: UserId) -> Result<UserPoint, StoreError> {
        self.inner.get(user_id).await
    }

    async fn set_balance(&self, user_id: UserId, points: Points) -> Result<UserPoint, StoreError> {
        if self.fail_set_balance.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("balance table offline".to_string()));
        }
        if self.drop_balance_writes.load(Ordering::SeqCst) {
            return self.inner.set_balance(user_id, Points::zero()).await;
        }
        self.inner.set_balance(user_id, points).await
    }

    async fn append_history(
        &self,
        user_id: UserId,
        amount: Amount,
        transaction_type: TransactionType,
        timestamp: DateTime<Utc>,
    ) -> Result<PointHistory, StoreError> {
        if self.fail_append_history.load(Ordering::SeqCst) {
            return Err(StoreError::write_rejected(user_id, "history table offline"));
        }
        self.inner
            .append_history(user_id, amount, transaction_type, timestamp)
            .await
    }

    async fn list_history(&self, user_id: UserId) -> Result<Vec<PointHistory>, StoreError> {
        self.inner.list_history(user_id).await
    }

    async fn restore_balance(&self, previous: UserPoint) -> Result<(), StoreError> {
        if self.fail_restore.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("balance table offline".to_string()));
        }
        self.inner.restore_balance(previous).await
    }
}
