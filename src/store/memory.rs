//! In-memory Ledger Store
//!
//! Volatile implementation of [`LedgerStore`]. Nothing survives a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{Amount, PointHistory, Points, TransactionType, UserId, UserPoint};

use super::{LedgerStore, StoreError};

#[derive(Debug)]
struct HistoryLog {
    next_sequence_id: i64,
    entries: HashMap<UserId, Vec<PointHistory>>,
}

/// Ledger store backed by hash maps behind async read/write locks
#[derive(Debug)]
pub struct InMemoryLedgerStore {
    balances: RwLock<HashMap<UserId, UserPoint>>,
    history: RwLock<HistoryLog>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
            history: RwLock::new(HistoryLog {
                next_sequence_id: 1,
                entries: HashMap::new(),
            }),
        }
    }
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn get(&self, user_id: UserId) -> Result<UserPoint, StoreError> {
        let balances = self.balances.read().await;
        Ok(balances
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| UserPoint::empty(user_id)))
    }

    async fn set_balance(&self, user_id: UserId, points: Points) -> Result<UserPoint, StoreError> {
        let record = UserPoint::new(user_id, points, Utc::now());
        self.balances.write().await.insert(user_id, record.clone());

        tracing::debug!(user_id = %user_id, points = %points, "Balance stored");
        Ok(record)
    }

    async fn append_history(
        &self,
        user_id: UserId,
        amount: Amount,
        transaction_type: TransactionType,
        timestamp: DateTime<Utc>,
    ) -> Result<PointHistory, StoreError> {
        let mut log = self.history.write().await;

        let entry = PointHistory {
            sequence_id: log.next_sequence_id,
            user_id,
            amount,
            transaction_type,
            timestamp,
        };
        log.next_sequence_id += 1;
        log.entries.entry(user_id).or_default().push(entry.clone());

        tracing::debug!(
            user_id = %user_id,
            sequence_id = entry.sequence_id,
            transaction_type = %transaction_type,
            "History appended"
        );
        Ok(entry)
    }

    async fn list_history(&self, user_id: UserId) -> Result<Vec<PointHistory>, StoreError> {
        let log = self.history.read().await;
        Ok(log.entries.get(&user_id).cloned().unwrap_or_default())
    }

    async fn restore_balance(&self, previous: UserPoint) -> Result<(), StoreError> {
        let mut balances = self.balances.write().await;
        if previous.is_empty() {
            balances.remove(&previous.user_id);
        } else {
            balances.insert(previous.user_id, previous);
        }
        Ok(())
    }
}
