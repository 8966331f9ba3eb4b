//! Point Service
//!
//! Charge, use and query operations on user balances. The only writer to
//! the ledger store: every mutation runs read, validate, write and append
//! inside the user's critical section.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Amount, PointHistory, Points, TransactionType, UserId, UserPoint};
use crate::error::{AppError, AppResult};
use crate::store::{DynLedgerStore, StoreError};

use super::UserLocks;

/// Service enforcing balance rules over a [`crate::store::LedgerStore`]
#[derive(Clone)]
pub struct PointService {
    store: DynLedgerStore,
    locks: Arc<UserLocks>,
}

impl PointService {
    pub fn new(store: DynLedgerStore) -> Self {
        Self {
            store,
            locks: Arc::new(UserLocks::new()),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current balance. Users that were never charged are not found.
    #[tracing::instrument(skip_all, fields(user_id = %user_id))]
    pub async fn get_balance(&self, user_id: UserId) -> AppResult<UserPoint> {
        let point = self.store.get(user_id).await?;
        if point.is_empty() {
            return Err(AppError::NotFound(user_id));
        }
        Ok(point)
    }

    /// All charges and uses in insertion order. Empty if there are none.
    #[tracing::instrument(skip_all, fields(user_id = %user_id))]
    pub async fn get_history(&self, user_id: UserId) -> AppResult<Vec<PointHistory>> {
        Ok(self.store.list_history(user_id).await?)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `amount` to the balance, creating the record on first charge.
    #[tracing::instrument(skip_all, fields(user_id = %user_id, amount = %amount))]
    pub async fn charge(&self, user_id: UserId, amount: Amount) -> AppResult<UserPoint> {
        let _guard = self.locks.acquire(user_id).await;

        let current = self.store.get(user_id).await?;
        let new_points = current.points.credit(&amount).map_err(|e| {
            tracing::warn!(current = %current.points, "Charge rejected: {}", e);
            e
        })?;

        let updated = self
            .commit(current, new_points, amount, TransactionType::Charge)
            .await?;

        tracing::info!(points = %updated.points, "Points charged");
        Ok(updated)
    }

    /// Subtract `amount` from the balance of an existing user.
    #[tracing::instrument(skip_all, fields(user_id = %user_id, amount = %amount))]
    pub async fn use_points(&self, user_id: UserId, amount: Amount) -> AppResult<UserPoint> {
        let _guard = self.locks.acquire(user_id).await;

        let current = self.store.get(user_id).await?;
        if current.is_empty() {
            tracing::warn!("Use rejected: user has never been charged");
            return Err(AppError::NotFound(user_id));
        }

        let new_points = current.points.debit(&amount).map_err(|e| {
            tracing::warn!(current = %current.points, "Use rejected: {}", e);
            e
        })?;

        let updated = self
            .commit(current, new_points, amount, TransactionType::Use)
            .await?;

        tracing::info!(points = %updated.points, "Points used");
        Ok(updated)
    }

    /// Write the new balance, then record the history entry.
    /// Must be called with the user's lock held. On any storage failure the
    /// previous record is put back and no history entry remains.
    async fn commit(
        &self,
        previous: UserPoint,
        new_points: Points,
        amount: Amount,
        transaction_type: TransactionType,
    ) -> AppResult<UserPoint> {
        let user_id = previous.user_id;

        let updated = self
            .store
            .set_balance(user_id, new_points)
            .await
            .map_err(|e| {
                tracing::error!("Balance write failed: {}", e);
                e
            })?;

        if updated.points != new_points {
            tracing::error!(
                expected = %new_points,
                stored = %updated.points,
                "Stored balance does not match"
            );
            self.compensate(previous).await;
            return Err(StoreError::write_rejected(
                user_id,
                format!("stored {} instead of {}", updated.points, new_points),
            )
            .into());
        }

        let timestamp = updated.updated_at.unwrap_or_else(Utc::now);
        if let Err(e) = self
            .store
            .append_history(user_id, amount, transaction_type, timestamp)
            .await
        {
            tracing::error!("History append failed: {}", e);
            self.compensate(previous).await;
            return Err(e.into());
        }

        Ok(updated)
    }

    async fn compensate(&self, previous: UserPoint) {
        let user_id = previous.user_id;
        if let Err(e) = self.store.restore_balance(previous).await {
            tracing::error!(user_id = %user_id, "Failed to restore previous balance: {}", e);
        }
    }
}
