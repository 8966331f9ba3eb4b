//! Per-user critical sections
//!
//! One async mutex per user id, created on first use and never removed.
//! Operations on different users never wait on each other.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::domain::UserId;

/// Registry of per-user locks
#[derive(Debug, Default)]
pub struct UserLocks {
    locks: RwLock<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `user_id`.
    /// Access is released when the returned guard is dropped.
    pub async fn acquire(&self, user_id: UserId) -> OwnedMutexGuard<()> {
        let lock = self.lock_for(user_id).await;
        lock.lock_owned().await
    }

    async fn lock_for(&self, user_id: UserId) -> Arc<Mutex<()>> {
        if let Some(lock) = self.locks.read().await.get(&user_id) {
            return Arc::clone(lock);
        }

        let mut locks = self.locks.write().await;
        let lock = locks.entry(user_id).or_insert_with(|| {
            tracing::debug!(user_id = %user_id, "Created user lock");
            Arc::new(Mutex::new(()))
        });
        Arc::clone(lock)
    }

    /// Number of users that have a lock registered
    #[cfg(test)]
    async fn registered(&self) -> usize {
        self.locks.read().await.len()
    }
}
