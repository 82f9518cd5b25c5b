//! Poison recovery extension trait for std::sync::RwLock
//!
//! A panicking writer poisons the lock; for the plain key/value map guarded
//! here the data stays consistent, so recovery just takes the guard back.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Extension trait for RwLock with poison recovery
pub(crate) trait RwLockExt<T> {
    /// Acquire a read lock, recovering from poison errors
    fn read_recovered(&self) -> RwLockReadGuard<'_, T>;

    /// Acquire a write lock, recovering from poison errors
    fn write_recovered(&self) -> RwLockWriteGuard<'_, T>;
}

impl<T> RwLockExt<T> for RwLock<T> {
    fn read_recovered(&self) -> RwLockReadGuard<'_, T> {
        match self.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("RwLock was poisoned (read), recovering");
                poisoned.into_inner()
            }
        }
    }

    fn write_recovered(&self) -> RwLockWriteGuard<'_, T> {
        match self.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("RwLock was poisoned (write), recovering");
                poisoned.into_inner()
            }
        }
    }
}
