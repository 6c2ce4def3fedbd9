use std::sync::Arc;
use tokio::sync::{RwLock, RwLockWriteGuard};

/// Shared handle to the most recently created record of one kind.
///
/// Starts at a placeholder and is replaced after successful writes. It is a
/// convenience reference only: another process may change or delete the
/// stored record without this value following.
#[derive(Clone)]
pub struct LastRecord<T> {
    inner: Arc<RwLock<T>>,
}

impl<T: Clone> LastRecord<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    pub async fn get(&self) -> T {
        self.inner.read().await.clone()
    }

    pub async fn set(&self, value: T) {
        *self.inner.write().await = value;
    }

    /// Exclusive access for read-modify-write sequences that must not
    /// interleave with each other.
    pub async fn lock(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write().await
    }
}
