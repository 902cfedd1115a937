use std::sync::Arc;
use async_trait::async_trait;

use crate::core::state::alerts::alert_store::AlertStore;

#[async_trait]
pub trait AlertStoreRepositoryTrait: Send + Sync {

    /// Return the current store as an Arc snapshot, without cloning the
    /// records themselves.
    async fn get(&self) -> Arc<AlertStore>;

    /// Mutate the store through a closure and return its result.
    ///
    /// Implementations serialize writers, so read-modify-write sequences
    /// inside the closure (the version bump on save, the overdue sweep)
    /// cannot interleave.
    async fn update<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut AlertStore) -> T + Send + Sync,
        T: Send;
}
