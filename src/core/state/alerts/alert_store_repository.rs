use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::model::alert::Alert;
use crate::core::state::alerts::alert_store::AlertStore;
use crate::core::state::alerts::alert_store_repository_trait::AlertStoreRepositoryTrait;

pub struct AlertStoreRepository {
    state: Arc<RwLock<Arc<AlertStore>>>,
}

impl AlertStoreRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(AlertStore::default()))),
        }
    }

    pub fn with_seed(alerts: Vec<Alert>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(AlertStore::seeded(alerts)))),
        }
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for AlertStoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AlertStoreRepositoryTrait for AlertStoreRepository {
    /// Return the shared Arc snapshot (zero cost).
    async fn get(&self) -> Arc<AlertStore> {
        self.state.read().await.clone()
    }

    /// Mutate by cloning the current store, applying the closure, and
    /// swapping the Arc pointer. Readers keep their old snapshot.
    async fn update<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut AlertStore) -> T + Send + Sync,
        T: Send,
    {
        let mut guard = self.state.write().await;

        let mut new_store = (**guard).clone();
        let result = f(&mut new_store);
        *guard = Arc::new(new_store);

        result
    }
}
