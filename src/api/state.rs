use std::sync::Arc;

use crate::{db::MemoryStore, services::recommender::Recommender};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub recommender: Recommender,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Recommender::default())
    }
}

impl AppState {
    /// Creates state with an empty store
    pub fn new(recommender: Recommender) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            recommender,
        }
    }
}
