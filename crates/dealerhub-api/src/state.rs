//! Shared application state.

use std::sync::Arc;

use dealerhub_client::{ClientError, DealerClient, SentimentClient};
use sqlx::SqlitePool;

use crate::auth::SessionStore;
use crate::config::ApiConfig;

/// State shared by every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Car catalog and user store.
    pub db: SqlitePool,
    /// Typed client for the dealer service.
    pub dealers: Arc<DealerClient>,
    /// Typed client for the sentiment analyzer.
    pub sentiment: Arc<SentimentClient>,
    /// In-process session store.
    pub sessions: SessionStore,
    /// Resolved service configuration.
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Build the shared state from a resolved configuration and an
    /// initialized database pool.
    pub fn new(config: ApiConfig, db: SqlitePool) -> Result<Self, ClientError> {
        let dealers = Arc::new(DealerClient::new(&config.client)?);
        let sentiment = Arc::new(SentimentClient::new(&config.client)?);
        Ok(Self {
            db,
            dealers,
            sentiment,
            sessions: SessionStore::default(),
            config: Arc::new(config),
        })
    }
}
