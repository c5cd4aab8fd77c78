use std::sync::Arc;

use crate::{
    auth::jwt::JwtKeys,
    config::AppConfig,
    store::{PgStore, Store},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub keys: JwtKeys,
}

impl AppState {
    /// Connects to Postgres and applies migrations. Any failure aborts startup.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let store = PgStore::connect(config).await?;
        store.migrate().await?;
        Ok(Self::from_parts(Arc::new(store), JwtKeys::new(&config.jwt)))
    }

    pub fn from_parts(store: Arc<dyn Store>, keys: JwtKeys) -> Self {
        Self { store, keys }
    }

    #[cfg(test)]
    pub fn fake() -> (Self, Arc<crate::store::memory::MemoryStore>) {
        let store = Arc::new(crate::store::memory::MemoryStore::new());
        let keys = JwtKeys::new(&crate::config::JwtConfig {
            secret: "test".into(),
            issuer: "test".into(),
            audience: "test".into(),
            ttl_minutes: 5,
        });
        (Self::from_parts(store.clone(), keys), store)
    }
}
