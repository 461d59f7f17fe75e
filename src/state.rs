use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::auth::{jwks::load_key_set, jwt::TokenVerifier};
use crate::config::AppConfig;
use crate::drinks::{DrinkStore, PgDrinkStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DrinkStore>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .context("run migrations")?;

        let keys = load_key_set(&config.auth).await?;

        Ok(Self::from_parts(
            Arc::new(PgDrinkStore::new(db)),
            Arc::new(TokenVerifier::new(&config.auth, keys)),
        ))
    }

    pub fn from_parts(store: Arc<dyn DrinkStore>, verifier: Arc<TokenVerifier>) -> Self {
        Self { store, verifier }
    }

    /// In-memory store plus a verifier trusting the test signing key.
    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::{auth::testing::test_verifier, drinks::memory::MemoryDrinkStore};

        Self::from_parts(
            Arc::new(MemoryDrinkStore::default()),
            Arc::new(test_verifier()),
        )
    }
}
