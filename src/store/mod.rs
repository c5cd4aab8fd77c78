//! Storage seam. Each feature declares its repository trait next to its SQL;
//! `Store` bundles them so handlers and services hold one `Arc<dyn Store>`.

#[cfg(test)]
pub mod memory;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

use crate::{
    auth::repo::SessionRepo, config::AppConfig, constructions::repo::ConstructionRepo,
    materials::repo::MaterialRepo, users::repo::UserRepo,
};

const PG_UNIQUE_VIOLATION: &str = "23505";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },
    #[error("database: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                return StoreError::UniqueViolation {
                    constraint: db.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        StoreError::Database(e)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait Store: UserRepo + SessionRepo + ConstructionRepo + MaterialRepo + Send + Sync {}

impl<T> Store for T where
    T: UserRepo + SessionRepo + ConstructionRepo + MaterialRepo + Send + Sync
{
}

/// Postgres-backed store. The repository impls live in each feature's `repo.rs`.
#[derive(Clone)]
pub struct PgStore {
    pub(crate) pool: PgPool,
}

impl PgStore {
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("run migrations")?;
        Ok(())
    }
}
