//! # Studiobook Storage
//!
//! Persistent [`KeyValueStore`] backends for the booking ledger: a directory
//! of JSON files for single-host deployments and a Postgres table for
//! everything else.

pub mod file_store;
pub mod models;
pub mod pg_store;
pub mod repositories;
pub mod schema;

pub mod mock;

use std::{path::PathBuf, sync::Arc};

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use studiobook_core::storage::KeyValueStore;
use tracing::info;

use crate::{file_store::FileStore, pg_store::PgKeyValueStore};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Where the booking ledger is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// One JSON file per key inside `dir`.
    File { dir: PathBuf },
    /// The `key_value_store` table of a Postgres database.
    Postgres { url: String },
}

/// Opens the configured backend, creating its directory or schema if needed.
pub async fn open_store(backend: &StorageBackend) -> Result<Arc<dyn KeyValueStore>> {
    match backend {
        StorageBackend::File { dir } => {
            info!("Using file storage at {}", dir.display());
            let store = FileStore::open(dir).await?;
            Ok(Arc::new(store))
        }
        StorageBackend::Postgres { url } => {
            info!("Using Postgres storage");
            let pool = create_pool(url).await?;
            schema::initialize_database(&pool).await?;
            Ok(Arc::new(PgKeyValueStore::new(pool)))
        }
    }
}
