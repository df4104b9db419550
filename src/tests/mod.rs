//! tests/mod.rs
//! Pruebas que cruzan varios módulos (DB real, servicio, endpoints).

mod store_tests;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tempfile::TempDir;

use crate::db::setup_database;
use crate::errors::StoreError;
use crate::models::tracking_model::TrackingRecord;
use crate::services::tracking_store::{SqliteTrackingStore, TrackingStore};

/// SQLite en un archivo temporal, con varias conexiones para que los
/// escritores concurrentes compitan de verdad. El `TempDir` debe vivir
/// mientras dure la prueba.
pub(crate) async fn sqlite_store() -> (TempDir, Arc<SqliteTrackingStore>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite:{}", dir.path().join("tracking.db").to_string_lossy());

    let pool = setup_database(&url, 8)
        .await
        .expect("Failed to open test database");
    let store = SqliteTrackingStore::new(pool);
    store.run_migrations().await.expect("Failed to migrate");

    (dir, Arc::new(store))
}

/// Almacén que siempre falla, para probar la ruta de StorageUnavailable.
pub(crate) struct FailingStore;

#[async_trait]
impl TrackingStore for FailingStore {
    async fn create(
        &self,
        _id: &str,
        _recipient_email: &str,
        _subject: &str,
        _created_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        Err(StoreError::StorageUnavailable(sqlx::Error::PoolClosed))
    }

    async fn record_open_if_unset(
        &self,
        _id: &str,
        _observed_at: DateTime<Utc>,
        _client_ip: &str,
        _client_user_agent: &str,
    ) -> Result<bool, StoreError> {
        Err(StoreError::StorageUnavailable(sqlx::Error::PoolClosed))
    }

    async fn lookup(&self, _id: &str) -> Result<TrackingRecord, StoreError> {
        Err(StoreError::StorageUnavailable(sqlx::Error::PoolClosed))
    }
}
