//! services/tracking_store.rs
//! Persistencia de los registros de seguimiento.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Pool, Row, Sqlite};

use crate::errors::StoreError;
use crate::models::tracking_model::TrackingRecord;

/// Almacén de registros de seguimiento.
///
/// `record_open_if_unset` es la única operación sensible a concurrencia:
/// para un mismo id, sólo la primera llamada escribe y el resto no hace nada.
#[async_trait]
pub trait TrackingStore: Send + Sync {
    /// Inserta un registro nuevo con `opened_at` vacío.
    async fn create(
        &self,
        id: &str,
        recipient_email: &str,
        subject: &str,
        created_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Marca la apertura sólo si todavía no estaba marcada.
    /// Devuelve `true` si esta llamada hizo la escritura. Un id inexistente
    /// o ya abierto devuelve `Ok(false)`.
    async fn record_open_if_unset(
        &self,
        id: &str,
        observed_at: DateTime<Utc>,
        client_ip: &str,
        client_user_agent: &str,
    ) -> Result<bool, StoreError>;

    async fn lookup(&self, id: &str) -> Result<TrackingRecord, StoreError>;
}

#[derive(Clone, Debug)]
pub struct SqliteTrackingStore {
    db_pool: Pool<Sqlite>,
}

impl SqliteTrackingStore {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        SqliteTrackingStore { db_pool }
    }

    /// Corre migraciones con sqlx
    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.db_pool).await?;
        Ok(())
    }
}

#[async_trait]
impl TrackingStore for SqliteTrackingStore {
    async fn create(
        &self,
        id: &str,
        recipient_email: &str,
        subject: &str,
        created_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO tracking (id, email, subject, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(id)
        .bind(recipient_email)
        .bind(subject)
        .bind(created_at.to_rfc3339())
        .execute(&self.db_pool)
        .await?;

        Ok(())
    }

    async fn record_open_if_unset(
        &self,
        id: &str,
        observed_at: DateTime<Utc>,
        client_ip: &str,
        client_user_agent: &str,
    ) -> Result<bool, StoreError> {
        // Un solo UPDATE condicional; SQLite serializa a los escritores.
        let result = sqlx::query(
            r#"
            UPDATE tracking
            SET opened_at = ?1,
                ip_address = ?2,
                user_agent = ?3
            WHERE id = ?4 AND opened_at IS NULL
            "#,
        )
        .bind(observed_at.to_rfc3339())
        .bind(client_ip)
        .bind(client_user_agent)
        .bind(id)
        .execute(&self.db_pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn lookup(&self, id: &str) -> Result<TrackingRecord, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, subject, created_at, opened_at, ip_address, user_agent
            FROM tracking
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_one(&self.db_pool)
        .await?;

        record_from_row(&row)
    }
}

fn record_from_row(row: &SqliteRow) -> Result<TrackingRecord, StoreError> {
    let created_at: String = row.try_get("created_at")?;
    let opened_at: Option<String> = row.try_get("opened_at")?;

    Ok(TrackingRecord {
        id: row.try_get("id")?,
        recipient_email: row.try_get("email")?,
        subject: row.try_get("subject")?,
        created_at: parse_timestamp(&created_at)?,
        opened_at: opened_at.as_deref().map(parse_timestamp).transpose()?,
        client_ip: row.try_get("ip_address")?,
        client_user_agent: row.try_get("user_agent")?,
    })
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    raw.parse::<DateTime<Utc>>()
        .map_err(|e| StoreError::StorageUnavailable(sqlx::Error::Decode(Box::new(e))))
}

#[cfg(test)]
pub use memory::MemoryTrackingStore;
