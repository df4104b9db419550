//! errors.rs
//! Errores del almacén de seguimiento.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// No existe registro para ese id. Es un resultado esperado, no un fallo.
    #[error("Tracking ID not found")]
    NotFound,

    #[error("Tracking ID already exists")]
    DuplicateKey,

    #[error("Storage unavailable")]
    StorageUnavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateKey
            }
            other => StoreError::StorageUnavailable(other),
        }
    }
}
