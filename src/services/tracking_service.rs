//! services/tracking_service.rs
//! Lógica de negocio: crear pixeles, registrar aperturas y consultar estado.

use std::sync::Arc;

use chrono::Utc;

use crate::errors::StoreError;
use crate::models::tracking_model::TrackingRecord;
use crate::services::id_generator::new_tracking_id;
use crate::services::status_projector::TrackingStatus;
use crate::services::tracking_store::TrackingStore;

#[derive(Clone)]
pub struct TrackingService {
    store: Arc<dyn TrackingStore>,
}

impl TrackingService {
    pub fn new(store: Arc<dyn TrackingStore>) -> Self {
        TrackingService { store }
    }

    /// Genera un id nuevo y guarda el registro con `opened_at` vacío.
    pub async fn create_tracking(
        &self,
        recipient_email: &str,
        subject: &str,
    ) -> Result<TrackingRecord, StoreError> {
        let id = new_tracking_id();
        let created_at = Utc::now();

        self.store
            .create(&id, recipient_email, subject, created_at)
            .await?;

        log::debug!("Pixel {} creado para {}", id, recipient_email);
        Ok(TrackingRecord::new(
            id,
            recipient_email.to_string(),
            subject.to_string(),
            created_at,
        ))
    }

    /// Registra la primera apertura. Ids desconocidos o ya abiertos no son error.
    pub async fn record_open(
        &self,
        id: &str,
        client_ip: &str,
        user_agent: &str,
    ) -> Result<bool, StoreError> {
        let applied = self
            .store
            .record_open_if_unset(id, Utc::now(), client_ip, user_agent)
            .await?;

        if applied {
            log::info!("Pixel {} abierto desde {}", id, client_ip);
        }
        Ok(applied)
    }

    pub async fn get_status(&self, id: &str) -> Result<TrackingRecord, StoreError> {
        self.store.lookup(id).await
    }

    /// Registro junto con su estado de presentación
    pub async fn get_stats(
        &self,
        id: &str,
    ) -> Result<(TrackingRecord, TrackingStatus), StoreError> {
        let record = self.store.lookup(id).await?;
        let status = TrackingStatus::of(&record);
        Ok((record, status))
    }
}
