//! models/tracking_model.rs
//! Estructuras del registro de seguimiento y de los requests/responses HTTP.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::status_projector::TrackingStatus;

/// Un pixel de seguimiento asociado a un email enviado.
///
/// `opened_at`, `client_ip` y `client_user_agent` quedan en `None` hasta la
/// primera descarga del pixel y se escriben una sola vez, juntos.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingRecord {
    pub id: String,
    #[serde(rename = "email")]
    pub recipient_email: String,
    pub subject: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_at: Option<DateTime<Utc>>,
    #[serde(rename = "ip_address", skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(rename = "user_agent", skip_serializing_if = "Option::is_none")]
    pub client_user_agent: Option<String>,
}

impl TrackingRecord {
    /// Registro recién creado, todavía sin abrir.
    pub fn new(
        id: String,
        recipient_email: String,
        subject: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        TrackingRecord {
            id,
            recipient_email,
            subject,
            created_at,
            opened_at: None,
            client_ip: None,
            client_user_agent: None,
        }
    }
}

/// Formulario de POST /create
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrackingRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
}

impl CreateTrackingRequest {
    /// Ambos campos son obligatorios (sin contar espacios).
    pub fn is_valid(&self) -> bool {
        !self.email.trim().is_empty() && !self.subject.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTrackingResponse {
    pub tracking_id: String,
    pub email: String,
    pub subject: String,
    pub base_url: String,
    pub pixel_url: String,
    pub html_code: String,
    pub stats_url: String,
}

impl CreateTrackingResponse {
    pub fn build(record: &TrackingRecord, base_url: &str) -> Self {
        let pixel_url = format!("{}/pixel/{}", base_url, record.id);
        let html_code = format!(r#"<img src="{pixel_url}" width="1" height="1" alt="" />"#);
        let stats_url = format!("{}/stats/{}", base_url, record.id);

        CreateTrackingResponse {
            tracking_id: record.id.clone(),
            email: record.recipient_email.clone(),
            subject: record.subject.clone(),
            base_url: base_url.to_string(),
            pixel_url,
            html_code,
            stats_url,
        }
    }
}

/// Respuesta de GET /stats/{id}
#[derive(Debug, Clone, Serialize)]
pub struct TrackingStatsResponse {
    pub status: TrackingStatus,
    pub status_class: String,
    pub message: String,
    pub data: TrackingRecord,
}
