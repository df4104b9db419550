//! services/status_projector.rs
//! Estado de presentación derivado de un registro, sin modificarlo.

use serde::Serialize;

use crate::models::tracking_model::TrackingRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingStatus {
    Pending,
    Opened,
}

impl TrackingStatus {
    pub fn of(record: &TrackingRecord) -> Self {
        if record.opened_at.is_some() {
            TrackingStatus::Opened
        } else {
            TrackingStatus::Pending
        }
    }

    /// Clase CSS que usa la vista de estadísticas
    pub fn css_class(&self) -> &'static str {
        match self {
            TrackingStatus::Pending => "pending",
            TrackingStatus::Opened => "opened",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            TrackingStatus::Pending => "Email has not been opened yet.",
            TrackingStatus::Opened => "Email has been opened!",
        }
    }
}
