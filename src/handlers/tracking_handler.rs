//! handlers/tracking_handler.rs
//! Endpoints para crear pixeles y consultar su estado.

use actix_web::error::{InternalError, UrlencodedError};
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::errors::StoreError;
use crate::handlers::request_info::base_url;
use crate::models::tracking_model::{
    CreateTrackingRequest, CreateTrackingResponse, TrackingStatsResponse,
};
use crate::services::tracking_service::TrackingService;

/// POST /create (form: email, subject)
pub async fn create_tracking_endpoint(
    tracking_service: web::Data<TrackingService>,
    req: HttpRequest,
    form: web::Form<CreateTrackingRequest>,
) -> HttpResponse {
    let form = form.into_inner();
    if !form.is_valid() {
        return missing_fields_response();
    }

    match tracking_service
        .create_tracking(&form.email, &form.subject)
        .await
    {
        Ok(record) => {
            HttpResponse::Ok().json(CreateTrackingResponse::build(&record, &base_url(&req)))
        }
        Err(e) => {
            log::error!("Database error: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to create tracking record"
            }))
        }
    }
}

/// Un body que no es formulario (vacío, JSON, ...) recibe el mismo 400 que
/// un formulario incompleto.
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Formulario inválido en /create: {}", err);
    InternalError::from_response(err, missing_fields_response()).into()
}

fn missing_fields_response() -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "error": "Email and subject are required"
    }))
}

/// GET /stats/{id}
pub async fn stats_endpoint(
    tracking_service: web::Data<TrackingService>,
    path: web::Path<String>,
) -> HttpResponse {
    let tracking_id = path.into_inner();

    match tracking_service.get_stats(&tracking_id).await {
        Ok((record, status)) => HttpResponse::Ok().json(TrackingStatsResponse {
            status,
            status_class: status.css_class().to_string(),
            message: status.message().to_string(),
            data: record,
        }),
        Err(e) => lookup_error_response(&tracking_id, e),
    }
}

/// GET /api/tracking/{id}
pub async fn api_tracking_endpoint(
    tracking_service: web::Data<TrackingService>,
    path: web::Path<String>,
) -> HttpResponse {
    let tracking_id = path.into_inner();

    match tracking_service.get_status(&tracking_id).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => lookup_error_response(&tracking_id, e),
    }
}

fn lookup_error_response(tracking_id: &str, e: StoreError) -> HttpResponse {
    match e {
        StoreError::NotFound => HttpResponse::NotFound().json(json!({
            "error": "Tracking ID not found"
        })),
        other => {
            log::error!("Database error consultando {}: {}", tracking_id, other);
            HttpResponse::InternalServerError().json(json!({
                "error": "Database error"
            }))
        }
    }
}
