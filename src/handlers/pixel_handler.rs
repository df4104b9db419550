//! handlers/pixel_handler.rs
//! Endpoint del pixel: registra la apertura y devuelve el GIF.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::handlers::request_info::{client_ip, user_agent};
use crate::services::pixel::{transparent_pixel, PIXEL_CONTENT_TYPE};
use crate::services::tracking_service::TrackingService;

/// GET /pixel/{id}
///
/// Siempre responde con el pixel: un id desconocido, una apertura repetida
/// o un fallo de la DB no deben romper la imagen en el cliente de correo.
pub async fn pixel_endpoint(
    tracking_service: web::Data<TrackingService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let tracking_id = path.into_inner();
    let ip = client_ip(&req);
    let ua = user_agent(&req);

    if let Err(e) = tracking_service.record_open(&tracking_id, &ip, &ua).await {
        log::error!("Fallo al actualizar tracking {}: {}", tracking_id, e);
    }

    HttpResponse::Ok()
        .content_type(PIXEL_CONTENT_TYPE)
        .append_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .append_header(("Pragma", "no-cache"))
        .append_header(("Expires", "0"))
        .body(transparent_pixel())
}
