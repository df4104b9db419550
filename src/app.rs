//! app.rs
use crate::handlers::{pixel_handler, tracking_handler};
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default().error_handler(tracking_handler::form_error_handler),
    )
    .route(
        "/create",
        web::post().to(tracking_handler::create_tracking_endpoint),
    )
    .route("/pixel/{id}", web::get().to(pixel_handler::pixel_endpoint))
    .route("/stats/{id}", web::get().to(tracking_handler::stats_endpoint))
    .service(
        web::scope("/api").route(
            "/tracking/{id}",
            web::get().to(tracking_handler::api_tracking_endpoint),
        ),
    );
}
