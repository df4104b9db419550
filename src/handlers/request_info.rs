//! handlers/request_info.rs
//! Datos del cliente y URL base a partir del request.

use std::net::SocketAddr;

use actix_web::{http::header, HttpRequest};

/// `{scheme}://{host}`. actix ya toma en cuenta TLS y X-Forwarded-Proto.
pub fn base_url(req: &HttpRequest) -> String {
    let conn = req.connection_info();
    format!("{}://{}", conn.scheme(), conn.host())
}

/// IP real del cliente (Forwarded / X-Forwarded-For o peer), sin puerto.
pub fn client_ip(req: &HttpRequest) -> String {
    let conn = req.connection_info();
    let raw = conn.realip_remote_addr().unwrap_or_default();
    match raw.parse::<SocketAddr>() {
        Ok(addr) => addr.ip().to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn user_agent(req: &HttpRequest) -> String {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
