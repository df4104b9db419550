//! handlers/mod.rs
pub mod pixel_handler;
pub mod request_info;
pub mod tracking_handler;
