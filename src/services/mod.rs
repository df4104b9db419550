//! services/mod.rs
//! Módulo que agrupa los "servicios" o capas de negocio de la app.

pub mod id_generator;
pub mod pixel;
pub mod status_projector;
pub mod tracking_service;
pub mod tracking_store;
