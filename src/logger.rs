//! logger.rs
//! Configuración del logger usando env_logger.

/// RUST_LOG tiene prioridad; si no está, se usa `default_level`.
pub fn init_logger(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .init();
}
