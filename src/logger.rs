//! logger.rs
//! Logger de la aplicación (env_logger) y log de acceso HTTP de actix.

use actix_web::middleware::Logger;

/// Filtro si RUST_LOG no está definido. El arranque de actix-server
/// queda en warn; el log de acceso sale por `actix_web::middleware::logger`.
const DEFAULT_FILTER: &str = "info,actix_server=warn";

/// ip, línea de la request, status, bytes de respuesta y duración
const ACCESS_LOG_FORMAT: &str = "%a \"%r\" %s %b %Dms";

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_secs()
        .init();
}

/// Una línea por request. Nunca incluye el body: los CSV traen datos
/// personales de los clientes.
pub fn access_logger() -> Logger {
    Logger::new(ACCESS_LOG_FORMAT)
}
