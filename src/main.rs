use std::time::{Duration, Instant};

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use crate::config::app_config::AppConfig;
use crate::logger::{access_logger, init_logger};
use crate::services::session_service::SessionService;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuración inválida: {:?}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                e.to_string(),
            ));
        }
    };

    if !config.public_dir.is_dir() {
        log::warn!(
            "No existe la carpeta pública {:?}; solo se servirá la API",
            config.public_dir
        );
    }

    // Todas las sesiones viven en memoria; las inactivas se descartan
    let session_service = SessionService::with_idle_ttl(config.session_ttl());
    if config.session_ttl_secs > 0 {
        spawn_session_sweeper(session_service.clone(), config.session_ttl());
    }

    let bind = (config.host.clone(), config.port);
    let workers = config.workers;
    log::info!("Levantando servidor en {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let public_dir = config.public_dir.clone();
        App::new()
            .wrap(access_logger())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(session_service.clone()))
            .configure(app::init_app)
            .configure(|cfg| app::init_static(cfg, &public_dir))
    })
    .workers(workers)
    .bind(bind)?
    .run()
    .await
}

/// Barre las sesiones inactivas cada `ttl` (como máximo cada minuto),
/// aunque nadie cree sesiones nuevas.
fn spawn_session_sweeper(sessions: SessionService, ttl: Duration) {
    let every = ttl.min(Duration::from_secs(60));
    actix_rt::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            sessions.evict_idle(Instant::now()).await;
        }
    });
}
