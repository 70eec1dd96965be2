//! config/app_config.rs
//! Configuración global del servidor (puerto, carpeta pública, límites, QR).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Tamaño máximo por defecto de un archivo subido (5 MiB)
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Inactividad máxima de una sesión antes de descartarla (1 hora)
const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60;

/// Configuración del servidor, con valores por defecto.
/// Se sobreescribe con variables de entorno (o un .env cargado con dotenv).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Carpeta con el dashboard (index.html, css, js)
    pub public_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub workers: usize,
    /// Ancho/alto del QR que dibuja el cliente
    pub qr_size: u32,
    /// Segundos sin accesos tras los cuales se descarta una sesión; 0 = nunca
    pub session_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_dir: PathBuf::from("./public"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            workers: 1,
            qr_size: 256,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl AppConfig {
    /// Lee HOST, PORT, PUBLIC_DIR, MAX_UPLOAD_BYTES, WORKERS, QR_SIZE y
    /// SESSION_TTL_SECS.
    pub fn from_env() -> Result<Self> {
        let defaults = AppConfig::default();

        Ok(AppConfig {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            workers: parse_var("WORKERS", defaults.workers)?,
            qr_size: parse_var("QR_SIZE", defaults.qr_size)?,
            session_ttl_secs: parse_var("SESSION_TTL_SECS", defaults.session_ttl_secs)?,
        })
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Valor inválido para {}: '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}
