//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod csv_service;
pub mod delivery_log_service;
pub mod message_service;
pub mod schedule_service;
pub mod session_service;
pub mod template_service;
