//! handlers/mod.rs
//! Módulo que agrupa los distintos handlers (sesión, clientes, mensajes, envío).
pub mod customer_handler;
pub mod image_handler;
pub mod message_handler;
pub mod payload;
pub mod response;
pub mod schedule_handler;
pub mod session_handler;
pub mod settings_handler;
