//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod customer_model;
pub mod delivery_log_model;
pub mod error_model;
pub mod message_model;
pub mod schedule_model;
pub mod session_model;
