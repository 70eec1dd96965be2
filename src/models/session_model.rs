//! models/session_model.rs

use serde::Serialize;
use uuid::Uuid;

use crate::models::delivery_log_model::LogCounts;

#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionResponse {
    pub success: bool,
    pub session_id: Uuid,
}

/// Resumen para la sección Dashboard
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub customers: usize,
    pub drafts: usize,
    pub has_image: bool,
    pub log: LogCounts,
}
