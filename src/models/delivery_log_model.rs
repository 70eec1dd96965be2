//! models/delivery_log_model.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::schedule_model::Channel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeliveryStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryLogEntry {
    pub recipient: String,
    pub channel: Channel,
    pub status: DeliveryStatus,
    pub timestamp: DateTime<Utc>,
    pub scheduled_for: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LogCounts {
    pub success: usize,
    pub failure: usize,
}

/// GET /api/sessions/{id}/log
#[derive(Debug, Clone, Serialize)]
pub struct LogResponse {
    pub success: bool,
    pub counts: LogCounts,
    pub entries: Vec<DeliveryLogEntry>,
}
