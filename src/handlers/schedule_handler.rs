//! handlers/schedule_handler.rs
//! Programación (envío simulado / QR) y log de envíos.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::app_config::AppConfig,
    handlers::response::{session_not_found, validation_error},
    models::{
        delivery_log_model::LogResponse,
        schedule_model::{ScheduleOutcome, ScheduleRequest, ScheduleResponse},
    },
    services::session_service::SessionService,
};

/// POST /api/sessions/{id}/schedule
pub async fn schedule_endpoint(
    path: web::Path<Uuid>,
    sessions: web::Data<SessionService>,
    config: web::Data<AppConfig>,
    body: web::Json<ScheduleRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    let req = body.into_inner();
    log::info!(
        "(schedule) session={} canal={} tipo={:?} fecha={:?} hora={:?}",
        id,
        req.channel.as_str(),
        req.whatsapp_type,
        req.date,
        req.time
    );

    let result = sessions
        .with_session_mut(&id, |s| s.schedule(&req, config.qr_size, Utc::now()))
        .await;

    match result {
        Some(Ok(ScheduleOutcome::Sent(entries))) => HttpResponse::Ok().json(ScheduleResponse {
            success: true,
            message: "Messages have been successfully scheduled.".to_string(),
            entries,
            qr_code: None,
        }),
        Some(Ok(ScheduleOutcome::QrCode(qr))) => HttpResponse::Ok().json(ScheduleResponse {
            success: true,
            message: "Scan the QR code to send the message.".to_string(),
            entries: vec![],
            qr_code: Some(qr),
        }),
        Some(Err(e)) => validation_error(&e),
        None => session_not_found(&id),
    }
}

/// GET /api/sessions/{id}/log
pub async fn log_endpoint(
    path: web::Path<Uuid>,
    sessions: web::Data<SessionService>,
) -> HttpResponse {
    let id = path.into_inner();
    let log = sessions
        .with_session(&id, |s| LogResponse {
            success: true,
            counts: s.log().counts(),
            entries: s.log().all().to_vec(),
        })
        .await;

    match log {
        Some(log) => HttpResponse::Ok().json(log),
        None => session_not_found(&id),
    }
}
