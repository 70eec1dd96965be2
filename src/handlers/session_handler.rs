//! handlers/session_handler.rs
use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::handlers::response::session_not_found;
use crate::models::session_model::CreateSessionResponse;
use crate::services::session_service::SessionService;

/// POST /api/sessions
pub async fn create_session_endpoint(sessions: web::Data<SessionService>) -> HttpResponse {
    let session_id = sessions.create_session().await;
    HttpResponse::Ok().json(CreateSessionResponse {
        success: true,
        session_id,
    })
}

/// GET /api/sessions/{id}
pub async fn session_summary_endpoint(
    sessions: web::Data<SessionService>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();
    match sessions.with_session(&id, |s| s.summary()).await {
        Some(summary) => HttpResponse::Ok().json(summary),
        None => session_not_found(&id),
    }
}

/// DELETE /api/sessions/{id}
pub async fn delete_session_endpoint(
    sessions: web::Data<SessionService>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();
    if sessions.remove_session(&id).await {
        HttpResponse::Ok().json(json!({ "success": true }))
    } else {
        session_not_found(&id)
    }
}
