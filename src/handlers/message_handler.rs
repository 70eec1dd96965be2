//! handlers/message_handler.rs
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::{
    handlers::response::{session_not_found, validation_error},
    models::{error_model::ValidationError, message_model::GenerateMessagesRequest},
    services::session_service::SessionService,
};

/// POST /api/sessions/{id}/messages
/// Genera los borradores y devuelve la vista previa.
pub async fn generate_messages_endpoint(
    path: web::Path<Uuid>,
    sessions: web::Data<SessionService>,
    body: web::Json<GenerateMessagesRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    let template = body.into_inner().template;

    let result = sessions
        .with_session_mut(&id, |s| -> Result<_, ValidationError> {
            s.generate(&template)?;
            Ok(s.preview())
        })
        .await;

    match result {
        Some(Ok(preview)) => {
            log::info!(
                "(generate_messages) session={} borradores={}",
                id,
                preview.count
            );
            HttpResponse::Ok().json(preview)
        }
        Some(Err(e)) => validation_error(&e),
        None => session_not_found(&id),
    }
}

/// GET /api/sessions/{id}/messages
pub async fn preview_messages_endpoint(
    path: web::Path<Uuid>,
    sessions: web::Data<SessionService>,
) -> HttpResponse {
    let id = path.into_inner();
    match sessions.with_session(&id, |s| s.preview()).await {
        Some(preview) => HttpResponse::Ok().json(preview),
        None => session_not_found(&id),
    }
}
