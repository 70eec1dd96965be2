//! handlers/image_handler.rs
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::{
    config::app_config::AppConfig,
    handlers::{
        payload::read_payload,
        response::{session_not_found, upload_error, validation_error},
    },
    models::{
        error_model::ValidationError,
        message_model::{ImageAttachment, ImageUploadResponse},
    },
    services::session_service::{SessionService, UploadKind},
};

/// POST /api/sessions/{id}/image
/// Body: la imagen cruda (Content-Type image/*). Un body vacío quita la imagen.
pub async fn upload_image_endpoint(
    req: HttpRequest,
    payload: web::Payload,
    path: web::Path<Uuid>,
    sessions: web::Data<SessionService>,
    config: web::Data<AppConfig>,
) -> HttpResponse {
    let id = path.into_inner();

    let ticket = match sessions
        .with_session_mut(&id, |s| s.begin_upload(UploadKind::Image))
        .await
    {
        Some(ticket) => ticket,
        None => return session_not_found(&id),
    };

    let body = match read_payload(payload, config.max_upload_bytes).await {
        Ok(body) => body,
        Err(e) => return upload_error(e),
    };

    let image = if body.is_empty() {
        None
    } else {
        let content_type = req.content_type().to_ascii_lowercase();
        if !content_type.starts_with("image/") {
            return validation_error(&ValidationError::InvalidImageFile);
        }
        Some(ImageAttachment::from_bytes(&content_type, &body))
    };

    let content_type = image.as_ref().map(|img| img.content_type.clone());
    let size = body.len();

    match sessions
        .with_session_mut(&id, |s| s.commit_image(ticket, image))
        .await
    {
        Some(commit) => {
            log::info!(
                "(upload_image) session={} tipo={:?} bytes={} stale={}",
                id,
                content_type,
                size,
                commit.is_stale()
            );
            HttpResponse::Ok().json(ImageUploadResponse {
                success: true,
                content_type,
                size,
                stale: commit.is_stale(),
            })
        }
        None => session_not_found(&id),
    }
}
