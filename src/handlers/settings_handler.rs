//! handlers/settings_handler.rs
//! Credenciales por canal (sección Settings). Nunca se devuelven los valores.

use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::{
    handlers::response::session_not_found, models::schedule_model::Credentials,
    services::session_service::SessionService,
};

/// PUT /api/sessions/{id}/settings
pub async fn update_settings_endpoint(
    path: web::Path<Uuid>,
    sessions: web::Data<SessionService>,
    body: web::Json<Credentials>,
) -> HttpResponse {
    let id = path.into_inner();
    let credentials = body.into_inner();

    let status = sessions
        .with_session_mut(&id, |s| {
            s.set_credentials(credentials);
            s.credentials().status()
        })
        .await;

    match status {
        Some(status) => HttpResponse::Ok().json(json!({
            "success": true,
            "credentials": status
        })),
        None => session_not_found(&id),
    }
}

/// GET /api/sessions/{id}/settings
pub async fn get_settings_endpoint(
    path: web::Path<Uuid>,
    sessions: web::Data<SessionService>,
) -> HttpResponse {
    let id = path.into_inner();
    match sessions
        .with_session(&id, |s| s.credentials().status())
        .await
    {
        Some(status) => HttpResponse::Ok().json(json!({
            "success": true,
            "credentials": status
        })),
        None => session_not_found(&id),
    }
}
