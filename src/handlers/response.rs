//! handlers/response.rs
//! Respuestas de error comunes a todos los endpoints.

use actix_web::HttpResponse;
use serde_json::json;
use uuid::Uuid;

use crate::models::error_model::ValidationError;

/// 400 con el mensaje que se le muestra al usuario
pub fn validation_error(e: &ValidationError) -> HttpResponse {
    log::warn!("Validación fallida: {}", e);
    HttpResponse::BadRequest().json(json!({
        "success": false,
        "error": e.to_string()
    }))
}

pub fn session_not_found(id: &Uuid) -> HttpResponse {
    log::warn!("Sesión no encontrada: {}", id);
    HttpResponse::NotFound().json(json!({
        "success": false,
        "error": "Session not found"
    }))
}

/// Los errores de validación van como 400, el resto como 500
pub fn upload_error(e: anyhow::Error) -> HttpResponse {
    match e.downcast_ref::<ValidationError>() {
        Some(validation) => validation_error(validation),
        None => {
            log::error!("Error leyendo el archivo subido: {:?}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": format!("Upload failed: {}", e)
            }))
        }
    }
}
