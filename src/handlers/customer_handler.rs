//! handlers/customer_handler.rs
//! Subida del CSV de clientes y listado para la tabla.

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::{
    config::app_config::AppConfig,
    handlers::{
        payload::read_payload,
        response::{session_not_found, upload_error, validation_error},
    },
    models::{
        customer_model::{CustomerUploadResponse, CustomersResponse},
        error_model::ValidationError,
    },
    services::{
        csv_service::{csv_headers, parse_csv},
        session_service::{SessionService, UploadKind},
    },
};

/// POST /api/sessions/{id}/customers
/// Body: el CSV crudo. Solo se acepta Content-Type "text/csv"
/// (no se inspecciona el contenido).
pub async fn upload_customers_endpoint(
    req: HttpRequest,
    payload: web::Payload,
    path: web::Path<Uuid>,
    sessions: web::Data<SessionService>,
    config: web::Data<AppConfig>,
) -> HttpResponse {
    let id = path.into_inner();

    let ticket = match sessions
        .with_session_mut(&id, |s| s.begin_upload(UploadKind::Customers))
        .await
    {
        Some(ticket) => ticket,
        None => return session_not_found(&id),
    };

    if !req.content_type().eq_ignore_ascii_case("text/csv") {
        log::info!(
            "(upload_customers) Tipo de archivo rechazado: '{}'",
            req.content_type()
        );
        sessions
            .with_session_mut(&id, |s| s.reject_customers(ticket))
            .await;
        return validation_error(&ValidationError::InvalidCsvFile);
    }

    let body = match read_payload(payload, config.max_upload_bytes).await {
        Ok(body) => body,
        Err(e) => return upload_error(e),
    };

    let text = String::from_utf8_lossy(&body);
    let headers = csv_headers(&text);
    let customers = parse_csv(&text);
    let count = customers.len();

    let commit = sessions
        .with_session_mut(&id, |s| {
            s.commit_customers(ticket, headers.clone(), customers)
        })
        .await;

    match commit {
        Some(commit) => {
            log::info!(
                "(upload_customers) session={} clientes={} columnas={:?} stale={}",
                id,
                count,
                headers,
                commit.is_stale()
            );
            HttpResponse::Ok().json(CustomerUploadResponse {
                success: true,
                headers,
                count,
                stale: commit.is_stale(),
            })
        }
        None => session_not_found(&id),
    }
}

/// GET /api/sessions/{id}/customers
pub async fn list_customers_endpoint(
    path: web::Path<Uuid>,
    sessions: web::Data<SessionService>,
) -> HttpResponse {
    let id = path.into_inner();
    let listing = sessions
        .with_session(&id, |s| CustomersResponse {
            success: true,
            headers: s.headers().to_vec(),
            customers: s.customers().to_vec(),
        })
        .await;

    match listing {
        Some(listing) => HttpResponse::Ok().json(listing),
        None => session_not_found(&id),
    }
}
