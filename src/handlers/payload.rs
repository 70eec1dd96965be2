//! handlers/payload.rs
//! Lectura del body de una subida, por chunks y con límite de tamaño.

use actix_web::web;
use anyhow::{Context, Result};
use bytes::BytesMut;
use futures_util::StreamExt;

use crate::models::error_model::ValidationError;

/// Lee todo el body. Si supera `limit` devuelve `ValidationError::FileTooLarge`
/// (envuelto en anyhow).
pub async fn read_payload(mut payload: web::Payload, limit: usize) -> Result<BytesMut> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.context("Fallo leyendo el body de la subida")?;
        if body.len() + chunk.len() > limit {
            return Err(ValidationError::FileTooLarge { limit }.into());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
