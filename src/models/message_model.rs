//! models/message_model.rs
//! Borradores de mensaje (uno por destinatario) y la vista previa.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::customer_model::CustomerRecord;

/// Imagen subida, guardada como data URI (data:<mime>;base64,<...>)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageAttachment {
    pub content_type: String,
    pub size: usize,
    pub data_uri: String,
}

impl ImageAttachment {
    pub fn from_bytes(content_type: &str, data: &[u8]) -> Self {
        Self {
            content_type: content_type.to_string(),
            size: data.len(),
            data_uri: format!("data:{};base64,{}", content_type, base64::encode(data)),
        }
    }
}

/// Mensaje personalizado, todavía sin enviar.
/// La imagen es la misma referencia para todo el lote.
#[derive(Debug, Clone, Serialize)]
pub struct MessageDraft {
    pub recipient: CustomerRecord,
    pub content: String,
    pub image: Option<Arc<ImageAttachment>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateMessagesRequest {
    pub template: String,
}

/// Una tarjeta de la vista previa
#[derive(Debug, Clone, Serialize)]
pub struct MessagePreview {
    pub to: String,
    pub content: String,
    pub image: Option<String>,
}

/// POST/GET /api/sessions/{id}/messages
#[derive(Debug, Clone, Serialize)]
pub struct PreviewResponse {
    pub success: bool,
    pub count: usize,
    /// Placeholders del template sin columna en el CSV
    pub unknown_placeholders: Vec<String>,
    pub messages: Vec<MessagePreview>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUploadResponse {
    pub success: bool,
    pub content_type: Option<String>,
    pub size: usize,
    pub stale: bool,
}
