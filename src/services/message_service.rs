//! services/message_service.rs
//! Genera un borrador por cliente a partir del template.

use std::sync::Arc;

use crate::{
    models::{
        customer_model::CustomerRecord,
        error_model::ValidationError,
        message_model::{ImageAttachment, MessageDraft},
    },
    services::template_service::render,
};

/// Un borrador por registro, mismo orden. Todos comparten la misma imagen.
pub fn generate_messages(
    records: &[CustomerRecord],
    template: &str,
    image: Option<&Arc<ImageAttachment>>,
) -> Result<Vec<MessageDraft>, ValidationError> {
    if records.is_empty() {
        return Err(ValidationError::NoCustomerData);
    }
    if template.trim().is_empty() {
        return Err(ValidationError::EmptyTemplate);
    }

    let drafts = records
        .iter()
        .map(|record| MessageDraft {
            recipient: record.clone(),
            content: render(template, record),
            image: image.cloned(),
        })
        .collect();

    Ok(drafts)
}
