//! models/error_model.rs
//! Errores de validación que ve el usuario. El `Display` de cada variante
//! es el mensaje que muestra el dashboard.

use thiserror::Error;

use crate::models::schedule_model::Channel;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a valid CSV file.")]
    InvalidCsvFile,

    #[error("Please upload a valid image file.")]
    InvalidImageFile,

    #[error("File too large: the limit is {limit} bytes.")]
    FileTooLarge { limit: usize },

    #[error("Please upload customer data first.")]
    NoCustomerData,

    #[error("Please write a message to send.")]
    EmptyTemplate,

    #[error("Please generate messages first.")]
    NoMessagesGenerated,

    #[error("Please select a date and time.")]
    MissingSchedule,

    #[error("Invalid schedule: {0}")]
    MalformedSchedule(String),

    #[error("Cannot schedule messages in the past.")]
    ScheduleInPast,

    #[error("No message content available to generate a QR code.")]
    EmptyQrContent,

    #[error("Please enter {} API credentials in the settings.", .0.display_name())]
    MissingCredentials(Channel),
}
