//! models/schedule_model.rs
//! Canales, credenciales y request/resultado de la programación de envíos.

use serde::{Deserialize, Serialize};

use crate::models::delivery_log_model::DeliveryLogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Whatsapp,
    Email,
    Sms,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Whatsapp => "whatsapp",
            Channel::Email => "email",
            Channel::Sms => "sms",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::Whatsapp => "WhatsApp",
            Channel::Email => "Email",
            Channel::Sms => "SMS",
        }
    }
}

/// Solo aplica a WhatsApp: API del proveedor o link escaneable (QR)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhatsappType {
    #[default]
    Api,
    QrCode,
}

/// Credenciales por canal, tal cual las escribe el usuario en Settings.
/// Solo se valida que estén presentes (no vacías).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    pub whatsapp_api_token: Option<String>,
    pub whatsapp_phone_number_id: Option<String>,
    pub email_api_key: Option<String>,
    pub email_sender: Option<String>,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |v| !v.is_empty())
}

impl Credentials {
    pub fn has_whatsapp(&self) -> bool {
        present(&self.whatsapp_api_token) && present(&self.whatsapp_phone_number_id)
    }

    pub fn has_email(&self) -> bool {
        present(&self.email_api_key) && present(&self.email_sender)
    }

    pub fn status(&self) -> CredentialsStatus {
        CredentialsStatus {
            whatsapp_api_token: present(&self.whatsapp_api_token),
            whatsapp_phone_number_id: present(&self.whatsapp_phone_number_id),
            email_api_key: present(&self.email_api_key),
            email_sender: present(&self.email_sender),
        }
    }
}

/// GET /api/sessions/{id}/settings: qué credenciales hay, sin devolverlas
#[derive(Debug, Clone, Serialize)]
pub struct CredentialsStatus {
    pub whatsapp_api_token: bool,
    pub whatsapp_phone_number_id: bool,
    pub email_api_key: bool,
    pub email_sender: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRequest {
    pub channel: Channel,
    pub whatsapp_type: Option<WhatsappType>,
    /// YYYY-MM-DD
    pub date: Option<String>,
    /// HH:MM o HH:MM:SS
    pub time: Option<String>,
    /// Offset del navegador, en minutos al este de UTC
    pub utc_offset_minutes: Option<i32>,
}

/// Lo que necesita el renderer de QR del cliente
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QrCodeSpec {
    pub text: String,
    pub width: u32,
    pub height: u32,
    pub color_dark: String,
    pub color_light: String,
    pub correct_level: String,
}

impl QrCodeSpec {
    pub fn new(text: String, size: u32) -> Self {
        Self {
            text,
            width: size,
            height: size,
            color_dark: "#000000".to_string(),
            color_light: "#ffffff".to_string(),
            correct_level: "H".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ScheduleOutcome {
    /// Envío simulado: una entrada por borrador
    Sent(Vec<DeliveryLogEntry>),
    /// Rama QR: no toca credenciales ni el log
    QrCode(QrCodeSpec),
}

/// POST /api/sessions/{id}/schedule
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub success: bool,
    pub message: String,
    pub entries: Vec<DeliveryLogEntry>,
    pub qr_code: Option<QrCodeSpec>,
}
