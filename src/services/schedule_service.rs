//! services/schedule_service.rs
//! Validación de la programación y envío simulado.
//!
//! Orden de validación (se corta en el primer error):
//! 1) hay borradores  2) hay fecha y hora  3) fecha/hora parseables
//! 4) no está en el pasado  5) rama QR de WhatsApp  6) credenciales del canal
//!
//! El envío es simulado: todos los borradores quedan como `Success`.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::models::{
    delivery_log_model::{DeliveryLogEntry, DeliveryStatus},
    error_model::ValidationError,
    message_model::MessageDraft,
    schedule_model::{
        Channel, Credentials, QrCodeSpec, ScheduleOutcome, ScheduleRequest, WhatsappType,
    },
};

const WHATSAPP_DEEP_LINK: &str = "https://wa.me/?text=";

pub fn schedule_messages(
    drafts: &[MessageDraft],
    req: &ScheduleRequest,
    credentials: &Credentials,
    qr_size: u32,
    now: DateTime<Utc>,
) -> Result<ScheduleOutcome, ValidationError> {
    if drafts.is_empty() {
        return Err(ValidationError::NoMessagesGenerated);
    }

    let (date, time) = match (non_blank(&req.date), non_blank(&req.time)) {
        (Some(date), Some(time)) => (date, time),
        _ => return Err(ValidationError::MissingSchedule),
    };

    let scheduled_for = resolve_schedule(date, time, req.utc_offset_minutes)?;
    if scheduled_for < now {
        return Err(ValidationError::ScheduleInPast);
    }

    let whatsapp_type = req.whatsapp_type.unwrap_or_default();

    if req.channel == Channel::Whatsapp && whatsapp_type == WhatsappType::QrCode {
        // Solo el primer borrador va en el QR
        let content = drafts
            .first()
            .map(|d| d.content.as_str())
            .filter(|c| !c.is_empty())
            .ok_or(ValidationError::EmptyQrContent)?;
        log::info!(
            "(schedule_messages) Rama QR: se codifica el primer mensaje ({} chars)",
            content.len()
        );
        return Ok(ScheduleOutcome::QrCode(QrCodeSpec::new(
            whatsapp_deep_link(content),
            qr_size,
        )));
    }

    match req.channel {
        Channel::Whatsapp if !credentials.has_whatsapp() => {
            return Err(ValidationError::MissingCredentials(Channel::Whatsapp));
        }
        Channel::Email if !credentials.has_email() => {
            return Err(ValidationError::MissingCredentials(Channel::Email));
        }
        Channel::Sms => {
            log::warn!("(schedule_messages) Canal SMS sin verificación de credenciales");
        }
        _ => {}
    }

    let entries = drafts
        .iter()
        .map(|draft| DeliveryLogEntry {
            recipient: draft.recipient.recipient_label(),
            channel: req.channel,
            status: DeliveryStatus::Success,
            timestamp: now,
            scheduled_for,
        })
        .collect::<Vec<_>>();

    log::info!(
        "(schedule_messages) {} mensajes programados por {} para {}",
        entries.len(),
        req.channel.as_str(),
        scheduled_for.to_rfc3339()
    );
    Ok(ScheduleOutcome::Sent(entries))
}

/// https://wa.me/?text=<contenido urlencoded>
pub fn whatsapp_deep_link(content: &str) -> String {
    format!("{}{}", WHATSAPP_DEEP_LINK, urlencoding::encode(content))
}

/// Combina fecha (YYYY-MM-DD) y hora (HH:MM[:SS]) en un instante UTC.
/// Sin offset se interpreta en la zona local del servidor.
pub fn resolve_schedule(
    date: &str,
    time: &str,
    utc_offset_minutes: Option<i32>,
) -> Result<DateTime<Utc>, ValidationError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ValidationError::MalformedSchedule(format!("invalid date '{}'", date)))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| ValidationError::MalformedSchedule(format!("invalid time '{}'", time)))?;
    let naive = NaiveDateTime::new(date, time);

    match utc_offset_minutes {
        Some(minutes) => {
            let offset = minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .ok_or_else(|| {
                    ValidationError::MalformedSchedule(format!(
                        "invalid UTC offset {} minutes",
                        minutes
                    ))
                })?;
            offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| ValidationError::MalformedSchedule("invalid date/time".to_string()))
        }
        None => Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| {
                ValidationError::MalformedSchedule(format!(
                    "{} does not exist in the server time zone",
                    naive
                ))
            }),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
