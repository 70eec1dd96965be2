//! services/session_service.rs
//! Estado de cada sesión del dashboard (clientes, borradores, imagen,
//! credenciales y log) y el mapa compartido de sesiones.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    models::{
        customer_model::CustomerRecord,
        error_model::ValidationError,
        message_model::{ImageAttachment, MessageDraft, MessagePreview, PreviewResponse},
        schedule_model::{Credentials, ScheduleOutcome, ScheduleRequest},
        session_model::SessionSummary,
    },
    services::{
        delivery_log_service::DeliveryLog, message_service::generate_messages,
        schedule_service::schedule_messages, template_service::unknown_placeholders,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Customers,
    Image,
}

/// Número de secuencia de una subida. Solo la última de cada tipo
/// puede aplicar su resultado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    pub session_id: Uuid,
    pub kind: UploadKind,
    seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadCommit {
    Applied,
    /// Llegó otra subida después; el resultado se ignora
    Stale,
}

impl UploadCommit {
    pub fn is_stale(&self) -> bool {
        matches!(self, UploadCommit::Stale)
    }
}

#[derive(Debug)]
pub struct SessionContext {
    id: Uuid,
    headers: Vec<String>,
    customers: Vec<CustomerRecord>,
    drafts: Vec<MessageDraft>,
    template: Option<String>,
    /// Columnas con las que se generaron los borradores actuales
    template_headers: Vec<String>,
    image: Option<Arc<ImageAttachment>>,
    credentials: Credentials,
    log: DeliveryLog,
    customer_upload_seq: u64,
    image_upload_seq: u64,
    last_access: Instant,
}

impl SessionContext {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            headers: vec![],
            customers: vec![],
            drafts: vec![],
            template: None,
            template_headers: vec![],
            image: None,
            credentials: Credentials::default(),
            log: DeliveryLog::default(),
            customer_upload_seq: 0,
            image_upload_seq: 0,
            last_access: Instant::now(),
        }
    }

    fn is_idle(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_access) > ttl
    }

    // ----------------------------------------------------------------
    // Subidas (CSV / imagen)
    // ----------------------------------------------------------------

    pub fn begin_upload(&mut self, kind: UploadKind) -> UploadTicket {
        let seq = match kind {
            UploadKind::Customers => {
                self.customer_upload_seq += 1;
                self.customer_upload_seq
            }
            UploadKind::Image => {
                self.image_upload_seq += 1;
                self.image_upload_seq
            }
        };
        UploadTicket {
            session_id: self.id,
            kind,
            seq,
        }
    }

    pub fn is_current(&self, ticket: &UploadTicket) -> bool {
        let latest = match ticket.kind {
            UploadKind::Customers => self.customer_upload_seq,
            UploadKind::Image => self.image_upload_seq,
        };
        ticket.session_id == self.id && ticket.seq == latest
    }

    /// Reemplaza la lista de clientes completa
    pub fn commit_customers(
        &mut self,
        ticket: UploadTicket,
        headers: Vec<String>,
        customers: Vec<CustomerRecord>,
    ) -> UploadCommit {
        if ticket.kind != UploadKind::Customers || !self.is_current(&ticket) {
            return UploadCommit::Stale;
        }
        self.headers = headers;
        self.customers = customers;
        UploadCommit::Applied
    }

    /// Archivo que no es CSV: se vacía la lista de clientes
    pub fn reject_customers(&mut self, ticket: UploadTicket) -> UploadCommit {
        self.commit_customers(ticket, vec![], vec![])
    }

    /// `None` quita la imagen
    pub fn commit_image(
        &mut self,
        ticket: UploadTicket,
        image: Option<ImageAttachment>,
    ) -> UploadCommit {
        if ticket.kind != UploadKind::Image || !self.is_current(&ticket) {
            return UploadCommit::Stale;
        }
        self.image = image.map(Arc::new);
        UploadCommit::Applied
    }

    // ----------------------------------------------------------------
    // Pipeline
    // ----------------------------------------------------------------

    /// Regenera los borradores y devuelve cuántos hay.
    /// Si falla, se conservan los anteriores.
    pub fn generate(&mut self, template: &str) -> Result<usize, ValidationError> {
        let drafts = generate_messages(&self.customers, template, self.image.as_ref())?;
        self.drafts = drafts;
        self.template = Some(template.to_string());
        self.template_headers = self.headers.clone();
        Ok(self.drafts.len())
    }

    /// Valida y, en la rama de envío, agrega las entradas al log.
    pub fn schedule(
        &mut self,
        req: &ScheduleRequest,
        qr_size: u32,
        now: DateTime<Utc>,
    ) -> Result<ScheduleOutcome, ValidationError> {
        let outcome = schedule_messages(&self.drafts, req, &self.credentials, qr_size, now)?;
        if let ScheduleOutcome::Sent(entries) = &outcome {
            self.log.extend(entries.iter().cloned());
        }
        Ok(outcome)
    }

    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    // ----------------------------------------------------------------
    // Lectura
    // ----------------------------------------------------------------

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn customers(&self) -> &[CustomerRecord] {
        &self.customers
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn log(&self) -> &DeliveryLog {
        &self.log
    }

    pub fn preview(&self) -> PreviewResponse {
        let unknown = self
            .template
            .as_deref()
            .map(|t| unknown_placeholders(t, &self.template_headers))
            .unwrap_or_default();

        PreviewResponse {
            success: true,
            count: self.drafts.len(),
            unknown_placeholders: unknown,
            messages: self
                .drafts
                .iter()
                .map(|d| MessagePreview {
                    to: d.recipient.recipient_label(),
                    content: d.content.clone(),
                    image: d.image.as_ref().map(|img| img.data_uri.clone()),
                })
                .collect(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            customers: self.customers.len(),
            drafts: self.drafts.len(),
            has_image: self.image.is_some(),
            log: self.log.counts(),
        }
    }
}

#[cfg(test)]
impl SessionContext {
    pub(crate) fn drafts(&self) -> &[MessageDraft] {
        &self.drafts
    }

    pub(crate) fn image(&self) -> Option<&Arc<ImageAttachment>> {
        self.image.as_ref()
    }
}

/// Mapa de sesiones en memoria, compartido entre workers.
/// El lock nunca se mantiene mientras se lee el body de una request.
/// Con `idle_ttl`, las sesiones sin accesos por más de ese tiempo se
/// descartan al crear una nueva o en [`SessionService::evict_idle`].
#[derive(Clone, Default)]
pub struct SessionService {
    sessions: Arc<RwLock<HashMap<Uuid, SessionContext>>>,
    idle_ttl: Option<Duration>,
}

impl SessionService {
    /// Un TTL de cero desactiva la expiración (igual que `default()`:
    /// las sesiones viven hasta un DELETE explícito)
    pub fn with_idle_ttl(ttl: Duration) -> Self {
        Self {
            idle_ttl: Some(ttl).filter(|ttl| !ttl.is_zero()),
            ..Self::default()
        }
    }

    pub async fn create_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut guard = self.sessions.write().await;
        let evicted = self.sweep(&mut guard, Instant::now());
        guard.insert(id, SessionContext::new(id));
        log::info!(
            "(create_session) Sesión creada id={} (expiradas: {})",
            id,
            evicted
        );
        id
    }

    /// Descarta las sesiones inactivas respecto de `now`.
    /// Devuelve cuántas se eliminaron.
    pub async fn evict_idle(&self, now: Instant) -> usize {
        let mut guard = self.sessions.write().await;
        self.sweep(&mut guard, now)
    }

    fn sweep(&self, sessions: &mut HashMap<Uuid, SessionContext>, now: Instant) -> usize {
        let Some(ttl) = self.idle_ttl else {
            return 0;
        };
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_idle(now, ttl));
        let evicted = before - sessions.len();
        if evicted > 0 {
            log::info!(
                "(evict_idle) {} sesiones expiradas por inactividad ({}s)",
                evicted,
                ttl.as_secs()
            );
        }
        evicted
    }

    pub async fn remove_session(&self, id: &Uuid) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            log::info!("(remove_session) Sesión eliminada id={}", id);
        }
        removed
    }

    /// `None` si la sesión no existe. Toma el lock de escritura porque
    /// también registra el último acceso.
    pub async fn with_session<R>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&SessionContext) -> R,
    ) -> Option<R> {
        self.with_session_mut(id, |s| f(&*s)).await
    }

    pub async fn with_session_mut<R>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&mut SessionContext) -> R,
    ) -> Option<R> {
        let mut guard = self.sessions.write().await;
        guard.get_mut(id).map(|s| {
            s.last_access = Instant::now();
            f(s)
        })
    }
}
