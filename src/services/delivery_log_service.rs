//! services/delivery_log_service.rs
//! Log de envíos: solo se agregan entradas, nunca se modifican ni borran.

use crate::models::delivery_log_model::{DeliveryLogEntry, DeliveryStatus, LogCounts};

#[derive(Debug, Clone, Default)]
pub struct DeliveryLog {
    entries: Vec<DeliveryLogEntry>,
}

impl DeliveryLog {
    /// Agrega al final. Si el reloj retrocedió, el timestamp se ajusta al
    /// de la última entrada para que el log nunca vaya hacia atrás.
    pub fn append(&mut self, mut entry: DeliveryLogEntry) {
        if let Some(last) = self.entries.last() {
            if entry.timestamp < last.timestamp {
                entry.timestamp = last.timestamp;
            }
        }
        self.entries.push(entry);
    }

    pub fn all(&self) -> &[DeliveryLogEntry] {
        &self.entries
    }

    pub fn counts(&self) -> LogCounts {
        self.entries
            .iter()
            .fold(LogCounts::default(), |mut acc, e| {
                match e.status {
                    DeliveryStatus::Success => acc.success += 1,
                    DeliveryStatus::Failure => acc.failure += 1,
                }
                acc
            })
    }
}

impl Extend<DeliveryLogEntry> for DeliveryLog {
    fn extend<T: IntoIterator<Item = DeliveryLogEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.append(entry);
        }
    }
}
