//! models/customer_model.rs
//! Registro de cliente (una fila del CSV) y respuestas del listado.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Una fila del CSV: pares (columna, valor) en el orden del header.
/// Se serializa como objeto JSON respetando ese orden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerRecord {
    fields: Vec<(String, String)>,
}

impl CustomerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta o reemplaza. Una clave repetida conserva su posición
    /// original y se queda con el último valor.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Identificador visible del destinatario: "name", si no "email",
    /// si no "Unknown". Un valor vacío cuenta como ausente.
    pub fn recipient_label(&self) -> String {
        ["name", "email"]
            .iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.is_empty())
            .unwrap_or("Unknown")
            .to_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CustomerRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = CustomerRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl Serialize for CustomerRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// GET /api/sessions/{id}/customers
#[derive(Debug, Clone, Serialize)]
pub struct CustomersResponse {
    pub success: bool,
    pub headers: Vec<String>,
    pub customers: Vec<CustomerRecord>,
}

/// POST /api/sessions/{id}/customers
#[derive(Debug, Clone, Serialize)]
pub struct CustomerUploadResponse {
    pub success: bool,
    pub headers: Vec<String>,
    pub count: usize,
    /// true si otra subida más reciente ya reemplazó a esta
    pub stale: bool,
}
