//! services/csv_service.rs
//! Parser CSV simple: separa por '\n' y por ','. No soporta comillas
//! ni comas/saltos de línea dentro de un campo.

use crate::models::customer_model::CustomerRecord;

/// Columnas del header (primera línea), cada una sin espacios alrededor.
/// Vacío si el texto está vacío.
pub fn csv_headers(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return vec![];
    }
    text.split('\n')
        .next()
        .map(split_row)
        .unwrap_or_default()
}

/// Convierte el texto en registros, en el orden de entrada.
/// Las filas con distinta cantidad de celdas que el header se descartan
/// sin error.
pub fn parse_csv(text: &str) -> Vec<CustomerRecord> {
    let text = text.trim();
    if text.is_empty() {
        return vec![];
    }

    let mut lines = text.split('\n');
    let headers = match lines.next() {
        Some(line) => split_row(line),
        None => return vec![],
    };

    let mut records: Vec<CustomerRecord> = Vec::new();
    let mut dropped = 0usize;
    for line in lines {
        let values = split_row(line);
        if values.len() != headers.len() {
            dropped += 1;
            continue;
        }
        records.push(headers.iter().cloned().zip(values).collect());
    }

    if dropped > 0 {
        log::debug!(
            "(parse_csv) {} filas descartadas por no coincidir con el header ({} columnas)",
            dropped,
            headers.len()
        );
    }
    records
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}
