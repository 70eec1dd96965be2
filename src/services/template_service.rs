//! services/template_service.rs
//! Reemplazo de placeholders `[columna]` en el template del mensaje.

use crate::models::customer_model::CustomerRecord;

/// Reemplaza todas las apariciones de `[key]` por el valor del registro,
/// recorriendo las claves en el orden del registro. Los placeholders sin
/// columna quedan tal cual.
pub fn render(template: &str, record: &CustomerRecord) -> String {
    let mut rendered = template.to_string();
    for (key, value) in record.iter() {
        let placeholder = format!("[{}]", key);
        if rendered.contains(&placeholder) {
            rendered = rendered.replace(&placeholder, value);
        }
    }
    rendered
}

/// Placeholders del template, sin repetir, en orden de aparición.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        let Some(close) = after.find(']') else {
            break;
        };
        let inner = &after[..close];
        // "[a [b]" -> el placeholder es "b"
        if let Some(nested) = inner.rfind('[') {
            rest = &after[nested..];
            continue;
        }
        if !found.iter().any(|p| p == inner) {
            found.push(inner.to_string());
        }
        rest = &after[close + 1..];
    }
    found
}

/// Placeholders que no corresponden a ninguna columna del header
pub fn unknown_placeholders(template: &str, headers: &[String]) -> Vec<String> {
    placeholders(template)
        .into_iter()
        .filter(|p| !headers.iter().any(|h| h == p))
        .collect()
}
