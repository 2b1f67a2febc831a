//! Ingestion helpers for the loosely-shaped fields of article records.
//!
//! Image references arrive either as a bare URL string or as an object with a
//! `url` field. Both are folded into `Option<String>` here so nothing past the
//! ingestion boundary has to care about the shape.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Resolves an image reference: the `url` field first, then the value itself.
/// Anything that does not yield a non-blank string resolves to `None`.
pub fn resolve_image(value: &Value) -> Option<String> {
    let url = match value {
        Value::Object(map) => map.get("url").and_then(Value::as_str),
        Value::String(s) => Some(s.as_str()),
        _ => None,
    }?;

    if url.trim().is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

pub fn image_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(resolve_image))
}

/// Empty strings count as absent, the same as a missing field.
pub fn non_empty_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Paragraph lists are taken as-is. Entries that are not strings degrade to
/// their JSON text (or an empty paragraph for `null`) instead of failing the
/// whole article.
pub fn paragraphs<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(items.into_iter().map(paragraph_text).collect()),
        Some(Value::String(s)) => Some(vec![s]),
        _ => None,
    })
}

fn paragraph_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn sections<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
