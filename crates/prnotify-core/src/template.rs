//! Message templates.
//!
//! Templates contain `{ dotted.path }` placeholders resolved against the raw
//! event payload. Resolution never fails: when a segment cannot be followed,
//! the walk stops and the last value reached is used instead.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

lazy_static! {
    static ref PLACEHOLDER_RGX: Regex = Regex::new(r"\{(.*?)\}").unwrap();
}

/// Render a template against an event payload.
pub fn render(payload: &Value, template: &str) -> String {
    let mut message = template.to_string();

    for captures in PLACEHOLDER_RGX.captures_iter(template) {
        let placeholder = &captures[0];
        let path = captures[1].trim();
        let value = resolve_path(payload, path);

        message = message.replacen(placeholder, &value_to_string(value), 1);
    }

    message
}

/// Walk a dotted path into the payload.
///
/// Returns the deepest value reached before the first missing or falsy
/// segment.
pub fn resolve_path<'a>(payload: &'a Value, path: &str) -> &'a Value {
    let mut current = payload;

    for key in path.split('.') {
        match child(current, key) {
            Some(next) => current = next,
            None => {
                debug!(path = path, key = key, "Could not resolve template key");
                break;
            }
        }
    }

    current
}

fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let next = match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|idx| items.get(idx)),
        _ => None,
    };

    next.filter(|v| is_truthy(v))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
