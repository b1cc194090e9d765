//! Event payload loading.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("No event payload path given, set GITHUB_EVENT_PATH or use --event-path")]
    MissingPath,

    #[error("Could not read event payload at '{}',\n  caused by: {}", path.display(), source)]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse event payload at '{}',\n  caused by: {}", path.display(), source)]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Event payload at '{}' is not a JSON object", path.display())]
    NotAnObject { path: PathBuf },
}

/// Read the JSON event payload delivered by the CI host.
pub fn load_event_payload(path: &str) -> Result<Value, EventError> {
    if path.is_empty() {
        return Err(EventError::MissingPath);
    }

    let path = PathBuf::from(path);
    let contents = std::fs::read_to_string(&path).map_err(|e| EventError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let payload: Value =
        serde_json::from_str(&contents).map_err(|e| EventError::ParseError {
            path: path.clone(),
            source: e,
        })?;

    if !payload.is_object() {
        return Err(EventError::NotAnObject { path });
    }

    debug!(path = %path.display(), "Event payload loaded");
    Ok(payload)
}
