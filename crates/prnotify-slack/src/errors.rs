//! Notifier errors.

use thiserror::Error;

/// Notifier error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Could not send notification to webhook,\n  caused by: {}", source)]
    HttpError { source: reqwest::Error },
}

impl From<reqwest::Error> for NotifierError {
    fn from(e: reqwest::Error) -> Self {
        Self::HttpError { source: e }
    }
}

/// Result alias for `NotifierError`.
pub type Result<T, E = NotifierError> = core::result::Result<T, E>;
