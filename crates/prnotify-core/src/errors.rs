//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CoreError {
    /// Wraps [`prnotify_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: prnotify_ghapi_interface::ApiError,
    },

    /// Wraps [`prnotify_slack::NotifierError`].
    #[error("Notifier error: {source}")]
    NotifierError {
        source: prnotify_slack::NotifierError,
    },

    #[error("Event payload has no '{}' field", name)]
    MissingEventField { name: &'static str },

    #[error("{} is not set. Set it with\nenv:\n\t{}: {}", name, name, hint)]
    MissingConfiguration {
        name: &'static str,
        hint: &'static str,
    },

    #[error("Invalid repository: {source}")]
    InvalidRepositoryPath {
        source: prnotify_models::RepositoryPathError,
    },
}

impl From<prnotify_ghapi_interface::ApiError> for CoreError {
    fn from(e: prnotify_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<prnotify_slack::NotifierError> for CoreError {
    fn from(e: prnotify_slack::NotifierError) -> Self {
        Self::NotifierError { source: e }
    }
}

impl From<prnotify_models::RepositoryPathError> for CoreError {
    fn from(e: prnotify_models::RepositoryPathError) -> Self {
        Self::InvalidRepositoryPath { source: e }
    }
}

/// Result alias for `CoreError`.
pub type Result<T> = core::result::Result<T, CoreError>;
