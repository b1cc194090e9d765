use prnotify_ghapi_interface::ApiError;

/// GitHub driver error.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names, missing_docs)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid header value for {}", name)]
    InvalidHeaderError {
        name: &'static str,
        source: http::header::InvalidHeaderValue,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        ApiError::ImplementationError { source: e.into() }
    }
}
