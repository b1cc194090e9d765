//! Domain models.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod event;
mod pull_request_handle;
mod repository_path;

pub use event::{GhEvent, GhEventAction, GhEventPullRequest, GhEventReview, GhReviewState};
pub use pull_request_handle::PullRequestHandle;
pub use repository_path::{RepositoryPath, RepositoryPathError};
