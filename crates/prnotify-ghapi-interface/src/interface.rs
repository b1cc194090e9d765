use async_trait::async_trait;

use crate::{types::GhIssueComment, Result};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List the first page of comments on an issue or pull request.
    async fn comments_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        per_page: u8,
    ) -> Result<Vec<GhIssueComment>>;
    /// Post a comment on a pull request.
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64>;
}
