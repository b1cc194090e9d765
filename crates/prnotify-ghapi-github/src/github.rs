//! GitHub adapter

use async_trait::async_trait;
use prnotify_config::Config;
use prnotify_ghapi_interface::{types::GhIssueComment, ApiError, ApiService, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::auth::{build_github_url, get_authenticated_client_builder};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client> {
        Ok(get_authenticated_client_builder(&self.config)?
            .build()
            .map_err(crate::GitHubError::from)?)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn comments_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        per_page: u8,
    ) -> Result<Vec<GhIssueComment>> {
        self.get_client()?
            .get(self.build_url(format!(
                "/repos/{owner}/{name}/issues/{issue_number}/comments"
            )))
            .query(&[("per_page", per_page)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(into_api_error)?
            .json::<Vec<GhIssueComment>>()
            .await
            .map_err(into_api_error)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64> {
        #[derive(Serialize)]
        struct Request<'a> {
            body: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            id: u64,
        }

        let response = self
            .get_client()?
            .post(self.build_url(format!(
                "/repos/{owner}/{name}/issues/{issue_number}/comments"
            )))
            .json(&Request { body })
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(into_api_error)?
            .json::<Response>()
            .await
            .map_err(into_api_error)?;

        Ok(response.id)
    }
}

fn into_api_error(e: reqwest::Error) -> ApiError {
    crate::GitHubError::from(e).into()
}
