use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::info;

use super::resolve_pull_request_handle;
use crate::{marker::notification_marker, CoreContext, Result};

/// Only the first page of comments is inspected.
pub const COMMENTS_PAGE_SIZE: u8 = 100;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CheckNotificationSentInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pr_number: u64) -> Result<bool>;
}

#[derive(Component)]
#[shaku(interface = CheckNotificationSentInterface)]
pub(crate) struct CheckNotificationSent;

#[async_trait]
impl CheckNotificationSentInterface for CheckNotificationSent {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pr_number: u64) -> Result<bool> {
        let pr_handle = resolve_pull_request_handle(ctx.config, pr_number)?;
        let marker = notification_marker(ctx.config);

        let comments = ctx
            .api_service
            .comments_list(
                pr_handle.owner(),
                pr_handle.name(),
                pr_handle.number(),
                COMMENTS_PAGE_SIZE,
            )
            .await?;

        if comments.len() >= COMMENTS_PAGE_SIZE as usize {
            info!(
                pr_handle = %pr_handle,
                "Comment page is full, newer marker comments will not be seen"
            );
        }

        Ok(comments.iter().any(|comment| comment.body == marker))
    }
}

#[cfg(test)]
mod tests {
    use prnotify_ghapi_interface::types::GhIssueComment;

    use super::*;
    use crate::context::tests::CoreContextTest;

    fn comment(id: u64, body: &str) -> GhIssueComment {
        GhIssueComment {
            id,
            body: body.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn run_with_marker() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_comments_list()
            .once()
            .withf(|owner, name, number, per_page| {
                owner == "me" && name == "test" && number == &1 && per_page == &100
            })
            .return_once(|_, _, _, _| {
                Ok(vec![
                    comment(1, "LGTM"),
                    comment(2, "Notification was sent to the #general Slack channel."),
                ])
            });
        ctx.api_service.expect_comments_post().never();

        assert!(CheckNotificationSent
            .run(&ctx.as_context(), 1)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn run_without_marker() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_comments_list()
            .once()
            .return_once(|_, _, _, _| {
                Ok(vec![
                    comment(1, "Notification was sent to the #random Slack channel."),
                    comment(2, "Notification was sent to the #general Slack channel. "),
                    comment(3, "notification was sent to the #general slack channel."),
                ])
            });

        assert!(!CheckNotificationSent
            .run(&ctx.as_context(), 1)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn run_with_full_page() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_comments_list()
            .once()
            .return_once(|_, _, _, _| {
                Ok((0..COMMENTS_PAGE_SIZE as u64)
                    .map(|id| comment(id, "LGTM"))
                    .collect())
            });

        // Comments come oldest first, a marker past the first page is missed.
        assert!(!CheckNotificationSent
            .run(&ctx.as_context(), 1)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn run_without_comments() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_comments_list()
            .once()
            .return_once(|_, _, _, _| Ok(vec![]));

        assert!(!CheckNotificationSent
            .run(&ctx.as_context(), 1)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn run_without_repository() {
        let mut ctx = CoreContextTest::new();
        ctx.config.api.github.repo_name = "".into();
        ctx.api_service.expect_comments_list().never();

        assert!(CheckNotificationSent
            .run(&ctx.as_context(), 1)
            .await
            .is_err());
    }
}
