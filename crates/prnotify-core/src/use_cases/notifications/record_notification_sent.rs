use async_trait::async_trait;
use shaku::{Component, Interface};

use super::resolve_pull_request_handle;
use crate::{marker::notification_marker, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RecordNotificationSentInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pr_number: u64) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = RecordNotificationSentInterface)]
pub(crate) struct RecordNotificationSent;

#[async_trait]
impl RecordNotificationSentInterface for RecordNotificationSent {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pr_number: u64) -> Result<()> {
        let pr_handle = resolve_pull_request_handle(ctx.config, pr_number)?;

        ctx.api_service
            .comments_post(
                pr_handle.owner(),
                pr_handle.name(),
                pr_handle.number(),
                &notification_marker(ctx.config),
            )
            .await?;

        Ok(())
    }
}
