use async_trait::async_trait;
use prnotify_slack::SlackMessage;
use serde_json::Value;
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::{
    DetermineNotificationInterface, NotificationDecision, RecordNotificationSentInterface,
    SkipReason,
};
use crate::{CoreContext, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Skipped(SkipReason),
    Notified(SlackMessage),
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, payload: &Value) -> Result<ProcessOutcome>;
}

#[derive(Component)]
#[shaku(interface = ProcessEventInterface)]
pub(crate) struct ProcessEvent;

#[async_trait]
impl ProcessEventInterface for ProcessEvent {
    #[tracing::instrument(skip_all, ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, payload: &Value) -> Result<ProcessOutcome> {
        let determine_notification: &dyn DetermineNotificationInterface =
            ctx.core_module.resolve_ref();

        match determine_notification.run(ctx, payload).await? {
            NotificationDecision::Skip(reason) => {
                info!(reason = ?reason, "No notification to send");
                Ok(ProcessOutcome::Skipped(reason))
            }
            NotificationDecision::Notify(notification) => {
                // Marker is written before the message is sent.
                if let Some(pr_number) = notification.mark_pull_request {
                    let record_notification_sent: &dyn RecordNotificationSentInterface =
                        ctx.core_module.resolve_ref();
                    record_notification_sent.run(ctx, pr_number).await?;
                }

                let message = SlackMessage::from_config(ctx.config, notification.message);
                ctx.notifier_service.send(&message).await?;
                info!(channel = %message.channel, "Notification sent");

                Ok(ProcessOutcome::Notified(message))
            }
        }
    }
}
