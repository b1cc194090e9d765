use async_trait::async_trait;
use prnotify_models::{GhEvent, GhReviewState};
use serde_json::Value;
use shaku::{Component, HasComponent, Interface};

use super::CheckNotificationSentInterface;
use crate::{template::render, CoreContext, CoreError, Result};

/// Why an event does not produce a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Review with a state other than approved or changes requested.
    UnsupportedReviewState(Option<GhReviewState>),
    /// Pull request action that is not announced.
    UnsupportedAction,
    /// Draft pull request, while drafts are ignored.
    DraftPullRequest,
    /// Marker comment already present on the pull request.
    AlreadyNotified,
}

/// Message to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Rendered message.
    pub message: String,
    /// Pull request to mark before sending, if any.
    pub mark_pull_request: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationDecision {
    Skip(SkipReason),
    Notify(Notification),
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DetermineNotificationInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, payload: &Value)
        -> Result<NotificationDecision>;
}

#[derive(Component)]
#[shaku(interface = DetermineNotificationInterface)]
pub(crate) struct DetermineNotification;

#[async_trait]
impl DetermineNotificationInterface for DetermineNotification {
    #[tracing::instrument(skip_all, ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        payload: &Value,
    ) -> Result<NotificationDecision> {
        let event = GhEvent::from_payload(payload);

        if let Some(review) = &event.review {
            let template = match review.state {
                Some(GhReviewState::Approved) => &ctx.config.templates.approved,
                Some(GhReviewState::ChangesRequested) => &ctx.config.templates.rejected,
                state => {
                    return Ok(NotificationDecision::Skip(
                        SkipReason::UnsupportedReviewState(state),
                    ))
                }
            };

            return Ok(NotificationDecision::Notify(Notification {
                message: render(payload, template),
                mark_pull_request: None,
            }));
        }

        if !event
            .action
            .is_some_and(|action| action.is_ready_for_review_trigger())
        {
            return Ok(NotificationDecision::Skip(SkipReason::UnsupportedAction));
        }

        let pull_request = event
            .pull_request
            .ok_or(CoreError::MissingEventField {
                name: "pull_request",
            })?;
        if pull_request.is_draft() && ctx.config.ignore_drafts {
            return Ok(NotificationDecision::Skip(SkipReason::DraftPullRequest));
        }

        let pr_number = pull_request
            .number
            .ok_or(CoreError::MissingEventField {
                name: "pull_request.number",
            })?;

        let check_notification_sent: &dyn CheckNotificationSentInterface =
            ctx.core_module.resolve_ref();
        if check_notification_sent.run(ctx, pr_number).await? {
            return Ok(NotificationDecision::Skip(SkipReason::AlreadyNotified));
        }

        Ok(NotificationDecision::Notify(Notification {
            message: render(payload, &ctx.config.templates.ready_for_review),
            mark_pull_request: Some(pr_number),
        }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        context::tests::CoreContextTest, use_cases::notifications::MockCheckNotificationSentInterface,
        CoreModule,
    };

    fn ready_payload(action: &str, draft: bool) -> Value {
        json!({
            "action": action,
            "pull_request": {
                "title": "Fix bug",
                "user": {"login": "alice"},
                "html_url": "https://x/1",
                "draft": draft,
                "number": 1
            }
        })
    }

    fn review_payload(state: &str) -> Value {
        json!({
            "action": "submitted",
            "review": {"state": state, "user": {"login": "bob"}},
            "pull_request": {
                "title": "Fix bug",
                "user": {"login": "alice"},
                "html_url": "https://x/1",
                "draft": false,
                "number": 1
            }
        })
    }

    fn with_check_result(ctx: &mut CoreContextTest, sent: Option<bool>) {
        let mut check_notification_sent = MockCheckNotificationSentInterface::new();
        match sent {
            Some(sent) => {
                check_notification_sent
                    .expect_run()
                    .once()
                    .withf(|_, pr_number| pr_number == &1)
                    .return_once(move |_, _| Ok(sent));
            }
            None => {
                check_notification_sent.expect_run().never();
            }
        }

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn CheckNotificationSentInterface>(Box::new(
                check_notification_sent,
            ))
            .build();
    }

    #[tokio::test]
    async fn run_approved_review() {
        let mut ctx = CoreContextTest::new();
        with_check_result(&mut ctx, None);

        assert_eq!(
            DetermineNotification
                .run(&ctx.as_context(), &review_payload("approved"))
                .await
                .unwrap(),
            NotificationDecision::Notify(Notification {
                message: "Pull request *Fix bug* was approved by bob :heavy_check_mark:".into(),
                mark_pull_request: None
            })
        );
    }

    #[tokio::test]
    async fn run_changes_requested_review() {
        let mut ctx = CoreContextTest::new();
        with_check_result(&mut ctx, None);

        assert_eq!(
            DetermineNotification
                .run(&ctx.as_context(), &review_payload("changes_requested"))
                .await
                .unwrap(),
            NotificationDecision::Notify(Notification {
                message: "Pull request *Fix bug* was rejected by bob :cry:".into(),
                mark_pull_request: None
            })
        );
    }

    #[tokio::test]
    async fn run_other_review_states() {
        let mut ctx = CoreContextTest::new();
        with_check_result(&mut ctx, None);

        assert_eq!(
            DetermineNotification
                .run(&ctx.as_context(), &review_payload("commented"))
                .await
                .unwrap(),
            NotificationDecision::Skip(SkipReason::UnsupportedReviewState(Some(
                GhReviewState::Commented
            )))
        );
        assert_eq!(
            DetermineNotification
                .run(&ctx.as_context(), &review_payload("brand_new_state"))
                .await
                .unwrap(),
            NotificationDecision::Skip(SkipReason::UnsupportedReviewState(Some(
                GhReviewState::Other
            )))
        );
        assert_eq!(
            DetermineNotification
                .run(&ctx.as_context(), &json!({"review": {}}))
                .await
                .unwrap(),
            NotificationDecision::Skip(SkipReason::UnsupportedReviewState(None))
        );
    }

    #[tokio::test]
    async fn run_unsupported_action() {
        let mut ctx = CoreContextTest::new();
        with_check_result(&mut ctx, None);

        for payload in [
            ready_payload("closed", false),
            ready_payload("labeled", false),
            json!({"pull_request": {"number": 1}}),
        ] {
            assert_eq!(
                DetermineNotification
                    .run(&ctx.as_context(), &payload)
                    .await
                    .unwrap(),
                NotificationDecision::Skip(SkipReason::UnsupportedAction)
            );
        }
    }

    #[tokio::test]
    async fn run_draft_ignored() {
        let mut ctx = CoreContextTest::new();
        with_check_result(&mut ctx, None);

        assert_eq!(
            DetermineNotification
                .run(&ctx.as_context(), &ready_payload("opened", true))
                .await
                .unwrap(),
            NotificationDecision::Skip(SkipReason::DraftPullRequest)
        );
    }

    #[tokio::test]
    async fn run_draft_not_ignored() {
        let mut ctx = CoreContextTest::new();
        ctx.config.ignore_drafts = false;
        with_check_result(&mut ctx, Some(false));

        assert!(matches!(
            DetermineNotification
                .run(&ctx.as_context(), &ready_payload("opened", true))
                .await
                .unwrap(),
            NotificationDecision::Notify(Notification {
                mark_pull_request: Some(1),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn run_ready_for_review() {
        let mut ctx = CoreContextTest::new();
        with_check_result(&mut ctx, Some(false));

        assert_eq!(
            DetermineNotification
                .run(&ctx.as_context(), &ready_payload("ready_for_review", false))
                .await
                .unwrap(),
            NotificationDecision::Notify(Notification {
                message: ":rocket: New PR ready for review! :rocket:\n\
                          Title: *Fix bug*\n\
                          Author: alice\n\
                          URL: https://x/1"
                    .into(),
                mark_pull_request: Some(1)
            })
        );
    }

    #[tokio::test]
    async fn run_already_notified() {
        let mut ctx = CoreContextTest::new();
        with_check_result(&mut ctx, Some(true));

        assert_eq!(
            DetermineNotification
                .run(&ctx.as_context(), &ready_payload("synchronize", false))
                .await
                .unwrap(),
            NotificationDecision::Skip(SkipReason::AlreadyNotified)
        );
    }

    #[tokio::test]
    async fn run_missing_pull_request() {
        let mut ctx = CoreContextTest::new();
        with_check_result(&mut ctx, None);

        assert!(matches!(
            DetermineNotification
                .run(&ctx.as_context(), &json!({"action": "reopened"}))
                .await,
            Err(CoreError::MissingEventField {
                name: "pull_request"
            })
        ));
    }

    #[tokio::test]
    async fn run_mistyped_fields_are_skipped() {
        let mut ctx = CoreContextTest::new();
        with_check_result(&mut ctx, None);

        for payload in [
            json!({"action": "closed", "pull_request": {"number": "7"}}),
            json!({"action": 42}),
            json!({"action": ["opened"], "pull_request": {"number": 1}}),
            json!({"review": "yes"}),
            json!([1, 2, 3]),
        ] {
            assert_eq!(
                DetermineNotification
                    .run(&ctx.as_context(), &payload)
                    .await
                    .unwrap(),
                NotificationDecision::Skip(SkipReason::UnsupportedAction)
            );
        }

        assert_eq!(
            DetermineNotification
                .run(&ctx.as_context(), &json!({"review": {"state": 1}}))
                .await
                .unwrap(),
            NotificationDecision::Skip(SkipReason::UnsupportedReviewState(None))
        );
    }

    #[tokio::test]
    async fn run_mistyped_pull_request_number() {
        let mut ctx = CoreContextTest::new();
        with_check_result(&mut ctx, None);

        assert!(matches!(
            DetermineNotification
                .run(
                    &ctx.as_context(),
                    &json!({"action": "opened", "pull_request": {"number": "7"}})
                )
                .await,
            Err(CoreError::MissingEventField {
                name: "pull_request.number"
            })
        ));
    }
}
