//! Slack incoming webhook.

use async_trait::async_trait;
use reqwest::Client;

use crate::{NotifierService, Result, SlackMessage};

/// Sends messages to a Slack incoming webhook URL.
#[derive(Clone)]
pub struct SlackWebhookNotifier {
    client: Client,
    webhook_url: String,
}

impl SlackWebhookNotifier {
    /// Creates a notifier for the given webhook URL.
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl NotifierService for SlackWebhookNotifier {
    #[tracing::instrument(skip_all, fields(channel = %message.channel, username = %message.username))]
    async fn send(&self, message: &SlackMessage) -> Result<()> {
        self.client
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::NotifierError;

    fn message() -> SlackMessage {
        SlackMessage {
            text: "PR *Fix bug* is ready".into(),
            channel: "#general".into(),
            username: "ReadyForReviewBot".into(),
        }
    }

    #[tokio::test]
    async fn send_posts_message_to_webhook() {
        let server = MockServer::start();
        let hook = server.mock(|when, then| {
            when.method(POST)
                .path("/services/T/B/X")
                .header("content-type", "application/json")
                .json_body(json!({
                    "text": "PR *Fix bug* is ready",
                    "channel": "#general",
                    "username": "ReadyForReviewBot"
                }));
            then.status(200).body("ok");
        });

        SlackWebhookNotifier::new(server.url("/services/T/B/X"))
            .send(&message())
            .await
            .unwrap();
        hook.assert();
    }

    #[tokio::test]
    async fn send_fails_on_error_status() {
        let server = MockServer::start();
        let hook = server.mock(|when, then| {
            when.method(POST).path("/services/T/B/X");
            then.status(404).body("no_service");
        });

        let result = SlackWebhookNotifier::new(server.url("/services/T/B/X"))
            .send(&message())
            .await;
        assert!(matches!(result, Err(NotifierError::HttpError { .. })));
        hook.assert();
    }
}
