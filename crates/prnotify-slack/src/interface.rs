use async_trait::async_trait;
use prnotify_config::Config;
use serde::Serialize;

use crate::Result;

/// Message posted to the chat webhook.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SlackMessage {
    /// Message text.
    pub text: String,
    /// Target channel, with its leading `#`.
    pub channel: String,
    /// Sender name.
    pub username: String,
}

impl SlackMessage {
    /// Address a message to the configured channel, as the configured sender.
    pub fn from_config(config: &Config, text: String) -> Self {
        Self {
            text,
            channel: format!("#{}", config.slack.channel),
            username: config.slack.username.clone(),
        }
    }
}

/// Chat notifier interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait NotifierService: Send + Sync {
    /// Send a message.
    async fn send(&self, message: &SlackMessage) -> Result<()>;
}
