use async_trait::async_trait;
use tracing::info;

use crate::{NotifierService, Result, SlackMessage};

/// Null notifier: logs messages instead of sending them.
#[derive(Clone, Default)]
pub struct NullNotifierService {
    _private: (),
}

impl NullNotifierService {
    /// Build a null notifier.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl NotifierService for NullNotifierService {
    async fn send(&self, message: &SlackMessage) -> Result<()> {
        info!(
            channel = %message.channel,
            username = %message.username,
            text = %message.text,
            "Notification not sent (null driver)"
        );

        Ok(())
    }
}
