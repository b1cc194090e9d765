//! Chat notification crate.
//!
//! Sends messages to a Slack incoming webhook.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
mod null;
mod webhook;

pub use errors::{NotifierError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockNotifierService;
pub use interface::{NotifierService, SlackMessage};
pub use null::NullNotifierService;
pub use webhook::SlackWebhookNotifier;
