//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod marker;
pub mod template;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{CoreError, Result};
use shaku::module;
use use_cases::notifications::{
    check_notification_sent::CheckNotificationSent,
    determine_notification::DetermineNotification, process_event::ProcessEvent,
    record_notification_sent::RecordNotificationSent,
};

module! {
    pub CoreModule {
        components = [
            CheckNotificationSent, RecordNotificationSent,
            DetermineNotification, ProcessEvent
        ],
        providers = []
    }
}
