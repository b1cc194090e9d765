pub(crate) mod check_notification_sent;
pub(crate) mod determine_notification;
pub(crate) mod process_event;
pub(crate) mod record_notification_sent;

pub use check_notification_sent::{CheckNotificationSentInterface, COMMENTS_PAGE_SIZE};
pub use determine_notification::{
    DetermineNotificationInterface, Notification, NotificationDecision, SkipReason,
};
pub use process_event::{ProcessEventInterface, ProcessOutcome};
pub use record_notification_sent::RecordNotificationSentInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    check_notification_sent::MockCheckNotificationSentInterface,
    determine_notification::MockDetermineNotificationInterface,
    process_event::MockProcessEventInterface,
    record_notification_sent::MockRecordNotificationSentInterface,
};
use prnotify_config::{ApiDriver, Config};
use prnotify_models::{PullRequestHandle, RepositoryPath};

use crate::{CoreError, Result};

/// Locate the pull request in the configured repository.
///
/// Repository and token are only needed once the issue tracker is involved,
/// so they are checked here rather than at startup.
pub(crate) fn resolve_pull_request_handle(
    config: &Config,
    pr_number: u64,
) -> Result<PullRequestHandle> {
    if config.api.github.repo_name.is_empty() {
        return Err(CoreError::MissingConfiguration {
            name: "REPO_NAME",
            hint: "${{ github.repository }}",
        });
    }

    if config.api.driver == ApiDriver::GitHub && config.api.github.token.is_empty() {
        return Err(CoreError::MissingConfiguration {
            name: "GITHUB_TOKEN",
            hint: "${{ secrets.GITHUB_TOKEN }}",
        });
    }

    let repository = RepositoryPath::new(&config.api.github.repo_name)?;
    Ok(PullRequestHandle::new(repository, pr_number))
}
