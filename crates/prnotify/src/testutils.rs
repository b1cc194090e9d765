use prnotify_config::{
    ApiDriver, Config, NotifierDriver, DEFAULT_PR_APPROVED_FORMAT,
    DEFAULT_PR_READY_FOR_REVIEW_FORMAT, DEFAULT_PR_REJECTED_FORMAT,
};
use prnotify_core::CoreModule;
use prnotify_ghapi_interface::MockApiService;
use prnotify_slack::MockNotifierService;

use crate::args::CommandContext;

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub api_service: MockApiService,
    pub notifier_service: MockNotifierService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        let mut config = Config::from_env_no_version().unwrap();
        config.api.driver = ApiDriver::GitHub;
        config.api.github.token = "token".into();
        config.api.github.repo_name = "me/test".into();
        config.slack.driver = NotifierDriver::Slack;
        config.slack.channel = "general".into();
        config.slack.webhook_url = "https://hooks.slack.test/services/T/B/X".into();
        config.slack.username = "ReadyForReviewBot".into();
        config.templates.approved = DEFAULT_PR_APPROVED_FORMAT.into();
        config.templates.rejected = DEFAULT_PR_REJECTED_FORMAT.into();
        config.templates.ready_for_review = DEFAULT_PR_READY_FOR_REVIEW_FORMAT.into();
        config.ignore_drafts = true;

        Self {
            config,
            api_service: MockApiService::new(),
            notifier_service: MockNotifierService::new(),
        }
    }

    pub fn into_context(self) -> CommandContext {
        CommandContext {
            config: self.config,
            api_service: Box::new(self.api_service),
            notifier_service: Box::new(self.notifier_service),
            core_module: CoreModule::builder().build(),
        }
    }
}
