use std::path::PathBuf;

use clap::Parser;
use prnotify_config::{ApiDriver, Config, NotifierDriver};
use prnotify_core::{
    use_cases::notifications::{ProcessEventInterface, ProcessOutcome},
    CoreContext, CoreModule,
};
use prnotify_ghapi_github::GithubApiService;
use prnotify_ghapi_interface::ApiService;
use prnotify_ghapi_null::NullApiService;
use prnotify_slack::{NotifierService, NullNotifierService, SlackWebhookNotifier};
use serde_json::Value;
use shaku::HasComponent;
use tracing::info;

use crate::{event::load_event_payload, Result};

#[derive(Parser)]
#[command(about = "Announce pull request events on a Slack channel", long_about = None)]
pub struct Args {
    /// Event payload file, instead of GITHUB_EVENT_PATH.
    #[arg(long)]
    event_path: Option<PathBuf>,

    /// Render and log the notification without calling any external service.
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    /// Fold command line overrides into the configuration.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(event_path) = &self.event_path {
            config.event_path = event_path.to_string_lossy().into_owned();
        }

        if self.dry_run {
            config.api.driver = ApiDriver::Null;
            config.slack.driver = NotifierDriver::Null;
        }

        config
    }
}

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub notifier_service: Box<dyn NotifierService + Send + Sync>,
    pub core_module: CoreModule,
}

impl CommandContext {
    pub fn from_config(config: Config) -> Self {
        let api_service: Box<dyn ApiService + Send + Sync> = {
            if config.api.driver == ApiDriver::GitHub {
                info!("Using GithubApiService API driver");
                Box::new(GithubApiService::new(config.clone()))
            } else {
                info!("Using NullApiService API driver");
                Box::new(NullApiService::new())
            }
        };

        let notifier_service: Box<dyn NotifierService + Send + Sync> = {
            if config.slack.driver == NotifierDriver::Slack {
                info!("Using SlackWebhookNotifier notifier driver");
                Box::new(SlackWebhookNotifier::new(config.slack.webhook_url.clone()))
            } else {
                info!("Using NullNotifierService notifier driver");
                Box::new(NullNotifierService::new())
            }
        };

        Self {
            config,
            api_service,
            notifier_service,
            core_module: CoreModule::builder().build(),
        }
    }

    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            notifier_service: self.notifier_service.as_ref(),
        }
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn run(config: Config) -> Result<()> {
        let payload = load_event_payload(&config.event_path)?;
        let ctx = CommandContext::from_config(config);

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(Self::run_async(&ctx, &payload))?;

        Ok(())
    }

    pub(crate) async fn run_async(ctx: &CommandContext, payload: &Value) -> Result<ProcessOutcome> {
        let process_event: &dyn ProcessEventInterface = ctx.core_module.resolve_ref();
        let outcome = process_event.run(&ctx.as_core_context(), payload).await?;

        match &outcome {
            ProcessOutcome::Skipped(reason) => info!(reason = ?reason, "Nothing sent"),
            ProcessOutcome::Notified(message) => {
                info!(channel = %message.channel, "Notification delivered")
            }
        }

        Ok(outcome)
    }
}
