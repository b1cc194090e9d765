//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError, NotifierDriver};

/// Default template for approved reviews.
pub const DEFAULT_PR_APPROVED_FORMAT: &str =
    "Pull request *{ pull_request.title }* was approved by { review.user.login } :heavy_check_mark:";
/// Default template for reviews requesting changes.
pub const DEFAULT_PR_REJECTED_FORMAT: &str =
    "Pull request *{ pull_request.title }* was rejected by { review.user.login } :cry:";
/// Default template for pull requests ready for review.
pub const DEFAULT_PR_READY_FOR_REVIEW_FORMAT: &str = ":rocket: New PR ready for review! :rocket:\n\
    Title: *{ pull_request.title }*\n\
    Author: { pull_request.user.login }\n\
    URL: { pull_request.html_url }";
/// Default sender name.
pub const DEFAULT_USERNAME: &str = "ReadyForReviewBot";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API token.
    pub token: String,
    /// Repository path, as `owner/name`.
    pub repo_name: String,
}

#[derive(Debug, Clone)]
pub struct SlackConfig {
    /// Notifier driver.
    pub driver: NotifierDriver,
    /// Channel name, without the leading `#`.
    pub channel: String,
    /// Incoming webhook URL.
    pub webhook_url: String,
    /// Sender name.
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct TemplatesConfig {
    /// Message sent on approved reviews.
    pub approved: String,
    /// Message sent on reviews requesting changes.
    pub rejected: String,
    /// Message sent when a pull request becomes ready for review.
    pub ready_for_review: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Notifier configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Slack options.
    pub slack: SlackConfig,
    /// Message templates.
    pub templates: TemplatesConfig,
    /// Skip draft pull requests.
    pub ignore_drafts: bool,
    /// Path to the JSON event payload.
    pub event_path: String,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Ok(Config {
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("PRNOTIFY_API_DRIVER", "github"))?,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("PRNOTIFY_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("GITHUB_API_URL", "https://api.github.com"),
                    token: env_to_str("GITHUB_TOKEN", ""),
                    repo_name: env_to_str("REPO_NAME", &env_to_str("GITHUB_REPOSITORY", "")),
                },
            },
            slack: SlackConfig {
                driver: NotifierDriver::from_str(&env_to_str(
                    "PRNOTIFY_NOTIFIER_DRIVER",
                    "slack",
                ))?,
                channel: env_to_str("SLACK_CHANNEL", ""),
                webhook_url: env_to_str("SLACK_WEBHOOK", ""),
                username: env_to_str("USERNAME", DEFAULT_USERNAME),
            },
            templates: TemplatesConfig {
                approved: env_to_str("PR_APPROVED_FORMAT", DEFAULT_PR_APPROVED_FORMAT),
                rejected: env_to_str("PR_REJECTED_FORMAT", DEFAULT_PR_REJECTED_FORMAT),
                ready_for_review: env_to_str(
                    "PR_READY_FOR_REVIEW_FORMAT",
                    DEFAULT_PR_READY_FOR_REVIEW_FORMAT,
                ),
            },
            ignore_drafts: env_to_bool("IGNORE_DRAFTS", true),
            event_path: env_to_str("GITHUB_EVENT_PATH", ""),
            logging: LoggingConfig {
                use_bunyan: env_to_bool("PRNOTIFY_LOGGING_USE_BUNYAN", false),
            },
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Config, DriverError> {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|e| parse_bool(&e, default))
        .unwrap_or(default)
}

fn parse_bool(value: &str, default: bool) -> bool {
    match &value.trim().to_lowercase()[..] {
        "" => default,
        "false" | "0" | "no" | "off" => false,
        _ => true,
    }
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| default.to_string())
        .replace("\\n", "\n")
}
