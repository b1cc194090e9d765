//! Validation utilities.

use std::fmt::Write;

use prnotify_config::{Config, NotifierDriver};
use prnotify_models::RepositoryPath;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str, example: &str) {
        error.push('\n');
        let _ = write!(
            error,
            "  - Missing env. var.: {}. Set it with\n    env:\n      {}: {}",
            name, name, example
        );
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid env. var.: {} ({})", name, reason);
    }

    let mut error = String::new();

    // Check Slack configuration
    if config.slack.driver == NotifierDriver::Slack {
        if config.slack.channel.is_empty() {
            _missing(&mut error, "SLACK_CHANNEL", "your-channel");
        }
        if config.slack.webhook_url.is_empty() {
            _missing(&mut error, "SLACK_WEBHOOK", "${{ secrets.SLACK_WEBHOOK }}");
        }
    }
    if config.slack.channel.starts_with('#') {
        _invalid(
            &mut error,
            "SLACK_CHANNEL",
            "channel name must not start with '#'",
        );
    }

    // Check repository
    if !config.api.github.repo_name.is_empty()
        && RepositoryPath::new(&config.api.github.repo_name).is_err()
    {
        _invalid(&mut error, "REPO_NAME", "expected 'owner/name'");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
