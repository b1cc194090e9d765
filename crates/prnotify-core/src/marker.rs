//! Marker comment left on pull requests once they were announced.

use prnotify_config::Config;

/// Body of the marker comment for the configured channel.
///
/// Comments are compared byte for byte against this text, so its format must
/// stay stable across releases.
pub fn notification_marker(config: &Config) -> String {
    format!(
        "Notification was sent to the #{} Slack channel.",
        config.slack.channel
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn marker_uses_channel_verbatim() {
        let mut config = Config::from_env_no_version().unwrap();
        config.slack.channel = "general".into();
        assert_eq!(
            notification_marker(&config),
            "Notification was sent to the #general Slack channel."
        );

        config.slack.channel = "dev-team_2".into();
        assert_eq!(
            notification_marker(&config),
            "Notification was sent to the #dev-team_2 Slack channel."
        );
    }

    #[test]
    fn marker_is_deterministic() {
        let mut config = Config::from_env_no_version().unwrap();
        config.slack.channel = "general".into();
        let other = config.clone();

        assert_eq!(notification_marker(&config), notification_marker(&other));
    }
}
