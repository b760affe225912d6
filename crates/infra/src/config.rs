use std::str::FromStr;
use tracing::{info, warn};
use wildcal_domain::NotificationChannel;
use wildcal_utils::create_random_secret;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Shared API key protecting the moderation routes. This is a stopgap
    /// until a real session layer exists.
    pub admin_api_key: String,
    /// Local hour of day (0-23) at which the daily notification job fires
    pub notification_hour: u32,
    /// Channels the daily notification job attempts, in order
    pub notification_channels: Vec<NotificationChannel>,
    /// HTTP email relay used by the email channel. When absent the email
    /// channel falls back to a stub provider that only queues.
    pub email_relay: Option<EmailRelayConfig>,
    /// Account name the instagram channel sends DMs from
    pub instagram_username: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EmailRelayConfig {
    pub url: String,
    pub api_token: String,
    pub sender: String,
}

impl Config {
    pub fn new() -> Self {
        let admin_api_key = match std::env::var("ADMIN_API_KEY") {
            Ok(key) => key,
            Err(_) => {
                info!("Did not find ADMIN_API_KEY environment variable. Going to create one.");
                let key = create_random_secret(16);
                info!(
                    "Admin api key was generated and set to: {}. Use it in the `wildcal-admin-api-key` header.",
                    key
                );
                key
            }
        };

        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let default_notification_hour = 10;
        let notification_hour = match std::env::var("NOTIFICATION_HOUR") {
            Ok(hour) => match hour.parse::<u32>() {
                Ok(hour) if hour < 24 => hour,
                _ => {
                    warn!(
                        "The given NOTIFICATION_HOUR: {} is not valid, falling back to the default hour: {}.",
                        hour, default_notification_hour
                    );
                    default_notification_hour
                }
            },
            Err(_) => default_notification_hour,
        };

        let notification_channels = std::env::var("NOTIFICATION_CHANNELS")
            .unwrap_or_else(|_| "email".into())
            .split(',')
            .filter_map(|channel| {
                let channel = channel.trim();
                match NotificationChannel::from_str(channel) {
                    Ok(channel) => Some(channel),
                    Err(_) => {
                        warn!("Unknown notification channel: {}, skipping it.", channel);
                        None
                    }
                }
            })
            .collect();

        let email_relay = match (
            std::env::var("EMAIL_RELAY_URL"),
            std::env::var("EMAIL_RELAY_API_TOKEN"),
            std::env::var("EMAIL_SENDER"),
        ) {
            (Ok(url), Ok(api_token), Ok(sender)) => Some(EmailRelayConfig {
                url,
                api_token,
                sender,
            }),
            _ => None,
        };

        let instagram_username = std::env::var("INSTAGRAM_USERNAME").ok();

        Self {
            port,
            admin_api_key,
            notification_hour,
            notification_channels,
            email_relay,
            instagram_username,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
