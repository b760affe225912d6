mod email;
mod instagram;
mod stub;

pub use email::EmailNotificationProvider;
pub use instagram::InstagramNotificationProvider;
pub use stub::StubNotificationProvider;

/// Outcome reported by a notification channel provider. `delivered` means
/// the recipient got the message; a provider that only hands the message
/// off (e.g. an email relay queue) reports `delivered: false`.
#[derive(Debug, Clone)]
pub struct NotificationOutcome {
    pub delivered: bool,
    pub detail: serde_json::Value,
}

/// A pluggable delivery mechanism invoked by the daily notification job.
/// Providers are side-effecting leaf collaborators: the engine owns no
/// state about how delivery happens, only whether and when it was
/// attempted. A provider may fail by returning an `Err`, which the job
/// normalizes into a failed log entry.
#[async_trait::async_trait]
pub trait INotificationProvider: Send + Sync {
    async fn send_notification(
        &self,
        recipient: &str,
        message: &str,
        asset_url: Option<&str>,
    ) -> anyhow::Result<NotificationOutcome>;
}
