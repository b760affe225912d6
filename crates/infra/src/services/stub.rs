use super::{INotificationProvider, NotificationOutcome};
use tracing::info;

/// Provider backing a channel that has no real transport configured, and
/// the default provider in tests. Accepts every notification without
/// delivering anything.
pub struct StubNotificationProvider {
    delivered: bool,
}

impl StubNotificationProvider {
    /// Reports notifications as accepted but not delivered
    pub fn queued() -> Self {
        Self { delivered: false }
    }

    /// Reports notifications as delivered
    pub fn delivered() -> Self {
        Self { delivered: true }
    }
}

#[async_trait::async_trait]
impl INotificationProvider for StubNotificationProvider {
    async fn send_notification(
        &self,
        recipient: &str,
        message: &str,
        _asset_url: Option<&str>,
    ) -> anyhow::Result<NotificationOutcome> {
        info!("[stub] Notification to {}: \"{}\"", recipient, message);
        Ok(NotificationOutcome {
            delivered: self.delivered,
            detail: serde_json::json!({ "msg": "Stub provider accepted the notification" }),
        })
    }
}
