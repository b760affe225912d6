use super::{INotificationProvider, NotificationOutcome};
use tracing::info;

/// Instagram direct messages are not wired up to the Graph API yet. The
/// provider logs the DM it would have sent and reports it as queued, so
/// the audit trail shows the attempt either way.
pub struct InstagramNotificationProvider {
    username: Option<String>,
}

impl InstagramNotificationProvider {
    pub fn new(username: Option<String>) -> Self {
        Self { username }
    }
}

#[async_trait::async_trait]
impl INotificationProvider for InstagramNotificationProvider {
    async fn send_notification(
        &self,
        recipient: &str,
        message: &str,
        asset_url: Option<&str>,
    ) -> anyhow::Result<NotificationOutcome> {
        let sender = self.username.as_deref().unwrap_or("wildcal");
        info!(
            "[IG] DM from {} to {}: \"{}\" with asset {:?}",
            sender, recipient, message, asset_url
        );
        Ok(NotificationOutcome {
            delivered: false,
            detail: serde_json::json!({
                "msg": format!("DM to {} queued by {}", recipient, sender)
            }),
        })
    }
}
