use super::{INotificationProvider, NotificationOutcome};
use serde::Serialize;
use std::time::Duration;

/// Sends the featured-photo email through an HTTP relay (any transactional
/// email API accepting a bearer token and a JSON body).
pub struct EmailNotificationProvider {
    client: reqwest::Client,
    relay_url: String,
    api_token: String,
    sender: String,
}

#[derive(Serialize)]
struct EmailRelayRequestBody<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    asset_url: Option<&'a str>,
}

impl EmailNotificationProvider {
    pub fn new(relay_url: String, api_token: String, sender: String) -> Self {
        // Bounded so one slow relay call cannot stall the channels that
        // come after it in the same job run
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("reqwest client to be built");
        Self {
            client,
            relay_url,
            api_token,
            sender,
        }
    }
}

#[async_trait::async_trait]
impl INotificationProvider for EmailNotificationProvider {
    async fn send_notification(
        &self,
        recipient: &str,
        message: &str,
        asset_url: Option<&str>,
    ) -> anyhow::Result<NotificationOutcome> {
        let body = EmailRelayRequestBody {
            from: &self.sender,
            to: recipient,
            subject: "Your photo is featured today",
            text: message,
            asset_url,
        };
        let res = self
            .client
            .post(&self.relay_url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;
        res.error_for_status()?;

        Ok(NotificationOutcome {
            delivered: true,
            detail: serde_json::json!({ "relay": self.relay_url }),
        })
    }
}
