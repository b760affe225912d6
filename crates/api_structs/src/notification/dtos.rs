use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wildcal_domain::{NotificationChannel, NotificationLogEntry, NotificationStatus, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationLogEntryDTO {
    pub id: ID,
    pub date: NaiveDate,
    pub photographer_id: ID,
    pub channel: NotificationChannel,
    pub status: NotificationStatus,
    pub details: serde_json::Value,
    pub created_at: i64,
}

impl NotificationLogEntryDTO {
    pub fn new(entry: NotificationLogEntry) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            photographer_id: entry.photographer_id,
            channel: entry.channel,
            status: entry.status,
            details: entry.details,
            created_at: entry.created_at,
        }
    }
}
