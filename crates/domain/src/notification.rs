use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Email,
    Instagram,
}

impl Display for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Email => "email",
            Self::Instagram => "instagram",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for NotificationChannel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "instagram" => Ok(Self::Instagram),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Queued,
    Sent,
    Failed,
}

impl Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Queued => "queued",
            Self::Sent => "sent",
            Self::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for NotificationStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(Self::Queued),
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            _ => Err(()),
        }
    }
}

/// Append-only audit record of one notification attempt on one channel.
/// Multiple attempts for the same date and channel each get their own entry,
/// so the log is a faithful history of delivery attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationLogEntry {
    pub id: ID,
    pub date: NaiveDate,
    pub photographer_id: ID,
    pub channel: NotificationChannel,
    pub status: NotificationStatus,
    pub details: serde_json::Value,
    /// Unix timestamp in millis
    pub created_at: i64,
}

impl NotificationLogEntry {
    pub fn new(
        date: NaiveDate,
        photographer_id: ID,
        channel: NotificationChannel,
        status: NotificationStatus,
        details: serde_json::Value,
        now: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            date,
            photographer_id,
            channel,
            status,
            details,
            created_at: now,
        }
    }
}

impl Entity for NotificationLogEntry {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
