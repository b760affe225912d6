use crate::dtos::NotificationLogEntryDTO;
use serde::{Deserialize, Serialize};
use wildcal_domain::NotificationLogEntry;

pub mod trigger_notifications {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub entries: Vec<NotificationLogEntryDTO>,
    }

    impl APIResponse {
        pub fn new(entries: Vec<NotificationLogEntry>) -> Self {
            Self {
                entries: entries
                    .into_iter()
                    .map(NotificationLogEntryDTO::new)
                    .collect(),
            }
        }
    }
}
