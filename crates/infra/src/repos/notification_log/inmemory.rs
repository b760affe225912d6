use super::INotificationLogRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use wildcal_domain::NotificationLogEntry;

pub struct InMemoryNotificationLogRepo {
    entries: std::sync::Mutex<Vec<NotificationLogEntry>>,
}

impl InMemoryNotificationLogRepo {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl INotificationLogRepo for InMemoryNotificationLogRepo {
    async fn insert(&self, entry: &NotificationLogEntry) -> anyhow::Result<()> {
        insert(entry, &self.entries);
        Ok(())
    }

    async fn find_by_date(&self, date: NaiveDate) -> anyhow::Result<Vec<NotificationLogEntry>> {
        let res = find_by(&self.entries, |entry| entry.date == date);
        Ok(res)
    }
}
