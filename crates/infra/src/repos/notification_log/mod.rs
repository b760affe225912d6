mod inmemory;
mod postgres;

use chrono::NaiveDate;
pub use inmemory::InMemoryNotificationLogRepo;
pub use postgres::PostgresNotificationLogRepo;
use wildcal_domain::NotificationLogEntry;

/// Append-only: entries are never updated or deleted, every delivery
/// attempt gets its own row.
#[async_trait::async_trait]
pub trait INotificationLogRepo: Send + Sync {
    async fn insert(&self, entry: &NotificationLogEntry) -> anyhow::Result<()>;
    async fn find_by_date(&self, date: NaiveDate) -> anyhow::Result<Vec<NotificationLogEntry>>;
}
