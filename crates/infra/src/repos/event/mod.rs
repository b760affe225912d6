mod inmemory;
mod postgres;

use chrono::NaiveDate;
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;
use wildcal_domain::{CalendarEvent, ID};

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, event: &CalendarEvent) -> anyhow::Result<()>;
    async fn save(&self, event: &CalendarEvent) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<CalendarEvent>;
    /// All active events with a date in `[start, end]`, both ends inclusive
    async fn find_active_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<CalendarEvent>>;
}
