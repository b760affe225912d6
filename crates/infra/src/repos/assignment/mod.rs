mod inmemory;
mod postgres;

use chrono::NaiveDate;
pub use inmemory::InMemoryAssignmentRepo;
pub use postgres::PostgresAssignmentRepo;
use wildcal_domain::Assignment;

/// The assignment table is keyed by date: at most one row per calendar day.
/// Writes go through `upsert` so that re-assigning a date can never create
/// a second row for it.
#[async_trait::async_trait]
pub trait IAssignmentRepo: Send + Sync {
    async fn upsert(&self, assignment: &Assignment) -> anyhow::Result<()>;
    async fn find_by_date(&self, date: NaiveDate) -> Option<Assignment>;
    /// All assignments with a date in `[start, end]`, both ends inclusive
    async fn find_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<Assignment>>;
}
