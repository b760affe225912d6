mod inmemory;
mod postgres;

pub use inmemory::InMemorySubmissionRepo;
pub use postgres::PostgresSubmissionRepo;
use wildcal_domain::{Submission, SubmissionStatus, ID};

#[async_trait::async_trait]
pub trait ISubmissionRepo: Send + Sync {
    async fn insert(&self, submission: &Submission) -> anyhow::Result<()>;
    async fn save(&self, submission: &Submission) -> anyhow::Result<()>;
    async fn find(&self, submission_id: &ID) -> Option<Submission>;
    async fn find_by_status(&self, status: SubmissionStatus) -> anyhow::Result<Vec<Submission>>;
}
