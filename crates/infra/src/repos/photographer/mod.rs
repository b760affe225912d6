mod inmemory;
mod postgres;

pub use inmemory::InMemoryPhotographerRepo;
pub use postgres::PostgresPhotographerRepo;
use wildcal_domain::{Photographer, ID};

#[async_trait::async_trait]
pub trait IPhotographerRepo: Send + Sync {
    async fn insert(&self, photographer: &Photographer) -> anyhow::Result<()>;
    async fn find(&self, photographer_id: &ID) -> Option<Photographer>;
    /// Email is the natural key for photographers, so this is the lookup
    /// the submission intake goes through
    async fn find_by_email(&self, email: &str) -> Option<Photographer>;
}
