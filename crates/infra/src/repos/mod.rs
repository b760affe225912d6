mod assignment;
mod event;
mod notification_log;
mod photographer;
mod shared;
mod submission;

use assignment::{IAssignmentRepo, InMemoryAssignmentRepo, PostgresAssignmentRepo};
use event::{IEventRepo, InMemoryEventRepo, PostgresEventRepo};
use notification_log::{INotificationLogRepo, InMemoryNotificationLogRepo, PostgresNotificationLogRepo};
use photographer::{IPhotographerRepo, InMemoryPhotographerRepo, PostgresPhotographerRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use submission::{ISubmissionRepo, InMemorySubmissionRepo, PostgresSubmissionRepo};
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub photographers: Arc<dyn IPhotographerRepo>,
    pub submissions: Arc<dyn ISubmissionRepo>,
    pub assignments: Arc<dyn IAssignmentRepo>,
    pub notification_log: Arc<dyn INotificationLogRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");
        Ok(Self {
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            photographers: Arc::new(PostgresPhotographerRepo::new(pool.clone())),
            submissions: Arc::new(PostgresSubmissionRepo::new(pool.clone())),
            assignments: Arc::new(PostgresAssignmentRepo::new(pool.clone())),
            notification_log: Arc::new(PostgresNotificationLogRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            photographers: Arc::new(InMemoryPhotographerRepo::new()),
            submissions: Arc::new(InMemorySubmissionRepo::new()),
            assignments: Arc::new(InMemoryAssignmentRepo::new()),
            notification_log: Arc::new(InMemoryNotificationLogRepo::new()),
        }
    }
}
