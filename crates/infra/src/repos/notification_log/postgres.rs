use super::INotificationLogRepo;
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};
use std::str::FromStr;
use wildcal_domain::{NotificationChannel, NotificationLogEntry, NotificationStatus};

pub struct PostgresNotificationLogRepo {
    pool: PgPool,
}

impl PostgresNotificationLogRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationLogEntryRaw {
    notification_uid: Uuid,
    date: NaiveDate,
    photographer_uid: Uuid,
    channel: String,
    status: String,
    details: serde_json::Value,
    created_at: i64,
}

impl From<NotificationLogEntryRaw> for NotificationLogEntry {
    fn from(e: NotificationLogEntryRaw) -> Self {
        Self {
            id: e.notification_uid.into(),
            date: e.date,
            photographer_id: e.photographer_uid.into(),
            // Both columns have CHECK constraints on the valid variants
            channel: NotificationChannel::from_str(&e.channel).unwrap(),
            status: NotificationStatus::from_str(&e.status).unwrap(),
            details: e.details,
            created_at: e.created_at,
        }
    }
}

#[async_trait::async_trait]
impl INotificationLogRepo for PostgresNotificationLogRepo {
    async fn insert(&self, entry: &NotificationLogEntry) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications_log
            (notification_uid, date, photographer_uid, channel, status, details, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.id.inner_ref())
        .bind(entry.date)
        .bind(entry.photographer_id.inner_ref())
        .bind(entry.channel.to_string())
        .bind(entry.status.to_string())
        .bind(&entry.details)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_date(&self, date: NaiveDate) -> anyhow::Result<Vec<NotificationLogEntry>> {
        let entries = sqlx::query_as::<_, NotificationLogEntryRaw>(
            r#"
            SELECT * FROM notifications_log
            WHERE date = $1
            ORDER BY created_at
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries.into_iter().map(|entry| entry.into()).collect())
    }
}
