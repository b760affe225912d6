use super::IEventRepo;
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};
use std::str::FromStr;
use wildcal_domain::{CalendarEvent, EventType, ID};

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    date: NaiveDate,
    title: String,
    event_type: String,
    region: String,
    source: Option<String>,
    is_active: bool,
}

impl From<EventRaw> for CalendarEvent {
    fn from(e: EventRaw) -> Self {
        Self {
            id: e.event_uid.into(),
            date: e.date,
            title: e.title,
            // The column has a CHECK constraint on the valid variants
            event_type: EventType::from_str(&e.event_type).unwrap(),
            region: e.region,
            source: e.source,
            is_active: e.is_active,
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, event: &CalendarEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO events
            (event_uid, date, title, event_type, region, source, is_active)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(event.id.inner_ref())
        .bind(event.date)
        .bind(&event.title)
        .bind(event.event_type.to_string())
        .bind(&event.region)
        .bind(&event.source)
        .bind(event.is_active)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, event: &CalendarEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE events
            SET date = $2,
                title = $3,
                event_type = $4,
                region = $5,
                source = $6,
                is_active = $7
            WHERE event_uid = $1
            "#,
        )
        .bind(event.id.inner_ref())
        .bind(event.date)
        .bind(&event.title)
        .bind(event.event_type.to_string())
        .bind(&event.region)
        .bind(&event.source)
        .bind(event.is_active)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<CalendarEvent> {
        sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events
            WHERE event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|event| event.into())
    }

    async fn find_active_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<CalendarEvent>> {
        let events = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events
            WHERE date BETWEEN $1 AND $2 AND is_active = TRUE
            ORDER BY date
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(events.into_iter().map(|event| event.into()).collect())
    }
}
