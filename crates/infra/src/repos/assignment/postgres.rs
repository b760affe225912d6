use super::IAssignmentRepo;
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};
use wildcal_domain::Assignment;

pub struct PostgresAssignmentRepo {
    pool: PgPool,
}

impl PostgresAssignmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AssignmentRaw {
    date: NaiveDate,
    submission_uid: Option<Uuid>,
    pinned: bool,
    notes: Option<String>,
}

impl From<AssignmentRaw> for Assignment {
    fn from(a: AssignmentRaw) -> Self {
        Self {
            date: a.date,
            submission_id: a.submission_uid.map(|uid| uid.into()),
            pinned: a.pinned,
            notes: a.notes,
        }
    }
}

#[async_trait::async_trait]
impl IAssignmentRepo for PostgresAssignmentRepo {
    async fn upsert(&self, assignment: &Assignment) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO calendar_assignments
            (date, submission_uid, pinned, notes)
            VALUES($1, $2, $3, $4)
            ON CONFLICT (date) DO UPDATE
            SET submission_uid = $2,
                pinned = $3,
                notes = $4
            "#,
        )
        .bind(assignment.date)
        .bind(assignment.submission_id.as_ref().map(|id| *id.inner_ref()))
        .bind(assignment.pinned)
        .bind(&assignment.notes)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_date(&self, date: NaiveDate) -> Option<Assignment> {
        sqlx::query_as::<_, AssignmentRaw>(
            r#"
            SELECT * FROM calendar_assignments
            WHERE date = $1
            "#,
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|assignment| assignment.into())
    }

    async fn find_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<Assignment>> {
        let assignments = sqlx::query_as::<_, AssignmentRaw>(
            r#"
            SELECT * FROM calendar_assignments
            WHERE date BETWEEN $1 AND $2
            ORDER BY date
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(assignments.into_iter().map(|assignment| assignment.into()).collect())
    }
}
