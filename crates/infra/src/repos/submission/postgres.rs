use super::ISubmissionRepo;
use sqlx::{types::Uuid, FromRow, PgPool};
use std::str::FromStr;
use wildcal_domain::{Submission, SubmissionStatus, ID};

pub struct PostgresSubmissionRepo {
    pool: PgPool,
}

impl PostgresSubmissionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubmissionRaw {
    submission_uid: Uuid,
    photographer_uid: Uuid,
    image_original_url: String,
    image_web_url: String,
    caption: Option<String>,
    status: String,
    created_at: i64,
    approved_at: Option<i64>,
}

impl From<SubmissionRaw> for Submission {
    fn from(s: SubmissionRaw) -> Self {
        Self {
            id: s.submission_uid.into(),
            photographer_id: s.photographer_uid.into(),
            image_original_url: s.image_original_url,
            image_web_url: s.image_web_url,
            caption: s.caption,
            // The column has a CHECK constraint on the valid variants
            status: SubmissionStatus::from_str(&s.status).unwrap(),
            created_at: s.created_at,
            approved_at: s.approved_at,
        }
    }
}

#[async_trait::async_trait]
impl ISubmissionRepo for PostgresSubmissionRepo {
    async fn insert(&self, submission: &Submission) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO submissions
            (submission_uid, photographer_uid, image_original_url, image_web_url, caption, status, created_at, approved_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(submission.id.inner_ref())
        .bind(submission.photographer_id.inner_ref())
        .bind(&submission.image_original_url)
        .bind(&submission.image_web_url)
        .bind(&submission.caption)
        .bind(submission.status.to_string())
        .bind(submission.created_at)
        .bind(submission.approved_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, submission: &Submission) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE submissions
            SET status = $2,
                approved_at = $3,
                caption = $4
            WHERE submission_uid = $1
            "#,
        )
        .bind(submission.id.inner_ref())
        .bind(submission.status.to_string())
        .bind(submission.approved_at)
        .bind(&submission.caption)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, submission_id: &ID) -> Option<Submission> {
        sqlx::query_as::<_, SubmissionRaw>(
            r#"
            SELECT * FROM submissions
            WHERE submission_uid = $1
            "#,
        )
        .bind(submission_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|submission| submission.into())
    }

    async fn find_by_status(&self, status: SubmissionStatus) -> anyhow::Result<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, SubmissionRaw>(
            r#"
            SELECT * FROM submissions
            WHERE status = $1
            ORDER BY created_at
            "#,
        )
        .bind(status.to_string())
        .fetch_all(&self.pool)
        .await?;
        Ok(submissions.into_iter().map(|submission| submission.into()).collect())
    }
}
