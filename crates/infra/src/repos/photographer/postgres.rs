use super::IPhotographerRepo;
use sqlx::{types::Uuid, FromRow, PgPool};
use wildcal_domain::{Photographer, ID};

pub struct PostgresPhotographerRepo {
    pool: PgPool,
}

impl PostgresPhotographerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PhotographerRaw {
    photographer_uid: Uuid,
    name: String,
    instagram_handle: Option<String>,
    email: String,
}

impl From<PhotographerRaw> for Photographer {
    fn from(p: PhotographerRaw) -> Self {
        Self {
            id: p.photographer_uid.into(),
            name: p.name,
            instagram_handle: p.instagram_handle,
            email: p.email,
        }
    }
}

#[async_trait::async_trait]
impl IPhotographerRepo for PostgresPhotographerRepo {
    async fn insert(&self, photographer: &Photographer) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO photographers
            (photographer_uid, name, instagram_handle, email)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(photographer.id.inner_ref())
        .bind(&photographer.name)
        .bind(&photographer.instagram_handle)
        .bind(&photographer.email)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, photographer_id: &ID) -> Option<Photographer> {
        sqlx::query_as::<_, PhotographerRaw>(
            r#"
            SELECT * FROM photographers
            WHERE photographer_uid = $1
            "#,
        )
        .bind(photographer_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|photographer| photographer.into())
    }

    async fn find_by_email(&self, email: &str) -> Option<Photographer> {
        sqlx::query_as::<_, PhotographerRaw>(
            r#"
            SELECT * FROM photographers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|photographer| photographer.into())
    }
}
