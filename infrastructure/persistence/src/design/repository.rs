use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::design::model::Design;
use business::domain::design::repository::DesignRepository;
use business::domain::errors::RepositoryError;

use crate::errors::map_sqlx_error;

pub struct DesignRepositoryPostgres {
    pool: PgPool,
}

impl DesignRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DesignRepository for DesignRepositoryPostgres {
    async fn save(&self, design: &Design) -> Result<(), RepositoryError> {
        // Designs are write-once.
        sqlx::query(
            r#"INSERT INTO designs (id, user_id, prompt, enhanced_prompt, image_url, style, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(design.id)
        .bind(design.user_id)
        .bind(&design.prompt)
        .bind(&design.enhanced_prompt)
        .bind(&design.image_url)
        .bind(&design.style)
        .bind(design.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}
