use chrono::Utc;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::dto::training_center::CreateTrainingCenterRequest;
use crate::error::{Result, StorageError};
use crate::models::TrainingCenter;

pub const NAME_CONSTRAINT: &str = "training_centers_name_key";

pub struct TrainingCenterRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&mut self) -> Result<Vec<TrainingCenter>> {
        let centers = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT pk_id, id, name, address, owner, created_at
            FROM training_centers
            ORDER BY name
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(centers)
    }

    pub async fn find_by_id(&mut self, id: Uuid) -> Result<TrainingCenter> {
        sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT pk_id, id, name, address, owner, created_at
            FROM training_centers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Resolve a training center by its name. Absence is not an error here.
    pub async fn find_by_name(&mut self, name: &str) -> Result<Option<TrainingCenter>> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT pk_id, id, name, address, owner, created_at
            FROM training_centers
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(center)
    }

    pub async fn create(&mut self, req: &CreateTrainingCenterRequest) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            INSERT INTO training_centers (id, name, address, owner, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING pk_id, id, name, address, owner, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.address)
        .bind(&req.owner)
        .bind(Utc::now().naive_utc())
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation(NAME_CONSTRAINT, || {
                format!("Training center {} already exists", req.name)
            })
        })?;

        Ok(center)
    }
}
