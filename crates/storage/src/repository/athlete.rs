use chrono::Utc;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::dto::athlete::{AthleteFilter, CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteRecord, Category, TrainingCenter};

/// Unique constraint guarding athlete CPFs.
pub const CPF_CONSTRAINT: &str = "athletes_cpf_key";

const SELECT_RECORD: &str = r#"
    SELECT a.id, a.name, a.cpf, a.age, a.weight, a.height, a.sex, a.created_at,
           c.name AS category_name,
           tc.name AS training_center_name
    FROM athletes a
    JOIN categories c ON c.pk_id = a.category_id
    JOIN training_centers tc ON tc.pk_id = a.training_center_id
"#;

pub struct AthleteRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// List athletes matching every filter that is set, in insertion order
    pub async fn list(&mut self, filter: &AthleteFilter) -> Result<Vec<AthleteRecord>> {
        let query = format!(
            "{SELECT_RECORD}
            WHERE ($1::text IS NULL OR a.name = $1)
              AND ($2::text IS NULL OR a.cpf = $2)
            ORDER BY a.pk_id"
        );

        let athletes = sqlx::query_as::<_, AthleteRecord>(&query)
            .bind(filter.name.as_deref())
            .bind(filter.cpf.as_deref())
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(athletes)
    }

    /// Find athlete by its public identifier
    pub async fn find_by_id(&mut self, id: Uuid) -> Result<AthleteRecord> {
        let query = format!("{SELECT_RECORD} WHERE a.id = $1");

        sqlx::query_as::<_, AthleteRecord>(&query)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Insert a new athlete linked to an already resolved category and training center
    pub async fn create(
        &mut self,
        req: &CreateAthleteRequest,
        category: &Category,
        training_center: &TrainingCenter,
    ) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes (id, name, cpf, age, weight, height, sex, created_at,
                                  category_id, training_center_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING pk_id, id, name, cpf, age, weight, height, sex, created_at,
                      category_id, training_center_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.cpf)
        .bind(req.age)
        .bind(req.weight)
        .bind(req.height)
        .bind(&req.sex)
        .bind(Utc::now().naive_utc())
        .bind(category.pk_id)
        .bind(training_center.pk_id)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation(CPF_CONSTRAINT, || {
                format!("An athlete with CPF {} is already registered", req.cpf)
            })
        })?;

        Ok(athlete)
    }

    /// Apply the fields present in `req`, leaving everything else as stored
    pub async fn update(&mut self, id: Uuid, req: &UpdateAthleteRequest) -> Result<AthleteRecord> {
        let existing = self.find_by_id(id).await?;

        let name = req.name.as_ref().unwrap_or(&existing.name);
        let age = req.age.unwrap_or(existing.age);

        let result = sqlx::query("UPDATE athletes SET name = $2, age = $3 WHERE id = $1")
            .bind(id)
            .bind(name)
            .bind(age)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.find_by_id(id).await
    }

    /// Delete an athlete by its public identifier
    pub async fn delete(&mut self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
