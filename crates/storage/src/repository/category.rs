use chrono::Utc;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::dto::category::CreateCategoryRequest;
use crate::error::{Result, StorageError};
use crate::models::Category;

pub const NAME_CONSTRAINT: &str = "categories_name_key";

pub struct CategoryRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&mut self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT pk_id, id, name, created_at FROM categories ORDER BY name",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(categories)
    }

    pub async fn find_by_id(&mut self, id: Uuid) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            "SELECT pk_id, id, name, created_at FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Resolve a category by its name. Absence is not an error here.
    pub async fn find_by_name(&mut self, name: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT pk_id, id, name, created_at FROM categories WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(category)
    }

    pub async fn create(&mut self, req: &CreateCategoryRequest) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, name, created_at)
            VALUES ($1, $2, $3)
            RETURNING pk_id, id, name, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(Utc::now().naive_utc())
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation(NAME_CONSTRAINT, || {
                format!("Category {} already exists", req.name)
            })
        })?;

        Ok(category)
    }
}
