use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TrainingCenter {
    #[serde(skip)]
    pub pk_id: i32,
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub owner: String,
    pub created_at: chrono::NaiveDateTime,
}
