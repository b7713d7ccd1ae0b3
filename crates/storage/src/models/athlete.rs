use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Row of the `athletes` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    #[serde(skip)]
    pub pk_id: i32,
    pub id: Uuid,
    pub name: String,
    pub cpf: String,
    pub age: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub weight: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub height: Decimal,
    pub sex: String,
    pub created_at: chrono::NaiveDateTime,
    #[serde(skip)]
    pub category_id: i32,
    #[serde(skip)]
    pub training_center_id: i32,
}

/// Athlete joined with the names of its category and training center.
#[derive(Debug, Clone, FromRow)]
pub struct AthleteRecord {
    pub id: Uuid,
    pub name: String,
    pub cpf: String,
    pub age: i32,
    pub weight: Decimal,
    pub height: Decimal,
    pub sex: String,
    pub created_at: chrono::NaiveDateTime,
    pub category_name: String,
    pub training_center_name: String,
}
