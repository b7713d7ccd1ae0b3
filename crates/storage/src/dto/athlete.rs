use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::AthleteRecord;

/// Category referenced by name inside athlete payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoryRef {
    #[validate(length(
        min = 1,
        max = 10,
        message = "Category name must be between 1 and 10 characters"
    ))]
    pub name: String,
}

/// Training center referenced by name inside athlete payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TrainingCenterRef {
    #[validate(length(
        min = 1,
        max = 20,
        message = "Training center name must be between 1 and 20 characters"
    ))]
    pub name: String,
}

/// Full athlete representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
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
    pub category: CategoryRef,
    pub training_center: TrainingCenterRef,
}

/// Short projection returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteSummary {
    pub name: String,
    pub category: CategoryRef,
    pub training_center: TrainingCenterRef,
}

/// Exact-match filters for listing athletes; both apply when both are set
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AthleteFilter {
    pub name: Option<String>,
    pub cpf: Option<String>,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_cpf"))]
    pub cpf: String,

    #[validate(range(min = 0, message = "Age cannot be negative"))]
    pub age: i32,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    #[validate(custom(function = "validate_positive"))]
    pub weight: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    #[validate(custom(function = "validate_positive"))]
    pub height: Decimal,

    #[validate(custom(function = "validate_sex"))]
    pub sex: String,

    #[validate(nested)]
    pub category: CategoryRef,

    #[validate(nested)]
    pub training_center: TrainingCenterRef,
}

/// Request payload for a partial athlete update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(range(min = 0))]
    pub age: Option<i32>,
}

// Validation helpers
fn validate_cpf(cpf: &str) -> Result<(), validator::ValidationError> {
    if cpf.len() == 11 && cpf.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_cpf");
        error.message = Some("CPF must contain exactly 11 digits".into());
        Err(error)
    }
}

fn validate_positive(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("not_positive");
        error.message = Some("Value must be greater than zero".into());
        Err(error)
    }
}

fn validate_sex(sex: &str) -> Result<(), validator::ValidationError> {
    const VALID_SEXES: &[&str] = &["M", "F"];

    if VALID_SEXES.contains(&sex) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_sex"))
    }
}

impl From<AthleteRecord> for AthleteResponse {
    fn from(record: AthleteRecord) -> Self {
        Self {
            id: record.id,
            created_at: record.created_at,
            name: record.name,
            cpf: record.cpf,
            age: record.age,
            weight: record.weight,
            height: record.height,
            sex: record.sex,
            category: CategoryRef {
                name: record.category_name,
            },
            training_center: TrainingCenterRef {
                name: record.training_center_name,
            },
        }
    }
}

impl From<AthleteRecord> for AthleteSummary {
    fn from(record: AthleteRecord) -> Self {
        Self {
            name: record.name,
            category: CategoryRef {
                name: record.category_name,
            },
            training_center: TrainingCenterRef {
                name: record.training_center_name,
            },
        }
    }
}
