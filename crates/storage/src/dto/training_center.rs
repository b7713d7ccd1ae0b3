use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::TrainingCenter;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingCenterResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub owner: String,
}

/// Request payload for registering a training center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTrainingCenterRequest {
    #[validate(length(
        min = 1,
        max = 20,
        message = "Name must be between 1 and 20 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 60,
        message = "Address must be between 1 and 60 characters"
    ))]
    pub address: String,

    #[validate(length(
        min = 1,
        max = 30,
        message = "Owner must be between 1 and 30 characters"
    ))]
    pub owner: String,
}

impl From<TrainingCenter> for TrainingCenterResponse {
    fn from(center: TrainingCenter) -> Self {
        Self {
            id: center.id,
            name: center.name,
            address: center.address,
            owner: center.owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enforces_column_limits() {
        let req = CreateTrainingCenterRequest {
            name: "CT King".to_string(),
            address: "Rua X, Q02".to_string(),
            owner: "o".repeat(31),
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("owner"));
    }
}
