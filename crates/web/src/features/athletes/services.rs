use sqlx::PgConnection;
use storage::{
    dto::athlete::{AthleteFilter, CreateAthleteRequest, UpdateAthleteRequest},
    error::{Result, StorageError},
    models::AthleteRecord,
    repository::{
        athlete::AthleteRepository, category::CategoryRepository,
        training_center::TrainingCenterRepository,
    },
};
use uuid::Uuid;

/// List athletes matching the filter
pub async fn list_athletes(
    conn: &mut PgConnection,
    filter: &AthleteFilter,
) -> Result<Vec<AthleteRecord>> {
    AthleteRepository::new(conn).list(filter).await
}

/// Get athlete by public id
pub async fn get_athlete(conn: &mut PgConnection, id: Uuid) -> Result<AthleteRecord> {
    AthleteRepository::new(conn).find_by_id(id).await
}

/// Resolve the category and training center by name, then insert the athlete
/// linked to both. Nothing is written when either name is unknown.
pub async fn create_athlete(
    conn: &mut PgConnection,
    request: &CreateAthleteRequest,
) -> Result<AthleteRecord> {
    let category = CategoryRepository::new(conn)
        .find_by_name(&request.category.name)
        .await?
        .ok_or_else(|| StorageError::RelatedNotFound {
            entity: "Category",
            name: request.category.name.clone(),
        })?;

    let training_center = TrainingCenterRepository::new(conn)
        .find_by_name(&request.training_center.name)
        .await?
        .ok_or_else(|| StorageError::RelatedNotFound {
            entity: "Training center",
            name: request.training_center.name.clone(),
        })?;

    let mut repo = AthleteRepository::new(conn);
    let athlete = repo.create(request, &category, &training_center).await?;

    tracing::info!(athlete_id = %athlete.id, "Athlete created");

    repo.find_by_id(athlete.id).await
}

/// Update an athlete
pub async fn update_athlete(
    conn: &mut PgConnection,
    id: Uuid,
    request: &UpdateAthleteRequest,
) -> Result<AthleteRecord> {
    AthleteRepository::new(conn).update(id, request).await
}

/// Delete an athlete
pub async fn delete_athlete(conn: &mut PgConnection, id: Uuid) -> Result<()> {
    AthleteRepository::new(conn).delete(id).await?;

    tracing::info!(athlete_id = %id, "Athlete deleted");

    Ok(())
}
