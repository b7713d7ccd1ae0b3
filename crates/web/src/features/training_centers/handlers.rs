use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::training_center::{CreateTrainingCenterRequest, TrainingCenterResponse},
    repository::training_center::TrainingCenterRepository,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/training-centers",
    responses(
        (status = 200, description = "List all training centers", body = Vec<TrainingCenterResponse>)
    ),
    tag = "training-centers"
)]
pub async fn list_training_centers(State(db): State<Database>) -> Result<Response, WebError> {
    let mut session = db.session().await?;
    let centers = TrainingCenterRepository::new(&mut session).list().await?;

    let response: Vec<TrainingCenterResponse> =
        centers.into_iter().map(TrainingCenterResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/training-centers/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 200, description = "Training center found", body = TrainingCenterResponse),
        (status = 404, description = "Training center not found")
    ),
    tag = "training-centers"
)]
pub async fn get_training_center(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let mut session = db.session().await?;
    let center = TrainingCenterRepository::new(&mut session)
        .find_by_id(id)
        .await?;

    Ok(Json(TrainingCenterResponse::from(center)).into_response())
}

#[utoipa::path(
    post,
    path = "/training-centers",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Training center created successfully", body = TrainingCenterResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A training center with this name already exists")
    ),
    tag = "training-centers"
)]
pub async fn create_training_center(
    State(db): State<Database>,
    Json(req): Json<CreateTrainingCenterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let mut session = db.session().await?;
    let center = TrainingCenterRepository::new(&mut session)
        .create(&req)
        .await?;
    session.commit().await?;

    tracing::info!(training_center_id = %center.id, name = %center.name, "Training center created");

    Ok((StatusCode::CREATED, Json(TrainingCenterResponse::from(center))).into_response())
}
