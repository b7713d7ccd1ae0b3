use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::athlete::{
        AthleteFilter, AthleteResponse, AthleteSummary, CreateAthleteRequest,
        UpdateAthleteRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/athletes",
    params(AthleteFilter),
    responses(
        (status = 200, description = "Athletes matching the filters", body = Vec<AthleteSummary>)
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(db): State<Database>,
    Query(filter): Query<AthleteFilter>,
) -> Result<Response, WebError> {
    let mut session = db.session().await?;
    let athletes = services::list_athletes(&mut session, &filter).await?;

    let response: Vec<AthleteSummary> = athletes.into_iter().map(AthleteSummary::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let mut session = db.session().await?;
    let athlete = services::get_athlete(&mut session, id).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    post,
    path = "/athletes",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error or unknown category/training center"),
        (status = 409, description = "An athlete with this CPF already exists")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Json(req): Json<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let mut session = db.session().await?;
    let athlete = services::create_athlete(&mut session, &req).await?;
    session.commit().await?;

    Ok((StatusCode::CREATED, Json(AthleteResponse::from(athlete))).into_response())
}

#[utoipa::path(
    patch,
    path = "/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let mut session = db.session().await?;
    let updated = services::update_athlete(&mut session, id, &update_req).await?;
    session.commit().await.inspect_err(|e| {
        tracing::error!(athlete_id = %id, "Failed to commit athlete update: {}", e);
    })?;

    Ok(Json(AthleteResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let mut session = db.session().await?;
    services::delete_athlete(&mut session, id).await?;
    session.commit().await.inspect_err(|e| {
        tracing::error!(athlete_id = %id, "Failed to commit athlete deletion: {}", e);
    })?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
