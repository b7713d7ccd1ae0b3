use axum::{Router, routing::get};
use storage::Database;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
mod features;

use error::WebError;
use features::{athletes, categories, health, training_centers};

#[derive(OpenApi)]
#[openapi(
    info(title = "Workout API"),
    paths(
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::create_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::delete_athlete,
        categories::handlers::list_categories,
        categories::handlers::get_category,
        categories::handlers::create_category,
        training_centers::handlers::list_training_centers,
        training_centers::handlers::get_training_center,
        training_centers::handlers::create_training_center,
        health::health_check,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::AthleteSummary,
            storage::dto::athlete::CategoryRef,
            storage::dto::athlete::TrainingCenterRef,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::training_center::TrainingCenterResponse,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete registration and lookup"),
        (name = "categories", description = "Athlete categories"),
        (name = "training-centers", description = "Training centers athletes belong to"),
        (name = "health", description = "Liveness check"),
    )
)]
pub struct ApiDoc;

/// Builds the application router over the given database handle.
pub fn app(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .merge(athletes::routes::routes())
        .merge(categories::routes::routes())
        .merge(training_centers::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(|| async { WebError::NotFound })
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(db)
}
