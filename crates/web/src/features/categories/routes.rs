use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_category, get_category, list_categories};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/", get(list_categories).post(create_category))
        .route("/categories/:id", get(get_category))
}
