use axum::{
    extract::{rejection::QueryRejection, Query},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use super::{search_exercises, search_foods, ExerciseCategory, ExerciseItem, FoodItem};
use crate::{
    errors::{ApiResponse, AppError},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
}

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog/foods", get(list_foods))
        .route("/catalog/exercises", get(list_exercises))
}

#[instrument(skip(query))]
pub async fn list_foods(
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<&'static FoodItem>>>, AppError> {
    let Query(query) = query?;
    Ok(ApiResponse::ok(search_foods(&query.q)))
}

#[instrument(skip(query))]
pub async fn list_exercises(
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<&'static ExerciseItem>>>, AppError> {
    let Query(query) = query?;
    let category = match query.category.as_deref() {
        None | Some("") | Some("All") => None,
        Some(raw) => Some(
            ExerciseCategory::parse(raw)
                .ok_or_else(|| AppError::validation(format!("Unknown category '{}'", raw)))?,
        ),
    };
    Ok(ApiResponse::ok(search_exercises(&query.q, category)))
}
