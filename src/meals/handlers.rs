use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{instrument, warn};
use uuid::Uuid;

use super::{
    dto::{AddMealRequest, LogMealRequest},
    repo_types::MealEntry,
    services,
};
use crate::{
    catalog,
    day::{today_utc, DayQuery},
    errors::{ApiResponse, AppError, MessageResponse},
    state::AppState,
};

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(add_meal))
        .route("/meals/log", post(log_meal))
        .route("/meals/:id", delete(delete_meal))
}

#[instrument(skip(state, query))]
pub async fn list_meals(
    State(state): State<AppState>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<MealEntry>>>, AppError> {
    let Query(query) = query?;
    let date = query.resolve(today_utc())?;
    let meals = services::meals_for_day(&state, date).await?;
    Ok(ApiResponse::ok(meals))
}

#[instrument(skip(state, payload))]
pub async fn add_meal(
    State(state): State<AppState>,
    payload: Result<Json<AddMealRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MealEntry>>), AppError> {
    let Json(payload) = payload?;
    let meal = services::meal_from_request(payload, OffsetDateTime::now_utc()).map_err(|e| {
        warn!(error = %e, "invalid meal payload");
        e
    })?;
    let meal = services::record_meal(&state, meal).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(meal)))
}

#[instrument(skip(state, payload))]
pub async fn log_meal(
    State(state): State<AppState>,
    payload: Result<Json<LogMealRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MealEntry>>), AppError> {
    let Json(payload) = payload?;
    let food = catalog::find_food(payload.food_id)?;
    let meal = services::meal_from_food(
        food,
        payload.quantity,
        payload.meal_type,
        OffsetDateTime::now_utc(),
    )?;
    let meal = services::record_meal(&state, meal).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(meal)))
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = Uuid::parse_str(id.trim()).map_err(|_| AppError::validation("Meal ID is required"))?;
    services::delete_meal(&state, id).await?;
    Ok(MessageResponse::ok("Meal deleted successfully"))
}
