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
    dto::{AddExerciseRequest, LogExerciseRequest},
    repo_types::ExerciseEntry,
    services,
};
use crate::{
    catalog,
    day::{today_utc, DayQuery},
    errors::{ApiResponse, AppError, MessageResponse},
    state::AppState,
};

pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/exercises", get(list_exercises).post(add_exercise))
        .route("/exercises/log", post(log_exercise))
        .route("/exercises/:id", delete(delete_exercise))
}

#[instrument(skip(state, query))]
pub async fn list_exercises(
    State(state): State<AppState>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<ExerciseEntry>>>, AppError> {
    let Query(query) = query?;
    let date = query.resolve(today_utc())?;
    let exercises = services::exercises_for_day(&state, date).await?;
    Ok(ApiResponse::ok(exercises))
}

#[instrument(skip(state, payload))]
pub async fn add_exercise(
    State(state): State<AppState>,
    payload: Result<Json<AddExerciseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<ExerciseEntry>>), AppError> {
    let Json(payload) = payload?;
    let exercise = services::exercise_from_request(payload, OffsetDateTime::now_utc())
        .map_err(|e| {
            warn!(error = %e, "invalid exercise payload");
            e
        })?;
    let exercise = services::record_exercise(&state, exercise).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(exercise)))
}

#[instrument(skip(state, payload))]
pub async fn log_exercise(
    State(state): State<AppState>,
    payload: Result<Json<LogExerciseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<ExerciseEntry>>), AppError> {
    let Json(payload) = payload?;
    let item = catalog::find_exercise(payload.exercise_id)?;
    let exercise =
        services::exercise_from_catalog(item, payload.quantity, OffsetDateTime::now_utc())?;
    let exercise = services::record_exercise(&state, exercise).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(exercise)))
}

#[instrument(skip(state))]
pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = Uuid::parse_str(id.trim())
        .map_err(|_| AppError::validation("Exercise ID is required"))?;
    services::delete_exercise(&state, id).await?;
    Ok(MessageResponse::ok("Exercise deleted successfully"))
}
