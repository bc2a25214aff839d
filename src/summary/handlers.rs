use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{
    engine::{DailyAggregate, DaySummary},
    services,
};
use crate::{
    day::{today_utc, DayQuery},
    errors::{ApiResponse, AppError},
    state::AppState,
};

pub fn summary_routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/summary/weekly", get(get_weekly))
}

#[instrument(skip(state, query))]
pub async fn get_summary(
    State(state): State<AppState>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<DailyAggregate>>, AppError> {
    let Query(query) = query?;
    let date = query.resolve(today_utc())?;
    Ok(ApiResponse::ok(services::daily_summary(&state, date).await?))
}

#[instrument(skip(state, query))]
pub async fn get_weekly(
    State(state): State<AppState>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<DaySummary>>>, AppError> {
    let Query(query) = query?;
    let end = query.resolve(today_utc())?;
    Ok(ApiResponse::ok(services::weekly_summary(&state, end).await?))
}
