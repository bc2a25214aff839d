use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{dto::ProfileUpdate, repo_types::Profile, services};
use crate::{
    errors::{ApiResponse, AppError},
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/user", get(get_profile).put(update_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(State(state): State<AppState>) -> Json<ApiResponse<Profile>> {
    ApiResponse::ok(services::get_profile(&state).await)
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfileUpdate>, JsonRejection>,
) -> Result<Json<ApiResponse<Profile>>, AppError> {
    let Json(payload) = payload?;
    let profile = services::update_profile(&state, payload).await?;
    Ok(ApiResponse::ok(profile))
}
