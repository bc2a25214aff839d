use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::instrument;

use super::{dto::AuthRequest, repo_types::PublicAccount, services};
use crate::{
    errors::{ApiResponse, AppError},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth", post(authenticate))
}

#[instrument(skip(state, payload))]
pub async fn authenticate(
    State(state): State<AppState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PublicAccount>>, AppError> {
    let Json(payload) = payload?;
    let account = match payload {
        AuthRequest::Signup(req) => services::signup(&state, req).await?,
        AuthRequest::Login(req) => services::login(&state, req).await?,
    };
    Ok(ApiResponse::ok(account))
}
