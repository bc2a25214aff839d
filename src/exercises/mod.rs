mod dto;
pub mod handlers;
mod repo_types;
pub mod services;

pub use repo_types::ExerciseEntry;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::exercise_routes()
}
