mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;
pub mod services;

pub use repo::ProfileStore;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::profile_routes()
}
