use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod password;
pub mod repo;
mod repo_types;
pub mod services;

pub use repo::AccountStore;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
