mod app;
mod auth;
mod catalog;
mod config;
mod day;
mod errors;
mod events;
mod exercises;
mod meals;
mod profile;
mod state;
mod store;
mod summary;
mod validation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "fittrack=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = state::AppState::init()?;
    tracing::info!(
        calorie_goal = state.config.goals.calorie_goal,
        protein_goal_g = state.config.goals.protein_goal_g,
        burn_goal_kcal = state.config.goals.burn_goal_kcal,
        "daily goals loaded"
    );
    tokio::spawn(events::log_events(state.events.subscribe()));

    let addr = state.config.addr();
    app::serve(app::build_app(state), &addr).await
}
