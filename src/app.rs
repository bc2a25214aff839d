use std::net::SocketAddr;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::{auth, catalog, exercises, meals, profile, summary};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(catalog::router())
                .merge(meals::router())
                .merge(exercises::router())
                .merge(summary::router())
                .merge(profile::router())
                .merge(auth::router())
                .route("/health", get(|| async { "ok" })),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!(
                        "http_request",
                        %method,
                        uri = %uri,
                        status = tracing::field::Empty
                    )
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        let latency_ms = latency.as_millis() as u64;
                        if status.is_server_error() {
                            tracing::error!(%status, latency_ms, "response");
                        } else {
                            tracing::info!(%status, latency_ms, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router, addr: &str) -> anyhow::Result<()> {
    let addr: SocketAddr = addr.parse()?;
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn log_list_summarize_delete() {
        let app = build_app(AppState::fake());

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/meals/log",
            Some(json!({ "foodId": 1, "quantity": 1, "mealType": "Lunch" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["calories"], 165);
        let meal_id = body["data"]["id"].as_str().unwrap().to_string();
        let day = body["data"]["date"].as_str().unwrap().to_string();

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/exercises/log",
            Some(json!({ "exerciseId": 1, "quantity": 30 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["caloriesBurned"], 300);

        let (status, body) = call(&app, Method::GET, &format!("/api/meals?date={day}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (status, body) = call(&app, Method::GET, &format!("/api/summary?date={day}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["caloriesConsumed"], 165);
        assert_eq!(body["data"]["caloriesBurned"], 300);
        assert_eq!(body["data"]["calorieBalance"], 2135);

        let (status, body) =
            call(&app, Method::DELETE, &format!("/api/meals/{meal_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Meal deleted successfully");

        let (status, body) =
            call(&app, Method::DELETE, &format!("/api/meals/{meal_id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Meal not found");
    }

    #[tokio::test]
    async fn empty_day_summary_is_not_available() {
        let app = build_app(AppState::fake());
        let (status, body) = call(&app, Method::GET, "/api/summary?date=2023-05-19", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["grade"], "N/A");
        assert_eq!(body["data"]["suggestions"].as_array().unwrap().len(), 3);
        assert!(body["data"]["score"].is_null());
    }

    #[tokio::test]
    async fn weekly_has_seven_rows() {
        let app = build_app(AppState::fake());
        let (status, body) =
            call(&app, Method::GET, "/api/summary/weekly?date=2023-05-19", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn bad_input_uses_failure_envelope() {
        let app = build_app(AppState::fake());

        let (status, body) = call(&app, Method::GET, "/api/meals?date=19-05-2023", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/meals/log",
            Some(json!({ "foodId": 1, "quantity": 0, "mealType": "Lunch" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please enter a valid quantity greater than 0.");

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/meals/log",
            Some(json!({ "foodId": 999, "quantity": 1, "mealType": "Lunch" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Food not found");

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/meals",
            Some(json!({ "name": "Toast" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/meals",
            Some(json!({
                "name": "Mystery shake",
                "calories": 500,
                "protein": 1e308,
                "carbs": 10,
                "fat": 1,
                "quantity": 1,
                "mealType": "Snack"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Protein must be at most 10000 g");

        let (status, _) = call(&app, Method::DELETE, "/api/exercises/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn catalog_search() {
        let app = build_app(AppState::fake());
        let (status, body) = call(&app, Method::GET, "/api/catalog/foods?q=CHICK", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["name"], "Chicken Breast");

        let (status, body) = call(
            &app,
            Method::GET,
            "/api/catalog/exercises?q=&category=Strength",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn profile_update_and_read_back() {
        let app = build_app(AppState::fake());
        let (status, body) = call(
            &app,
            Method::PUT,
            "/api/user",
            Some(json!({ "name": "John Doe", "calorieGoal": 2200 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["calorieGoal"], 2200);

        let (status, body) = call(
            &app,
            Method::PUT,
            "/api/user",
            Some(json!({ "dietType": "carnivore" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (_, body) = call(&app, Method::GET, "/api/user", None).await;
        assert_eq!(body["data"]["name"], "John Doe");
        assert_eq!(body["data"]["dietType"], "balanced");
    }

    #[tokio::test]
    async fn signup_and_login_actions() {
        let app = build_app(AppState::fake());
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/auth",
            Some(json!({
                "action": "signup",
                "name": "John",
                "email": "john@example.com",
                "password": "Password1"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["email"], "john@example.com");
        assert!(body["data"].get("passwordHash").is_none());

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/auth",
            Some(json!({
                "action": "login",
                "email": "john@example.com",
                "password": "wrong-Passw0rd"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid email or password");
    }
}
