//! HTTP route definitions.

mod contact;
mod health;
mod portfolio;

use crate::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(portfolio::routes())
        .merge(contact::routes())
}

/// Build the full application: routes, static fallback and middleware.
pub fn create_app(state: AppState) -> Router {
    let mut router = create_routes();

    if let Some(dir) = &state.config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, EmailJsConfig};
    use crate::content::parse_portfolio;
    use crate::delivery::{Delivery, EmailJsClient, DEFAULT_TIMEOUT};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::routing::post;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        app_with(Delivery::Log)
    }

    fn app_with(delivery: Delivery) -> Router {
        let config = Config::from_lookup(|key: &str| {
            (key == "PORTFOLIO_PATH").then(|| "portfolio.example.json".to_string())
        })
        .unwrap();
        let portfolio = parse_portfolio(include_str!("../../portfolio.example.json")).unwrap();

        create_app(AppState {
            config: Arc::new(config),
            portfolio: Arc::new(portfolio),
            delivery: Arc::new(delivery),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        send_to(app(), request).await
    }

    async fn send_to(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn portfolio_lists_projects() {
        let (status, body) = send(get("/api/portfolio")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["projects"].as_array().unwrap().len(), 3);
        assert_eq!(body["projects"][0]["githubUrl"], "https://github.com/yourusername/your-repo");
    }

    #[tokio::test]
    async fn unknown_project_is_404() {
        let (status, body) = send(get("/api/projects/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Project 99 not found");
    }

    #[tokio::test]
    async fn carousel_view_places_items() {
        let (status, body) = send(get("/api/carousel?current=0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currentIndex"], 0);
        assert_eq!(body["items"][0]["position"]["offset"], "CENTER");
        assert_eq!(body["items"][1]["position"]["offset"], "NEAR_RIGHT");
        assert_eq!(body["items"][2]["position"]["offset"], "NEAR_LEFT");
        assert_eq!(body["indicators"], json!([true, false, false]));
    }

    #[tokio::test]
    async fn carousel_view_rejects_out_of_range() {
        let (status, _) = send(get("/api/carousel?current=7")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn carousel_command_moves() {
        let request = post_json(
            "/api/carousel",
            json!({"currentIndex": 0, "command": {"type": "previous"}}),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transition"], json!({"from": 0, "to": 2}));
        assert_eq!(body["view"]["currentIndex"], 2);
    }

    #[tokio::test]
    async fn contact_accepts_complete_message() {
        let request = post_json(
            "/api/contact",
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "Nice work"
            }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["status"], "sent");
        assert!(body["id"].is_string());
    }

    #[tokio::test]
    async fn contact_rejects_missing_fields() {
        let request = post_json("/api/contact", json!({"name": "Ada", "subject": "Hi"}));
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "incomplete input: email, message");
    }

    /// EmailJS client pointed at a local endpoint that refuses every send.
    async fn refusing_emailjs() -> Delivery {
        let upstream = Router::new().route(
            "/send",
            post(|| async { (StatusCode::FORBIDDEN, "account secret 9f2c") }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });

        let config = EmailJsConfig {
            service_id: "service_1".into(),
            template_id: "template_1".into(),
            public_key: "public_1".into(),
            private_key: None,
            to_email: "me@example.com".into(),
        };
        let endpoint = format!("http://{}/send", addr);
        Delivery::EmailJs(EmailJsClient::with_endpoint(config, endpoint, DEFAULT_TIMEOUT).unwrap())
    }

    #[tokio::test]
    async fn contact_delivery_failure_is_502() {
        let request = post_json(
            "/api/contact",
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "Nice work"
            }),
        );
        let (status, body) = send_to(app_with(refusing_emailjs().await), request).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            body,
            json!({
                "error": "Failed to send message. Please try again.",
                "details": "delivery provider returned status 403"
            })
        );
    }
}
