//! unitconv HTTP server
//!
//! Routes:
//! - `GET /units?type=...`: list unit symbols of a category
//! - `POST /convert?type=...`: convert `{"value", "from", "to"}`
//! - `GET /health`: liveness
//! - anything else: static files from the configured web root

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use server::{run, shutdown_signal};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn build_router(config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health))
        .route("/units", get(handlers::list_units))
        .route("/convert", post(handlers::convert))
        .fallback_service(ServeDir::new(&config.web_root))
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(&ServerConfig::default())
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, payload: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_number(response: Response) -> f64 {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn units_endpoint_lists_length_symbols_in_order() {
        let response = send_get(app(), "/units?type=length").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let units: Vec<String> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(units, ["mm", "cm", "m", "km", "in", "ft"]);
    }

    #[tokio::test]
    async fn units_endpoint_lists_weight_and_temperature() {
        let response = send_get(app(), "/units?type=weight").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"["g","kg","lb","oz"]"#);

        let response = send_get(app(), "/units?type=temperature").await;
        assert_eq!(body_text(response).await, r#"["c","f","k"]"#);
    }

    #[tokio::test]
    async fn units_endpoint_requires_type() {
        let response = send_get(app(), "/units").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "no type provided");

        let response = send_get(app(), "/units?type=").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn units_endpoint_rejects_unknown_category() {
        let response = send_get(app(), "/units?type=volume").await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_text(response).await, "Wrong type provided");

        // listing does not know the mass alias
        let response = send_get(app(), "/units?type=mass").await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn convert_endpoint_converts_length() {
        let response = post_json(
            app(),
            "/convert?type=length",
            r#"{"value":1000,"from":"m","to":"km"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_text(response).await, "1");
    }

    #[tokio::test]
    async fn convert_endpoint_converts_temperature() {
        let response = post_json(
            app(),
            "/convert?type=temperature",
            r#"{"value":-40,"from":"f","to":"c"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "-40");
    }

    #[tokio::test]
    async fn convert_endpoint_accepts_mass_alias_and_unlisted_units() {
        let response = post_json(
            app(),
            "/convert?type=mass",
            r#"{"value":5,"from":" KG ","to":"kg"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "5");

        let response = post_json(
            app(),
            "/convert?type=length",
            r#"{"value":1,"from":"mi","to":"yd"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!((body_number(response).await - 1760.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn convert_endpoint_matches_body_keys_case_insensitively() {
        let response = post_json(
            app(),
            "/convert?type=length",
            r#"{"Value":1000,"From":"m","To":"km"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "1");
    }

    #[tokio::test]
    async fn convert_endpoint_treats_null_body_as_empty_request() {
        let response = post_json(app(), "/convert?type=length", "null").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "from/to unit is required");
    }

    #[tokio::test]
    async fn repeated_type_parameter_uses_first_value() {
        let response = send_get(app(), "/units?type=length&type=weight").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"["mm","cm","m","km","in","ft"]"#);

        let response = post_json(
            app(),
            "/convert?type=weight&type=length",
            r#"{"value":1,"from":"kg","to":"g"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "1000");
    }

    #[tokio::test]
    async fn convert_endpoint_names_unknown_unit() {
        let response = post_json(
            app(),
            "/convert?type=length",
            r#"{"value":1,"from":"parsec","to":"m"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "invalid from unit: parsec");

        let response = post_json(
            app(),
            "/convert?type=weight",
            r#"{"value":1,"from":"kg","to":"stone"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "invalid to unit: stone");
    }

    #[tokio::test]
    async fn convert_endpoint_rejects_bad_requests() {
        let response = post_json(app(), "/convert", r#"{"value":1,"from":"m","to":"km"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "no type provided");

        let response = post_json(app(), "/convert?type=length", "not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = post_json(app(), "/convert?type=length", r#"{"value":1,"from":"","to":"km"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "from/to unit is required");
    }

    #[tokio::test]
    async fn convert_endpoint_checks_units_before_category() {
        let response = post_json(app(), "/convert?type=volume", r#"{"value":1}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = post_json(
            app(),
            "/convert?type=volume",
            r#"{"value":1,"from":"l","to":"ml"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn convert_endpoint_does_not_require_content_type() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/convert?type=temperature")
                    .body(Body::from(r#"{"value":100,"from":"c","to":"f"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "212");
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let response = send_get(app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let health: handlers::HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.service, "unitconv-server");
    }

    #[tokio::test]
    async fn static_files_are_served_from_web_root() {
        let root = std::env::temp_dir().join(format!("unitconv-web-{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("index.html"), "<h1>unitconv</h1>").unwrap();

        let config = ServerConfig {
            web_root: root.clone(),
            ..ServerConfig::default()
        };

        let response = send_get(build_router(&config), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<h1>unitconv</h1>");

        let response = send_get(build_router(&config), "/missing.js").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[tokio::test]
    async fn cors_headers_only_when_enabled() {
        let request = || {
            Request::builder()
                .method("GET")
                .uri("/units?type=length")
                .header("origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap()
        };

        let config = ServerConfig {
            enable_cors: true,
            web_root: PathBuf::from("web"),
            ..ServerConfig::default()
        };
        let response = build_router(&config).oneshot(request()).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );

        let response = app().oneshot(request()).await.unwrap();
        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
