pub mod health;
pub mod page;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Page and JSON routes; anything else is looked up in the assets directory.
pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(page::handle_page))
        .route("/health", get(health::health_handler))
        .route("/profile", get(page::handle_profile))
        .fallback_service(assets)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::data::sample_profile;
    use crate::models::Profile;

    fn test_state(assets_dir: &Path) -> AppState {
        AppState {
            profile: Arc::new(sample_profile()),
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                profile_path: None,
                assets_dir: assets_dir.to_path_buf(),
                export_path: None,
            },
        }
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_light_page_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()));

        let response = send_get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("NURUL AINA HAMID"));
        assert!(!html.contains(r#"class="dark""#));
    }

    #[tokio::test]
    async fn test_dark_mode_query_sets_root_class() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()));

        let html = body_text(send_get(app, "/?mode=dark").await).await;
        assert!(html.contains(r#"<html lang="en" class="dark""#));
        assert!(html.contains(r#"href="/?mode=light""#));
    }

    #[tokio::test]
    async fn test_unknown_mode_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()));

        let response = send_get(app, "/?mode=sepia").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()));

        let response = send_get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[tokio::test]
    async fn test_profile_endpoint_returns_loaded_record() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()));

        let response = send_get(app, "/profile").await;
        assert_eq!(response.status(), StatusCode::OK);
        let profile: Profile = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(profile, sample_profile());
    }

    #[tokio::test]
    async fn test_assets_are_served_from_assets_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cv.pdf"), b"%PDF-1.4 test").unwrap();
        let app = build_router(test_state(dir.path()));

        let response = send_get(app.clone(), "/cv.pdf").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "%PDF-1.4 test");

        let missing = send_get(app, "/me.jpg").await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
