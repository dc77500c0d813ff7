use std::path::Path;
use std::sync::Arc;

use axum::{
    handler::Handler,
    routing::{get, post},
    Router,
};
use contracts::shell::assets::{BROWSER_CONFIG_PATH, MANIFEST_PATH};
use contracts::system::vitals::VITALS_PATH;
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shell::RootShell;

/// Shared, immutable state of all handlers.
#[derive(Clone)]
pub struct AppState {
    pub shell: Arc<RootShell>,
}

impl AppState {
    pub fn new(shell: RootShell) -> Self {
        Self {
            shell: Arc::new(shell),
        }
    }
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, public_dir: &Path) -> Router {
    // Static assets first; misses render the not-found page inside the shell.
    let static_files = ServeDir::new(public_dir)
        .not_found_service(handlers::pages::not_found.with_state(state.clone()));

    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SHELL-DERIVED FILES
        // ========================================
        .route(MANIFEST_PATH, get(handlers::site_files::manifest))
        .route(BROWSER_CONFIG_PATH, get(handlers::site_files::browser_config))
        .route("/robots.txt", get(handlers::site_files::robots))
        // ========================================
        // COLLABORATOR API
        // ========================================
        .route(VITALS_PATH, post(handlers::vitals::report))
        .fallback_service(static_files)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::hooks::ThemeInitHook;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use contracts::shell::metadata::Verification;
    use contracts::shell::ShellConfig;
    use tower::ServiceExt;

    fn app() -> Router {
        let shell = RootShell::new(ShellConfig::cinetron(
            "http://localhost:3000",
            Verification::default(),
        ))
        .with_hook(ThemeInitHook);
        configure_routes(AppState::new(shell), Path::new("target/no-such-public-dir"))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_home_renders_shell() {
        let response = app().oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<title>Cinetron - Premium Movie Experience</title>"));
        assert!(html.contains(r#"data-mount="navbar""#));
        assert!(html.contains("Cinema, reimagined."));
    }

    #[tokio::test]
    async fn test_unknown_path_renders_not_found_in_shell() {
        let response = app().oneshot(get_request("/no/such/page")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_string(response).await;
        assert!(html.contains("<title>Not Found | Cinetron Premium</title>"));
        assert_eq!(html.matches(r#"data-mount="settings-modal""#).count(), 1);
    }

    #[tokio::test]
    async fn test_manifest_route() {
        let response = app().oneshot(get_request("/manifest.json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/manifest+json"
        );
        let manifest: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(manifest["start_url"], "/");
    }

    #[tokio::test]
    async fn test_vitals_route() {
        let ok = Request::builder()
            .method("POST")
            .uri("/api/vitals")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"path":"/","ttfb_ms":40.0,"dom_content_loaded_ms":300.0,"load_ms":650.0}"#,
            ))
            .unwrap();
        let response = app().oneshot(ok).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let bad = Request::builder()
            .method("POST")
            .uri("/api/vitals")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"path":"/","ttfb_ms":400.0,"dom_content_loaded_ms":300.0,"load_ms":650.0}"#,
            ))
            .unwrap();
        let response = app().oneshot(bad).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_health() {
        let response = app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(body_string(response).await, "ok");
    }
}
