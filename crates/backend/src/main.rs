pub mod handlers;
pub mod routes;
pub mod shared;
pub mod shell;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use contracts::shell::{base_url, ShellConfig};
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    system::tracing::initialize()?;

    // Простой middleware для логирования запросов
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use axum::body::to_bytes;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;
        let (parts, body) = response.into_parts();

        // Читаем тело ответа, чтобы узнать реальный размер
        let bytes = match to_bytes(body, usize::MAX).await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(
                    "{} {} -> {} body error after {}ms: {}",
                    method,
                    uri.path(),
                    parts.status.as_u16(),
                    start.elapsed().as_millis(),
                    e
                );
                return Response::from_parts(parts, Body::default());
            }
        };

        tracing::info!(
            "{:>6} {} -> {} | {:>5}ms | {:>9} | {}",
            method,
            uri.path(),
            parts.status.as_u16(),
            start.elapsed().as_millis(),
            shared::format::format_size(bytes.len()),
            chrono::Local::now().format("%H:%M:%S")
        );

        Response::from_parts(parts, Body::from(bytes))
    }

    let config = shared::config::load_config()?;

    let app_url = base_url::from_env();
    if std::env::var(base_url::APP_URL_ENV).is_err() {
        tracing::info!(
            "{} not set, using {}",
            base_url::APP_URL_ENV,
            base_url::DEFAULT_APP_URL
        );
    }
    tracing::info!("Public base URL: {}", app_url);

    let shell_config = ShellConfig::cinetron(app_url, config.site.verification.clone());
    shell_config.viewport.validate()?;

    let root_shell = shell::RootShell::new(shell_config)
        .with_hook(shell::hooks::ThemeInitHook)
        .with_client_entry(config.server.client_entry.clone());
    let state = routes::AppState::new(root_shell);

    let public_dir = shared::config::get_public_dir(&config);
    if !public_dir.exists() {
        // Icons, social images and the hero image degrade in the browser.
        tracing::warn!("Public directory not found: {}", public_dir.display());
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(state, &public_dir)
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
