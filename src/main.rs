use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use editor_demo_server::config::Config;
use editor_demo_server::handlers;

#[tokio::main]
async fn main() {
    // Initialize tracing — JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "editor_demo_server=info,tower_http=info".parse().unwrap());

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("🚀 Editor demo server starting...");

    let config = Config::from_env();
    info!("📝 Configuration loaded");

    // CORS: permissive in dev, restrictive in production.
    let cors = if config.is_dev {
        info!("🔓 CORS: permissive (dev mode)");
        CorsLayer::permissive()
    } else {
        tracing::warn!(
            "🔒 CORS: restrictive (production mode). \
             Cross-origin requests will be denied."
        );
        CorsLayer::new()
    };

    let addr = config.server_addr();

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static dir {} not found — build the front-end first; asset requests will 404",
            config.static_dir.display()
        );
    }
    info!("📂 Serving static bundle from {}", config.static_dir.display());

    // The preview mock is layered ahead of routing so it sees every request,
    // matching or not, and forwards the rest untouched.
    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(middleware::from_fn(
            handlers::link_preview::mock_link_preview,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("🎧 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
