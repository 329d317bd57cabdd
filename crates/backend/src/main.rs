//! MovieDesk Backend - Main entry point.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod infrastructure;

use app::App;
use infrastructure::{clock::SystemClock, seed, sqlite::SqliteMovieRepo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the backend may run from `crates/backend`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moviedesk_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MovieDesk Backend");

    // Load configuration
    let db_path = std::env::var("MOVIES_DB").unwrap_or_else(|_| "movies.db".into());
    let seed_csv =
        std::env::var("MOVIES_SEED_CSV").unwrap_or_else(|_| "movie_plots.csv".into());
    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| "crates/frontend/dist".into());
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "5000".into())
        .parse()
        .unwrap_or(5000);

    // Open the catalog and seed it on first run
    tracing::info!(path = %db_path, "Opening movie database");
    let repo = SqliteMovieRepo::new(&db_path, Arc::new(SystemClock::new())).await?;
    seed::seed_if_empty(&repo, &PathBuf::from(seed_csv)).await?;

    let app = Arc::new(App::new(Arc::new(repo)));

    let mut router = api::http::routes()
        .fallback_service(api::spa::spa_service(&PathBuf::from(static_dir)))
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer_from_env() {
        router = router.layer(cors);
    }

    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer_from_env() -> Option<CorsLayer> {
    let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())?;

    cors_layer(&allowed_origins)
}

/// `*` allows any origin; otherwise a comma-separated origin list
fn cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        return None;
    }
    Some(cors.allow_origin(origins))
}
