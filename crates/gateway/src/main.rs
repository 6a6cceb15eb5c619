//! Hadith Quiz API Gateway
//!
//! The entry point for all API requests.
//! Handles:
//! - Hadith, companion and source management
//! - Quiz issue, answer check and answer reveal
//! - Observability (logging, metrics, tracing)

mod handlers;
mod middleware;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use hadith_quiz_common::{
    config::{AppConfig, ObservabilityConfig},
    db::{DbPool, Repository},
    metrics,
    store::HadithStore,
    QuizService,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DbPool,
    pub store: Arc<dyn HadithStore>,
    pub quiz: Arc<QuizService>,
    pub metrics: PrometheusHandle,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    init_tracing(&config.observability);

    info!(
        service = %config.observability.service_name,
        "Starting Hadith Quiz API Gateway v{}",
        hadith_quiz_common::VERSION
    );

    // Initialize metrics
    let metrics_handle = PrometheusBuilder::new()
        .set_buckets(metrics::LATENCY_BUCKETS)?
        .install_recorder()?;
    metrics::register_metrics();

    // Initialize database connection and state
    info!("Connecting to database...");
    let state = build_state(config, metrics_handle).await?;

    // Build the router
    let app = create_router(state.clone());

    // Start the server
    let addr = (state.config.server.host.as_str(), state.config.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logging {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Connect the store, create missing tables and wire the quiz service
async fn build_state(
    config: AppConfig,
    metrics: PrometheusHandle,
) -> hadith_quiz_common::Result<AppState> {
    let db = DbPool::new(&config.database).await?;
    db.create_schema().await?;

    let store: Arc<dyn HadithStore> = Arc::new(Repository::new(db.clone()));
    let quiz = Arc::new(QuizService::new(store.clone(), &config.quiz));

    Ok(AppState {
        config: Arc::new(config),
        db,
        store,
        quiz,
        metrics,
    })
}

/// Create the main application router
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request ID propagation
    let request_id = SetRequestIdLayer::x_request_id(MakeRequestUuid);
    let propagate_id = PropagateRequestIdLayer::x_request_id();

    // API routes
    let api_routes = Router::new()
        // Hadith endpoints
        .route("/hadiths", get(handlers::hadiths::list_hadiths).post(handlers::hadiths::create_hadith))
        .route("/hadiths/{id}", get(handlers::hadiths::get_hadith))

        // Vocabulary endpoints
        .route("/companions", get(handlers::companions::list_companions).post(handlers::companions::create_companion))
        .route("/sources", get(handlers::sources::list_sources).post(handlers::sources::create_source))

        // Quiz endpoints
        .route("/quiz/random", get(handlers::quiz::random_quiz))
        .route("/quiz/check", post(handlers::quiz::check_answer))
        .route("/quiz/answer/{id}", get(handlers::quiz::correct_answer))
        .route_layer(from_fn(middleware::metrics::track_requests));

    // Compose the app
    Router::new()
        // Health endpoints
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))
        .route("/metrics", get(handlers::health::metrics))
        .nest("/api", api_routes)
        .layer(TimeoutLayer::new(state.config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(request_id)
        .layer(propagate_id)
        .with_state(state)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown..."),
        _ = terminate => info!("Received SIGTERM, starting shutdown..."),
    }
}
