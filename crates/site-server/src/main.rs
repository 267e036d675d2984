//! CalorieCalc HTTP Server
//!
//! Axum-based server backing the marketing site: serves the WASM
//! frontend and creates Stripe checkout sessions.

mod handlers;
mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_payments::{PaymentGateway, StripeGateway};

use crate::handlers::{create_checkout, health_check};
use crate::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = Arc::new(AppConfig::from_env());

    // A missing Stripe credential is fatal here, never per-request.
    let gateway: Arc<dyn PaymentGateway> = Arc::new(
        StripeGateway::from_env()
            .context("refusing to start: STRIPE_SECRET_KEY must be configured")?,
    );
    tracing::info!("✓ Stripe configured");

    let state = AppState {
        gateway,
        config: config.clone(),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/checkout", post(create_checkout))
        // Static files (WASM frontend)
        .fallback_service(tower_http::services::ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("CalorieCalc server running on http://{}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health        - Health check");
    tracing::info!("  POST /api/checkout  - Create Stripe checkout session");

    axum::serve(listener, app).await?;

    Ok(())
}
