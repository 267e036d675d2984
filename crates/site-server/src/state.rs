//! Application State

use std::sync::Arc;

use site_payments::PaymentGateway;

/// Server configuration, read once at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Fallback origin for success/cancel redirects when the request
    /// carries no `Origin` header
    pub site_origin: String,

    /// Include provider diagnostic text in error responses. Off in
    /// production.
    pub expose_diagnostics: bool,

    /// Listen address
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        Self {
            site_origin: std::env::var("SITE_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            expose_diagnostics: environment != "production",
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into()),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway (Stripe in production, mock in tests)
    pub gateway: Arc<dyn PaymentGateway>,

    /// Server configuration
    pub config: Arc<AppConfig>,
}
