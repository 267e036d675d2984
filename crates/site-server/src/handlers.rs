//! HTTP Handlers

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use site_payments::{CheckoutMode, PaymentError, SessionRequest};

use crate::state::{AppConfig, AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Body of `POST /api/checkout`, as sent by the browser helper
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    #[serde(rename = "priceId", default)]
    pub price_id: Option<String>,

    /// Referral tag, carried into session metadata for attribution
    #[serde(rename = "ref", default)]
    pub referral: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    /// Provider diagnostic detail, only populated outside production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Create a Stripe checkout session
///
/// Returns the session's redirect URL as JSON rather than an HTTP
/// redirect: the caller is a background fetch and navigates itself.
pub async fn create_checkout(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<CheckoutResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Parse the body by hand so malformed JSON gets our error shape,
    // not the framework's plain-text rejection.
    let payload: CheckoutRequest = serde_json::from_str(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected unparseable checkout body");
        bad_request("Invalid JSON in request body.")
    })?;

    tracing::debug!(?payload, "Incoming checkout request");

    let price_id = match payload.price_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(bad_request("Price ID is required.")),
    };

    // One-time prices check out in payment mode, recurring ones in
    // subscription mode, so callers never need to know billing semantics.
    let billing = state
        .gateway
        .price_billing_kind(&price_id)
        .await
        .map_err(|e| payment_error_response(&state.config, e))?;
    let mode = CheckoutMode::for_billing(billing);

    let origin = headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(state.config.site_origin.as_str());

    let request = SessionRequest {
        price_id,
        mode,
        success_url: format!("{origin}/success?session_id={{CHECKOUT_SESSION_ID}}"),
        cancel_url: format!("{origin}/cancel"),
        referral: payload.referral.filter(|tag| !tag.is_empty()),
    };

    let session = state
        .gateway
        .create_session(&request)
        .await
        .map_err(|e| payment_error_response(&state.config, e))?;

    Ok(Json(CheckoutResponse { url: session.url }))
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
            debug: None,
        }),
    )
}

fn payment_error_response(
    config: &AppConfig,
    err: PaymentError,
) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(error = %err, "Checkout error");

    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let debug = (config.expose_diagnostics && err.is_client_error()).then(|| err.to_string());

    (
        status,
        Json(ErrorResponse {
            error: err.user_message().to_string(),
            debug,
        }),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use site_payments::{BillingKind, MockGateway, PaymentGateway};

    fn test_state(gateway: &Arc<MockGateway>, expose_diagnostics: bool) -> AppState {
        let dyn_gateway: Arc<dyn PaymentGateway> = gateway.clone();
        AppState {
            gateway: dyn_gateway,
            config: Arc::new(AppConfig {
                site_origin: "http://localhost:3000".into(),
                expose_diagnostics,
                bind_addr: "127.0.0.1:0".into(),
            }),
        }
    }

    async fn post(
        state: AppState,
        body: &str,
    ) -> Result<Json<CheckoutResponse>, (StatusCode, Json<ErrorResponse>)> {
        create_checkout(State(state), HeaderMap::new(), body.to_string()).await
    }

    #[tokio::test]
    async fn missing_price_id_is_rejected() {
        let gateway = Arc::new(MockGateway::new());
        let (status, Json(body)) = post(test_state(&gateway, true), r#"{"ref":"aff-1"}"#)
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Price ID is required.");
    }

    #[tokio::test]
    async fn blank_price_id_is_rejected() {
        let gateway = Arc::new(MockGateway::new());
        let (status, _) = post(test_state(&gateway, true), r#"{"priceId":"   "}"#)
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(gateway.created_sessions().is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_a_client_error() {
        let gateway = Arc::new(MockGateway::new());
        let (status, Json(body)) = post(test_state(&gateway, true), "{priceId")
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid JSON in request body.");
    }

    #[tokio::test]
    async fn one_time_price_selects_payment_mode() {
        let gateway =
            Arc::new(MockGateway::new().with_price("price_basic", BillingKind::OneTime));
        let Json(response) = post(test_state(&gateway, true), r#"{"priceId":"price_basic"}"#)
            .await
            .unwrap();

        assert!(!response.url.is_empty());
        assert_eq!(gateway.created_sessions()[0].mode, CheckoutMode::Payment);
    }

    #[tokio::test]
    async fn recurring_price_selects_subscription_mode() {
        let gateway =
            Arc::new(MockGateway::new().with_price("price_sub", BillingKind::Recurring));
        post(test_state(&gateway, true), r#"{"priceId":"price_sub"}"#)
            .await
            .unwrap();

        assert_eq!(
            gateway.created_sessions()[0].mode,
            CheckoutMode::Subscription
        );
    }

    #[tokio::test]
    async fn referral_round_trips_verbatim() {
        let gateway =
            Arc::new(MockGateway::new().with_price("price_basic", BillingKind::OneTime));
        post(
            test_state(&gateway, true),
            r#"{"priceId":"price_basic","ref":"partner-7"}"#,
        )
        .await
        .unwrap();

        assert_eq!(
            gateway.created_sessions()[0].referral.as_deref(),
            Some("partner-7")
        );
    }

    #[tokio::test]
    async fn absent_referral_stays_absent() {
        let gateway =
            Arc::new(MockGateway::new().with_price("price_basic", BillingKind::OneTime));
        post(test_state(&gateway, true), r#"{"priceId":"price_basic"}"#)
            .await
            .unwrap();

        assert!(gateway.created_sessions()[0].referral.is_none());
    }

    #[tokio::test]
    async fn unknown_price_is_client_error_with_gated_diagnostics() {
        let gateway = Arc::new(MockGateway::new());

        let (status, Json(body)) = post(test_state(&gateway, true), r#"{"priceId":"price_void"}"#)
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.debug.unwrap().contains("price_void"));

        // Production config keeps provider detail out of the response
        let (_, Json(body)) = post(test_state(&gateway, false), r#"{"priceId":"price_void"}"#)
            .await
            .unwrap_err();
        assert!(body.debug.is_none());
    }

    #[tokio::test]
    async fn url_less_session_is_a_server_error() {
        let gateway = Arc::new(
            MockGateway::new()
                .with_price("price_basic", BillingKind::OneTime)
                .without_redirect_url(),
        );
        let (status, Json(body)) = post(test_state(&gateway, true), r#"{"priceId":"price_basic"}"#)
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("no redirect URL"));
    }

    #[tokio::test]
    async fn redirect_urls_follow_the_request_origin() {
        let gateway =
            Arc::new(MockGateway::new().with_price("price_basic", BillingKind::OneTime));

        let mut headers = HeaderMap::new();
        headers.insert(header::ORIGIN, "https://caloriecalc.app".parse().unwrap());
        create_checkout(
            State(test_state(&gateway, true)),
            headers,
            r#"{"priceId":"price_basic"}"#.to_string(),
        )
        .await
        .unwrap();

        let recorded = &gateway.created_sessions()[0];
        assert_eq!(
            recorded.success_url,
            "https://caloriecalc.app/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(recorded.cancel_url, "https://caloriecalc.app/cancel");
    }
}
