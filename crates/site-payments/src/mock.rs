//! Mock Payment Gateway
//!
//! For testing and demo purposes. Serves a configurable price table and
//! records every session request it receives.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::checkout::{BillingKind, CreatedSession, PaymentGateway, SessionRequest};
use crate::error::{PaymentError, Result};

/// Mock gateway with a static price table
pub struct MockGateway {
    prices: HashMap<String, BillingKind>,
    omit_redirect_url: bool,
    created: Mutex<Vec<SessionRequest>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            prices: HashMap::new(),
            omit_redirect_url: false,
            created: Mutex::new(Vec::new()),
        }
    }

    /// Register a price and its billing kind
    pub fn with_price(mut self, price_id: &str, kind: BillingKind) -> Self {
        self.prices.insert(price_id.to_string(), kind);
        self
    }

    /// Make `create_session` behave like a provider that returns a
    /// session lacking a redirect URL
    pub fn without_redirect_url(mut self) -> Self {
        self.omit_redirect_url = true;
        self
    }

    /// Session requests received so far, in order
    pub fn created_sessions(&self) -> Vec<SessionRequest> {
        self.created.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn price_billing_kind(&self, price_id: &str) -> Result<BillingKind> {
        self.prices
            .get(price_id)
            .copied()
            .ok_or_else(|| PaymentError::Rejected(format!("No such price: {price_id}")))
    }

    async fn create_session(&self, request: &SessionRequest) -> Result<CreatedSession> {
        if let Ok(mut created) = self.created.lock() {
            created.push(request.clone());
        }

        if self.omit_redirect_url {
            return Err(PaymentError::MissingRedirectUrl);
        }

        Ok(CreatedSession {
            id: "cs_test_a1b2c3".to_string(),
            url: format!("https://checkout.stripe.com/c/pay/{}", request.price_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::CheckoutMode;

    fn request(price_id: &str) -> SessionRequest {
        SessionRequest {
            price_id: price_id.to_string(),
            mode: CheckoutMode::Payment,
            success_url: "http://localhost:3000/success?session_id={CHECKOUT_SESSION_ID}".into(),
            cancel_url: "http://localhost:3000/cancel".into(),
            referral: None,
        }
    }

    #[tokio::test]
    async fn unknown_price_is_rejected() {
        let gateway = MockGateway::new();
        let err = gateway.price_billing_kind("price_nope").await.unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn known_price_reports_its_billing_kind() {
        let gateway = MockGateway::new().with_price("price_sub", BillingKind::Recurring);
        let kind = gateway.price_billing_kind("price_sub").await.unwrap();
        assert_eq!(kind, BillingKind::Recurring);
    }

    #[tokio::test]
    async fn sessions_are_recorded() {
        let gateway = MockGateway::new();
        let session = gateway.create_session(&request("price_basic")).await.unwrap();
        assert!(session.url.contains("price_basic"));

        let recorded = gateway.created_sessions();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].price_id, "price_basic");
    }

    #[tokio::test]
    async fn url_less_session_is_an_error() {
        let gateway = MockGateway::new().without_redirect_url();
        let err = gateway.create_session(&request("price_basic")).await.unwrap_err();
        assert!(matches!(err, PaymentError::MissingRedirectUrl));
    }
}
