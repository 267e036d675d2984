//! Checkout Types and the Gateway Seam
//!
//! The server never talks to Stripe directly; it goes through
//! [`PaymentGateway`] so tests can swap in [`crate::MockGateway`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the provider bills a price
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingKind {
    /// Charged once
    OneTime,
    /// Charged on a recurring schedule
    Recurring,
}

/// Checkout session mode, selected from the price's billing kind so
/// callers never need to know billing semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutMode {
    Payment,
    Subscription,
}

impl CheckoutMode {
    /// Select the mode matching a price's billing kind
    pub fn for_billing(kind: BillingKind) -> Self {
        match kind {
            BillingKind::OneTime => CheckoutMode::Payment,
            BillingKind::Recurring => CheckoutMode::Subscription,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
            CheckoutMode::Subscription => "subscription",
        }
    }
}

/// Request to create a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Provider price identifier (one line item, quantity 1)
    pub price_id: String,

    /// Session mode matching the price's billing kind
    pub mode: CheckoutMode,

    /// URL to redirect after successful payment; may carry the
    /// provider's `{CHECKOUT_SESSION_ID}` placeholder verbatim
    pub success_url: String,

    /// URL to redirect if checkout is cancelled
    pub cancel_url: String,

    /// Optional referral tag, stored in session metadata for attribution
    #[serde(default)]
    pub referral: Option<String>,
}

/// Result of creating a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatedSession {
    /// Provider session ID
    pub id: String,

    /// Hosted checkout URL to redirect the buyer to
    pub url: String,
}

/// Payment provider seam
///
/// Implemented by [`crate::StripeGateway`] for production and
/// [`crate::MockGateway`] for tests.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Look up how the provider bills the given price
    async fn price_billing_kind(&self, price_id: &str) -> Result<BillingKind>;

    /// Create a hosted checkout session
    async fn create_session(&self, request: &SessionRequest) -> Result<CreatedSession>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_mirrors_billing_kind() {
        assert_eq!(
            CheckoutMode::for_billing(BillingKind::OneTime),
            CheckoutMode::Payment
        );
        assert_eq!(
            CheckoutMode::for_billing(BillingKind::Recurring),
            CheckoutMode::Subscription
        );
    }

    #[test]
    fn referral_defaults_to_absent() {
        let request: SessionRequest = serde_json::from_str(
            r#"{
                "price_id": "price_123",
                "mode": "Payment",
                "success_url": "https://example.com/success",
                "cancel_url": "https://example.com/cancel"
            }"#,
        )
        .unwrap();
        assert!(request.referral.is_none());
    }
}
