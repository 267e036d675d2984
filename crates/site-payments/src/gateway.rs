//! Stripe Gateway
//!
//! Live [`PaymentGateway`] implementation over Stripe's hosted checkout.
//! The buyer is redirected to Stripe's page and back; no card data ever
//! touches this service.

use async_trait::async_trait;
use stripe::{
    CheckoutSession, CheckoutSessionMode, Client, CreateCheckoutSession,
    CreateCheckoutSessionLineItems, ErrorType, Price, PriceId, PriceType, StripeError,
};

use crate::checkout::{BillingKind, CheckoutMode, CreatedSession, PaymentGateway, SessionRequest};
use crate::error::{PaymentError, Result};

/// Stripe client wrapper
pub struct StripeGateway {
    client: Client,
}

impl StripeGateway {
    /// Create a new Stripe gateway
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from environment variables
    ///
    /// Fails when `STRIPE_SECRET_KEY` is absent so the server can refuse
    /// to start instead of failing per-request.
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY is not set".into()))?;

        Ok(Self::new(&secret_key))
    }

    fn parse_price_id(price_id: &str) -> Result<PriceId> {
        price_id
            .parse::<PriceId>()
            .map_err(|_| PaymentError::Rejected(format!("Invalid price identifier: {price_id}")))
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn price_billing_kind(&self, price_id: &str) -> Result<BillingKind> {
        let id = Self::parse_price_id(price_id)?;

        let price = Price::retrieve(&self.client, &id, &[])
            .await
            .map_err(map_stripe_error)?;

        let kind = match price.type_ {
            Some(PriceType::Recurring) => BillingKind::Recurring,
            _ => BillingKind::OneTime,
        };

        Ok(kind)
    }

    async fn create_session(&self, request: &SessionRequest) -> Result<CreatedSession> {
        Self::parse_price_id(&request.price_id)?;

        let mut params = CreateCheckoutSession::new();
        params.success_url = Some(&request.success_url);
        params.cancel_url = Some(&request.cancel_url);
        params.mode = Some(match request.mode {
            CheckoutMode::Payment => CheckoutSessionMode::Payment,
            CheckoutMode::Subscription => CheckoutSessionMode::Subscription,
        });

        // One line item: the given price, quantity 1
        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            price: Some(request.price_id.clone()),
            quantity: Some(1),
            ..Default::default()
        }]);

        // Referral metadata for attribution, omitted entirely when absent
        if let Some(ref tag) = request.referral {
            let mut metadata = std::collections::HashMap::new();
            metadata.insert("referral".to_string(), tag.clone());
            params.metadata = Some(metadata);
        }

        let session = CheckoutSession::create(&self.client, params)
            .await
            .map_err(map_stripe_error)?;

        let url = session.url.ok_or_else(|| {
            tracing::error!(session_id = %session.id, "Stripe returned session without URL");
            PaymentError::MissingRedirectUrl
        })?;

        tracing::debug!(
            session_id = %session.id,
            mode = request.mode.as_str(),
            "Created checkout session"
        );

        Ok(CreatedSession {
            id: session.id.to_string(),
            url,
        })
    }
}

/// Classify a Stripe error: `invalid_request` means the caller's price or
/// account setup is wrong, everything else is the provider's problem.
fn map_stripe_error(err: StripeError) -> PaymentError {
    match &err {
        StripeError::Stripe(request_error)
            if matches!(request_error.error_type, ErrorType::InvalidRequest) =>
        {
            let detail = request_error
                .message
                .clone()
                .unwrap_or_else(|| err.to_string());
            PaymentError::Rejected(detail)
        }
        _ => PaymentError::Provider(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_price_id_is_rejected_locally() {
        let err = StripeGateway::parse_price_id("not-a-price").unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn well_formed_price_id_parses() {
        assert!(StripeGateway::parse_price_id("price_1MoBy5LkdIwHu7ixZhnattbh").is_ok());
    }
}
