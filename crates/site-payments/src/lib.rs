//! # site-payments
//!
//! Stripe checkout integration for the CalorieCalc site.
//!
//! Uses the "Stripe Checkout (Hosted)" approach: the site creates a
//! session server-side and redirects the buyer to Stripe's hosted page.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Your Site  │────▶│  Stripe Hosted  │────▶│  Your Site  │
//! │  (pricing)  │     │  Checkout Page  │     │  (success)  │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! Stripe handles PCI compliance entirely; this crate only decides the
//! session mode (one-time prices check out in `payment` mode, recurring
//! prices in `subscription` mode) and threads the referral tag through
//! session metadata.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use site_payments::{PaymentGateway, SessionRequest, StripeGateway};
//!
//! let gateway = StripeGateway::from_env()?;
//!
//! let kind = gateway.price_billing_kind("price_xxx").await?;
//! let session = gateway.create_session(&SessionRequest {
//!     price_id: "price_xxx".into(),
//!     mode: CheckoutMode::for_billing(kind),
//!     success_url: "https://yoursite.com/success?session_id={CHECKOUT_SESSION_ID}".into(),
//!     cancel_url: "https://yoursite.com/cancel".into(),
//!     referral: None,
//! }).await?;
//!
//! // Redirect user to: session.url
//! ```

mod checkout;
mod error;
mod gateway;
mod mock;

pub use checkout::{BillingKind, CheckoutMode, CreatedSession, PaymentGateway, SessionRequest};
pub use error::{PaymentError, Result};
pub use gateway::StripeGateway;
pub use mock::MockGateway;
