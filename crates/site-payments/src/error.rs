//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Configuration error (missing credential, bad environment)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The provider refused the request (unknown price, bad account setup)
    #[error("Provider rejected request: {0}")]
    Rejected(String),

    /// The provider created a session but returned no redirect URL
    #[error("Checkout session has no redirect URL")]
    MissingRedirectUrl,

    /// Any other provider or transport failure
    #[error("Provider error: {0}")]
    Provider(String),
}

impl PaymentError {
    /// Whether the caller is at fault (maps to a 4xx response)
    pub fn is_client_error(&self) -> bool {
        matches!(self, PaymentError::Rejected(_))
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &'static str {
        match self {
            PaymentError::Rejected(_) => {
                "Stripe request failed. Check your priceId or account configuration."
            }
            PaymentError::MissingRedirectUrl => {
                "Failed to create checkout session: no redirect URL."
            }
            PaymentError::Config(_) => "Service configuration error.",
            PaymentError::Provider(_) => "Failed to create checkout session.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_is_client_error() {
        assert!(PaymentError::Rejected("no such price".into()).is_client_error());
        assert!(!PaymentError::MissingRedirectUrl.is_client_error());
        assert!(!PaymentError::Provider("timeout".into()).is_client_error());
    }

    #[test]
    fn missing_url_message_names_the_problem() {
        let msg = PaymentError::MissingRedirectUrl.user_message();
        assert!(msg.contains("no redirect URL"));
    }
}
