//! Payment Provider Client
//!
//! Thin client for the payment provider's payment-intent API. The
//! backend only creates intents and hands the opaque client secret
//! back to the frontend; completion and reconciliation happen on the
//! provider side and are not modeled here.

use serde::Deserialize;
use thiserror::Error;

const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

/// Payment client errors
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Invalid payment amount")]
    InvalidAmount,

    #[error("Payment provider request failed: {0}")]
    Provider(#[from] reqwest::Error),

    #[error("Payment provider rejected the request: {0}")]
    Rejected(String),
}

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

/// Client for creating payment intents
#[derive(Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    secret_key: String,
}

impl PaymentClient {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: secret_key.into(),
        }
    }

    /// Create a payment intent for the given amount in USD and return
    /// the client-side secret.
    ///
    /// `amount_usd` is in whole currency units; the provider expects
    /// the smallest unit (cents).
    pub async fn create_payment_intent(&self, amount_usd: f64) -> Result<String, PaymentError> {
        if !amount_usd.is_finite() || amount_usd <= 0.0 {
            return Err(PaymentError::InvalidAmount);
        }

        let amount_cents = (amount_usd * 100.0).round() as i64;

        let params = [
            ("amount", amount_cents.to_string()),
            ("currency", "usd".to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .http
            .post(PAYMENT_INTENTS_URL)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response
                .json::<ProviderErrorBody>()
                .await
                .map(|b| b.error.message)
                .unwrap_or_else(|_| "unknown provider error".to_string());
            tracing::error!(message = %message, "Payment intent creation failed");
            return Err(PaymentError::Rejected(message));
        }

        let intent: PaymentIntentResponse = response.json().await?;
        Ok(intent.client_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_non_positive_amount() {
        let client = PaymentClient::new("sk_test_dummy");
        assert!(matches!(
            client.create_payment_intent(0.0).await,
            Err(PaymentError::InvalidAmount)
        ));
        assert!(matches!(
            client.create_payment_intent(-5.0).await,
            Err(PaymentError::InvalidAmount)
        ));
        assert!(matches!(
            client.create_payment_intent(f64::NAN).await,
            Err(PaymentError::InvalidAmount)
        ));
    }
}
