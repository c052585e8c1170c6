//! Payment Endpoints
//!
//! Creates payment intents on the provider and returns the opaque
//! client secret. Completion happens on the provider side.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use platform::payment::{PaymentClient, PaymentError};
use serde::{Deserialize, Serialize};

use crate::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePaymentIntentRequest {
    price: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatePaymentIntentResponse {
    client_secret: String,
}

pub fn payment_router(client: PaymentClient) -> Router {
    Router::new()
        .route("/create-payment-intent", post(create_payment_intent))
        .with_state(client)
}

async fn create_payment_intent(
    State(client): State<PaymentClient>,
    Json(body): Json<CreatePaymentIntentRequest>,
) -> Result<Json<CreatePaymentIntentResponse>, Response> {
    let client_secret = client
        .create_payment_intent(body.price)
        .await
        .map_err(|e| to_app_error(e).into_response())?;

    Ok(Json(CreatePaymentIntentResponse { client_secret }))
}

fn to_app_error(err: PaymentError) -> AppError {
    match err {
        PaymentError::InvalidAmount => AppError::bad_request("Invalid payment amount"),
        PaymentError::Provider(e) => {
            tracing::error!(error = %e, "Payment provider request failed");
            AppError::service_unavailable("Payment provider unavailable")
        }
        PaymentError::Rejected(msg) => {
            tracing::warn!(message = %msg, "Payment provider rejected request");
            AppError::unprocessable("Payment request rejected")
        }
    }
}
