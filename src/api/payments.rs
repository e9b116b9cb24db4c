//! Payment endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::payment::{CreatePayment, PaymentDetails},
};

/// Response for a recorded payment
#[derive(Serialize, ToSchema)]
pub struct PaymentResponse {
    /// New payment ID
    pub id: i32,
    /// Status message
    pub message: String,
}

/// Record a payment for a rental.
/// A payment against a still-open rental also returns the book.
#[utoipa::path(
    post,
    path = "/payments",
    tag = "payments",
    request_body = CreatePayment,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentResponse),
        (status = 400, description = "Invalid amount"),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn create_payment(
    State(state): State<crate::AppState>,
    Json(payment): Json<CreatePayment>,
) -> AppResult<(StatusCode, Json<PaymentResponse>)> {
    let payment_id = state.services.rentals.process_payment(payment).await?;

    Ok((
        StatusCode::CREATED,
        Json(PaymentResponse {
            id: payment_id,
            message: format!("Payment recorded successfully. Payment ID: {}", payment_id),
        }),
    ))
}

/// History of all payments made
#[utoipa::path(
    get,
    path = "/payments",
    tag = "payments",
    responses(
        (status = 200, description = "Payment history", body = Vec<PaymentDetails>)
    )
)]
pub async fn list_payments(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<PaymentDetails>>> {
    let payments = state.services.reports.payment_history().await?;
    Ok(Json(payments))
}
