//! Rental checkout and return endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::rental::{CreateRental, ReturnRental},
};

/// Response for a successful checkout
#[derive(Serialize, ToSchema)]
pub struct RentResponse {
    /// New rental ID
    pub id: i32,
    /// Status message
    pub message: String,
}

/// Response for a successful return
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    /// Status message
    pub message: String,
}

/// Rent a book to a user, decreasing stock
#[utoipa::path(
    post,
    path = "/rent",
    tag = "rentals",
    request_body = CreateRental,
    responses(
        (status = 201, description = "Rental created", body = RentResponse),
        (status = 400, description = "No copies available"),
        (status = 404, description = "Book or user not found")
    )
)]
pub async fn rent_book(
    State(state): State<crate::AppState>,
    Json(rental): Json<CreateRental>,
) -> AppResult<(StatusCode, Json<RentResponse>)> {
    let rental_id = state.services.rentals.rent(rental).await?;

    Ok((
        StatusCode::CREATED,
        Json(RentResponse {
            id: rental_id,
            message: format!("Rental successful. Rental ID: {}", rental_id),
        }),
    ))
}

/// Return a book, increasing stock
#[utoipa::path(
    post,
    path = "/return",
    tag = "rentals",
    request_body = ReturnRental,
    responses(
        (status = 200, description = "Book returned", body = ReturnResponse),
        (status = 400, description = "Book already returned"),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Json(request): Json<ReturnRental>,
) -> AppResult<Json<ReturnResponse>> {
    state.services.rentals.return_rental(request.rental_id).await?;

    Ok(Json(ReturnResponse {
        message: "Book returned successfully".to_string(),
    }))
}
