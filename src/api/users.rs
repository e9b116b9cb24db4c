//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::{CreateUser, RentalHistoryEntry, User},
};

/// Response for a registered user
#[derive(Serialize, ToSchema)]
pub struct CreateUserResponse {
    /// New user ID
    pub id: i32,
    /// Status message
    pub message: String,
}

/// List all registered users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<crate::AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list_users().await?;
    Ok(Json(users))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User registered", body = CreateUserResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    Json(user): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<CreateUserResponse>)> {
    let id = state.services.users.create_user(user).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            id,
            message: format!("User added successfully with ID: {}", id),
        }),
    ))
}

/// Every book a specific user has ever rented
#[utoipa::path(
    get,
    path = "/users/{id}/history",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Rental history", body = Vec<RentalHistoryEntry>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_history(
    State(state): State<crate::AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<RentalHistoryEntry>>> {
    let history = state.services.users.rental_history(user_id).await?;
    Ok(Json(history))
}
