//! Rental model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Rental model from database
///
/// A rental with `returned_at = NULL` is open: the copy is checked out and
/// accounted for in the book's `available_copies`. `returned_at` is set
/// exactly once, either by an explicit return or by a payment auto-return.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rental {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub rented_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

/// Checkout request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRental {
    pub book_id: i32,
    pub user_id: i32,
}

/// Return request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReturnRental {
    pub rental_id: i32,
}

/// One row of `view_rental_operations`: a rental with user/book names,
/// due date, status and any accrued fine
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RentalOperation {
    pub rental_id: i32,
    pub user_name: String,
    pub book_title: String,
    pub rented_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    /// `Active`, `Overdue` or `Returned`
    pub status: String,
    pub fine_amount: Decimal,
}
