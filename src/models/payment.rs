//! Payment model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Payment model from database. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: i32,
    pub rental_id: i32,
    pub amount: Decimal,
    pub notes: Option<String>,
    pub payment_date: DateTime<Utc>,
}

/// Record payment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePayment {
    pub rental_id: i32,
    pub amount: Decimal,
    pub notes: Option<String>,
}

/// Payment with rental context for the payment history listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PaymentDetails {
    pub id: i32,
    pub amount: Decimal,
    pub payment_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub book_title: String,
    pub user_name: String,
}
