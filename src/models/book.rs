//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: Option<i32>,
    pub category_id: Option<i32>,
    pub total_copies: i32,
    pub available_copies: i32,
    pub is_active: bool,
}

/// Book with author and genre names resolved, for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookDetails {
    pub id: i32,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub total_copies: i32,
    pub available_copies: i32,
    pub is_active: bool,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "genre must not be empty"))]
    pub genre: String,
    #[validate(range(min = 0, message = "total_copies must not be negative"))]
    pub total_copies: i32,
}

/// Partial book update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(range(min = 0, message = "total_copies must not be negative"))]
    pub total_copies: Option<i32>,
    pub is_active: Option<bool>,
}
