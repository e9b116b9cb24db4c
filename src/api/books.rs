//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{BookDetails, CreateBook, UpdateBook},
};

/// Response for a created book
#[derive(Serialize, ToSchema)]
pub struct CreateBookResponse {
    /// New book ID
    pub id: i32,
    /// Status message
    pub message: String,
}

/// Response for update/delete operations
#[derive(Serialize, ToSchema)]
pub struct BookChangeResponse {
    /// Number of rows affected
    pub affected: u64,
    /// Status message
    pub message: String,
}

/// List active books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of active books", body = Vec<BookDetails>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BookDetails>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetails),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookDetails>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = CreateBookResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<CreateBookResponse>)> {
    let id = state.services.catalog.create_book(book).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookResponse {
            id,
            message: format!("Book added with ID: {}", id),
        }),
    ))
}

/// Partially update a book
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookChangeResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(update): Json<UpdateBook>,
) -> AppResult<Json<BookChangeResponse>> {
    let affected = state.services.catalog.update_book(id, update).await?;

    Ok(Json(BookChangeResponse {
        affected,
        message: format!("{} book(s) updated", affected),
    }))
}

/// Remove a book from circulation (soft delete)
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book marked inactive", body = BookChangeResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookChangeResponse>> {
    let affected = state.services.catalog.delete_book(id).await?;

    Ok(Json(BookChangeResponse {
        affected,
        message: format!("{} book(s) marked inactive", affected),
    }))
}
