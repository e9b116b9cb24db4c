//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{BookDetails, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List active books
    pub async fn list_books(&self) -> AppResult<Vec<BookDetails>> {
        self.repository.books.list().await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<BookDetails> {
        self.repository.books.get_by_id(id).await
    }

    /// Add a book to the catalog
    pub async fn create_book(&self, book: CreateBook) -> AppResult<i32> {
        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let id = self.repository.books.create(&book).await?;

        tracing::info!("Book created: id={} title={:?}", id, book.title);

        Ok(id)
    }

    /// Partially update a book. Returns the affected row count.
    pub async fn update_book(&self, id: i32, update: UpdateBook) -> AppResult<u64> {
        update
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.books.update(id, &update).await
    }

    /// Soft-delete a book. Returns the affected row count.
    pub async fn delete_book(&self, id: i32) -> AppResult<u64> {
        self.repository.books.delete(id).await
    }
}
