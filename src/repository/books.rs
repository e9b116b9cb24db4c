//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{BookDetails, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active books with author and genre names
    pub async fn list(&self) -> AppResult<Vec<BookDetails>> {
        let books = sqlx::query_as::<_, BookDetails>(
            r#"
            SELECT b.id, b.title, a.name AS author, c.name AS genre,
                   b.total_copies, b.available_copies, b.is_active
            FROM books b
            LEFT JOIN authors a ON b.author_id = a.id
            LEFT JOIN categories c ON b.category_id = c.id
            WHERE b.is_active = TRUE
            ORDER BY b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<BookDetails> {
        sqlx::query_as::<_, BookDetails>(
            r#"
            SELECT b.id, b.title, a.name AS author, c.name AS genre,
                   b.total_copies, b.available_copies, b.is_active
            FROM books b
            LEFT JOIN authors a ON b.author_id = a.id
            LEFT JOIN categories c ON b.category_id = c.id
            WHERE b.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Create a book, looking up or creating its author and category.
    /// Stock starts full: `available_copies = total_copies`.
    pub async fn create(&self, book: &CreateBook) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        // Upsert rather than check-then-insert: concurrent creates with the
        // same author/genre name land on the unique constraint, not on a
        // duplicate row.
        let author_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO authors (name) VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
            "#,
        )
        .bind(&book.author)
        .fetch_one(&mut *tx)
        .await?;

        let category_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO categories (name) VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
            "#,
        )
        .bind(&book.genre)
        .fetch_one(&mut *tx)
        .await?;

        let book_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO books (title, author_id, category_id, total_copies, available_copies)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(author_id)
        .bind(category_id)
        .bind(book.total_copies)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(book_id)
    }

    /// Partially update a book. Returns the number of rows affected
    /// (0 when no fields were given or the ID does not exist).
    pub async fn update(&self, id: i32, update: &UpdateBook) -> AppResult<u64> {
        let Some(sql) = build_update_sql(update) else {
            return Ok(0);
        };

        let mut query = sqlx::query(&sql);
        if let Some(total_copies) = update.total_copies {
            query = query.bind(total_copies);
        }
        if let Some(is_active) = update.is_active {
            query = query.bind(is_active);
        }
        let result = query.bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    /// Soft-delete a book. Returns the number of rows affected.
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("UPDATE books SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Build the UPDATE statement for the fields present in the request.
/// The book ID is always the last placeholder.
fn build_update_sql(update: &UpdateBook) -> Option<String> {
    let mut assignments = Vec::new();

    if update.total_copies.is_some() {
        assignments.push(format!("total_copies = ${}", assignments.len() + 1));
    }
    if update.is_active.is_some() {
        assignments.push(format!("is_active = ${}", assignments.len() + 1));
    }

    if assignments.is_empty() {
        return None;
    }

    Some(format!(
        "UPDATE books SET {} WHERE id = ${}",
        assignments.join(", "),
        assignments.len() + 1
    ))
}
