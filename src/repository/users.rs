//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, RentalHistoryEntry, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all registered users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Register a new user. A duplicate email lands on the unique
    /// constraint and surfaces as a conflict.
    pub async fn create(&self, user: &CreateUser) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Email already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(id)
    }

    /// Every rental of a user, newest first
    pub async fn rental_history(&self, user_id: i32) -> AppResult<Vec<RentalHistoryEntry>> {
        let history = sqlx::query_as::<_, RentalHistoryEntry>(
            r#"
            SELECT b.title, a.name AS author, r.rented_at, r.returned_at,
                   CASE
                       WHEN r.returned_at IS NULL THEN 'Available'
                       ELSE 'Returned'
                   END AS status
            FROM rentals r
            JOIN books b ON r.book_id = b.id
            LEFT JOIN authors a ON b.author_id = a.id
            WHERE r.user_id = $1
            ORDER BY r.rented_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(history)
    }
}
