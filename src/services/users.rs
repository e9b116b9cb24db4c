//! User management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, RentalHistoryEntry, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all registered users
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Register a new user
    pub async fn create_user(&self, user: CreateUser) -> AppResult<i32> {
        user.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let id = self.repository.users.create(&user).await?;

        tracing::info!("User registered: id={}", id);

        Ok(id)
    }

    /// Every book a user has ever rented
    pub async fn rental_history(&self, user_id: i32) -> AppResult<Vec<RentalHistoryEntry>> {
        // Verify user exists
        self.repository.users.get_by_id(user_id).await?;
        self.repository.users.rental_history(user_id).await
    }
}
