//! Rental ledger service

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{payment::CreatePayment, rental::CreateRental},
    repository::Repository,
};

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
}

impl RentalsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check a book out to a user
    pub async fn rent(&self, rental: CreateRental) -> AppResult<i32> {
        // Verify user exists
        self.repository.users.get_by_id(rental.user_id).await?;

        let rental_id = self
            .repository
            .rentals
            .rent(rental.book_id, rental.user_id)
            .await?;

        tracing::info!(
            "Book {} rented to user {} (rental {})",
            rental.book_id,
            rental.user_id,
            rental_id
        );

        Ok(rental_id)
    }

    /// Return a rented book
    pub async fn return_rental(&self, rental_id: i32) -> AppResult<()> {
        self.repository.rentals.return_rental(rental_id).await?;

        tracing::info!("Rental {} returned", rental_id);

        Ok(())
    }

    /// Record a payment, auto-returning the rental if it is still open
    pub async fn process_payment(&self, payment: CreatePayment) -> AppResult<i32> {
        if payment.amount <= Decimal::ZERO {
            return Err(AppError::Validation(
                "amount must be greater than zero".to_string(),
            ));
        }

        let recorded = self.repository.rentals.process_payment(&payment).await?;

        tracing::info!(
            "Payment {} of {} recorded for rental {}",
            recorded.id,
            recorded.amount,
            recorded.rental_id
        );

        Ok(recorded.id)
    }
}
