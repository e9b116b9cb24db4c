//! Rental ledger: checkout, return and payment-triggered auto-return.
//!
//! Every mutation here is a single transaction. Checkout serializes on a
//! row-level exclusive lock of the book, return and payment serialize on a
//! lock of the rental row, so the stock invariant
//! `available_copies = total_copies - open rentals` holds under concurrent
//! access. A failed statement drops the transaction, rolling back the whole
//! sequence.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        payment::{CreatePayment, Payment},
        rental::Rental,
    },
};

#[derive(Clone)]
pub struct RentalsRepository {
    pool: Pool<Postgres>,
}

impl RentalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Check a book out to a user. Returns the new rental ID.
    ///
    /// The book row is locked for the duration of the transaction, so two
    /// concurrent checkouts of the last copy cannot both observe
    /// `available_copies >= 1`.
    pub async fn rent(&self, book_id: i32, user_id: i32) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE id = $1 AND is_active = TRUE FOR UPDATE",
        )
        .bind(book_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;

        if book.available_copies < 1 {
            return Err(AppError::OutOfStock(format!(
                "No copies of book {} available",
                book_id
            )));
        }

        let rental_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO rentals (user_id, book_id, rented_at) VALUES ($1, $2, NOW()) RETURNING id",
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE books SET available_copies = available_copies - 1 WHERE id = $1")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(rental_id)
    }

    /// Close an open rental and put the copy back in stock.
    ///
    /// The rental row is locked before the already-returned check, so
    /// concurrent returns of the same rental serialize and the loser gets
    /// `AlreadyReturned` instead of a second stock increment.
    pub async fn return_rental(&self, rental_id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1 FOR UPDATE")
            .bind(rental_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rental with id {} not found", rental_id)))?;

        if rental.returned_at.is_some() {
            return Err(AppError::AlreadyReturned(format!(
                "Rental {} is already returned",
                rental_id
            )));
        }

        Self::close_and_restock(&mut tx, rental.id, rental.book_id).await?;

        tx.commit().await?;

        Ok(())
    }

    /// Record a payment against a rental.
    ///
    /// The payment is always inserted; if the rental is still open it is
    /// closed and the copy restocked in the same transaction. Paying against
    /// an already-closed rental (a fine settled after the book came back)
    /// records the payment with no rental or stock side effect.
    pub async fn process_payment(&self, payment: &CreatePayment) -> AppResult<Payment> {
        let mut tx = self.pool.begin().await?;

        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1 FOR UPDATE")
            .bind(payment.rental_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Rental with id {} not found", payment.rental_id))
            })?;

        let recorded = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (rental_id, amount, notes, payment_date)
            VALUES ($1, $2, $3, NOW())
            RETURNING *
            "#,
        )
        .bind(payment.rental_id)
        .bind(payment.amount)
        .bind(&payment.notes)
        .fetch_one(&mut *tx)
        .await?;

        if rental.returned_at.is_none() {
            Self::close_and_restock(&mut tx, rental.id, rental.book_id).await?;
        }

        tx.commit().await?;

        Ok(recorded)
    }

    /// Mark a rental returned and increment the book's stock. Callers hold
    /// the rental row lock and have verified the rental is still open.
    async fn close_and_restock(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        rental_id: i32,
        book_id: i32,
    ) -> AppResult<()> {
        sqlx::query("UPDATE rentals SET returned_at = NOW() WHERE id = $1")
            .bind(rental_id)
            .execute(&mut **tx)
            .await?;

        sqlx::query("UPDATE books SET available_copies = available_copies + 1 WHERE id = $1")
            .bind(book_id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}
