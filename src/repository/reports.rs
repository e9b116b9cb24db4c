//! Reporting queries: dashboard, overdue tracking and payment history.
//!
//! Rental status and fine computation live in `view_rental_operations`
//! (see migrations); this repository only reads.

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{payment::PaymentDetails, rental::RentalOperation},
};

#[derive(Clone)]
pub struct ReportsRepository {
    pool: Pool<Postgres>,
}

impl ReportsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All rentals with statuses and fines
    pub async fn rental_operations(&self) -> AppResult<Vec<RentalOperation>> {
        let rows = sqlx::query_as::<_, RentalOperation>(
            "SELECT * FROM view_rental_operations ORDER BY rented_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Only the rentals that are past due and unreturned
    pub async fn overdue_operations(&self) -> AppResult<Vec<RentalOperation>> {
        let rows = sqlx::query_as::<_, RentalOperation>(
            "SELECT * FROM view_rental_operations WHERE status = 'Overdue' ORDER BY due_date",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// All payments with the book and payer they belong to, newest first
    pub async fn payment_history(&self) -> AppResult<Vec<PaymentDetails>> {
        let rows = sqlx::query_as::<_, PaymentDetails>(
            r#"
            SELECT p.id, p.amount, p.payment_date, p.notes,
                   b.title AS book_title, u.name AS user_name
            FROM payments p
            JOIN rentals r ON p.rental_id = r.id
            JOIN books b ON r.book_id = b.id
            JOIN users u ON r.user_id = u.id
            ORDER BY p.payment_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
