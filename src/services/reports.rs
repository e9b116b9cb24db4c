//! Operations reporting service

use rust_decimal::Decimal;

use crate::{
    error::AppResult,
    models::{payment::PaymentDetails, rental::RentalOperation},
    repository::Repository,
};

/// Overdue report: the offending rentals plus a one-line summary
#[derive(Debug)]
pub struct OverdueReport {
    pub summary: String,
    pub items: Vec<RentalOperation>,
}

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Full rental dashboard: all rentals, statuses and potential fines
    pub async fn dashboard(&self) -> AppResult<Vec<RentalOperation>> {
        self.repository.reports.rental_operations().await
    }

    /// Overdue rentals with the accumulated fine total
    pub async fn overdue_report(&self) -> AppResult<OverdueReport> {
        let items = self.repository.reports.overdue_operations().await?;

        Ok(OverdueReport {
            summary: summarize_overdue(&items),
            items,
        })
    }

    /// History of all payments made
    pub async fn payment_history(&self) -> AppResult<Vec<PaymentDetails>> {
        self.repository.reports.payment_history().await
    }
}

fn summarize_overdue(items: &[RentalOperation]) -> String {
    if items.is_empty() {
        return "No overdue items found".to_string();
    }

    let total_fines: Decimal = items.iter().map(|i| i.fine_amount).sum();

    format!(
        "Alert: {} items are overdue. Total Fines: {}",
        items.len(),
        total_fines
    )
}
