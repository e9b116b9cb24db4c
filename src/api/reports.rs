//! Operations reporting endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::rental::RentalOperation};

/// Overdue report with summary line
#[derive(Serialize, ToSchema)]
pub struct OverdueReportResponse {
    /// Summary of overdue count and total fines
    pub summary: String,
    /// The overdue rentals
    pub data: Vec<RentalOperation>,
}

/// All rentals with statuses and potential fines
#[utoipa::path(
    get,
    path = "/operations/dashboard",
    tag = "operations",
    responses(
        (status = 200, description = "Rental operations dashboard", body = Vec<RentalOperation>)
    )
)]
pub async fn get_dashboard(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<RentalOperation>>> {
    let operations = state.services.reports.dashboard().await?;
    Ok(Json(operations))
}

/// Only the rentals that are late, with the fine total
#[utoipa::path(
    get,
    path = "/operations/overdue",
    tag = "operations",
    responses(
        (status = 200, description = "Overdue rentals and fine totals", body = OverdueReportResponse)
    )
)]
pub async fn get_overdue(
    State(state): State<crate::AppState>,
) -> AppResult<Json<OverdueReportResponse>> {
    let report = state.services.reports.overdue_report().await?;

    Ok(Json(OverdueReportResponse {
        summary: report.summary,
        data: report.items,
    }))
}
