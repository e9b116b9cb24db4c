//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, payments, rentals, reports, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Circulation API",
        version = "1.0.0",
        description = "Library Book Rental Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/library", description = "Library API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Rentals
        rentals::rent_book,
        rentals::return_book,
        // Users
        users::list_users,
        users::create_user,
        users::get_user_history,
        // Operations
        reports::get_dashboard,
        reports::get_overdue,
        // Payments
        payments::create_payment,
        payments::list_payments,
    ),
    components(
        schemas(
            // Books
            crate::models::book::BookDetails,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            books::CreateBookResponse,
            books::BookChangeResponse,
            // Rentals
            crate::models::rental::CreateRental,
            crate::models::rental::ReturnRental,
            crate::models::rental::RentalOperation,
            rentals::RentResponse,
            rentals::ReturnResponse,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::RentalHistoryEntry,
            users::CreateUserResponse,
            // Payments
            crate::models::payment::CreatePayment,
            crate::models::payment::PaymentDetails,
            payments::PaymentResponse,
            // Operations
            reports::OverdueReportResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "rentals", description = "Checkout and return"),
        (name = "users", description = "User registration and history"),
        (name = "operations", description = "Dashboard and overdue tracking"),
        (name = "payments", description = "Fine payment recording")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
