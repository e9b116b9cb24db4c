//! Business logic services

pub mod catalog;
pub mod rentals;
pub mod reports;
pub mod users;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub users: users::UsersService,
    pub rentals: rentals::RentalsService,
    pub reports: reports::ReportsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            rentals: rentals::RentalsService::new(repository.clone()),
            reports: reports::ReportsService::new(repository),
        }
    }
}
