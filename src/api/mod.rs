//! API handlers for Circulation REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod payments;
pub mod rentals;
pub mod reports;
pub mod users;
