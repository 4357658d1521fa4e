//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the service layer can run them
//! on the connection pool or inside a transaction. They take domain records and return entity
//! models; conversion into domain types happens in [`crate::server::model::db`].

pub mod activity;
pub mod build;
pub mod equipment;
pub mod mapping;
pub mod project;
pub mod satellite;

/// Case-insensitive form of a record name, used for duplicate-name checks.
pub(crate) fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}
