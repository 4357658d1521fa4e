//! HTTP controller endpoints for the SDB configuration API.
//!
//! Controllers parse path, query and body input, call into the service layer, and map results
//! to JSON responses. Errors are returned with `?` and rendered by [`crate::server::error::Error`].

pub mod activity;
pub mod bin;
pub mod build;
pub mod equipment;
pub mod mapping;
pub mod project;
pub mod satellite;
