//! Server application models: application state and database model aliases/conversions.

pub mod app;
pub mod db;
