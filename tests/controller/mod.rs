//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted input and checked by response status; the router
//! tests send requests through the full application router.

mod activity;
mod bin;
mod equipment;
mod mapping;
mod project;
mod router;
