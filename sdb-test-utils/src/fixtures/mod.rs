//! Database fixtures for test execution.
//!
//! - `equipment` - LNB, switch, motor and unicable rows
//! - `satellite` - satellite, carrier and service rows
//! - `project` - project, build and mapping rows
//! - `factory` - in-memory entity models with standard test values

pub mod equipment;
pub mod factory;
pub mod project;
pub mod satellite;
