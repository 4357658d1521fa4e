//! Server application core modules.
//!
//! This module contains all server-side functionality: HTTP routing, the equipment, satellite,
//! project and mapping stores, the SDB document serializer and deserializer, and the external
//! `.bin` codec runner.

pub mod codec;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod sdb;
pub mod service;
pub mod startup;
pub mod util;
