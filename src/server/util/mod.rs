//! Utility helpers shared by repositories and services: id generation and timestamps.

pub mod id;
pub mod time;
