//! Repositories for the four flat equipment tables.

pub mod lnb;
pub mod motor;
pub mod switch;
pub mod unicable;
