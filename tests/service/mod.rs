//! Store and cascade behavior exercised through the public services.

mod equipment;
mod project;
mod round_trip;
mod satellite;
