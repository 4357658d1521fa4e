//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main crate's `server::model::db` module.

pub type LnbModel = entity::equipment_lnb::Model;
pub type SwitchModel = entity::equipment_switch::Model;
pub type MotorModel = entity::equipment_motor::Model;
pub type UnicableModel = entity::equipment_unicable::Model;
pub type SatelliteModel = entity::satellite::Model;
pub type CarrierModel = entity::satellite_carrier::Model;
pub type ServiceModel = entity::carrier_service::Model;
pub type ProjectModel = entity::project::Model;
pub type BuildModel = entity::project_build::Model;
pub type MappingModel = entity::equipment_mapping::Model;
